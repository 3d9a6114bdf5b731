//! Whole-document extractors for the `personal` block. These run over the raw
//! text (or its first lines) independently of section segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::sections::{detect_header, preamble};
use crate::models::resume::{Contacts, Personal};

/// How many leading lines may hold the candidate's name.
const NAME_SEARCH_LINES: usize = 5;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});
static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/([a-zA-Z0-9-]+)").unwrap());
static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com/([a-zA-Z0-9-]+)").unwrap());
// `[\w ]` rather than `[\w\s]` keeps a match from swallowing preceding lines.
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w ]+,[ \t]*[A-Z]{2}\b|[\w ]+,[ \t]*India|[\w ]+,[ \t]*USA").unwrap()
});
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s|,]+").unwrap());

pub fn extract_personal(text: &str, lines: &[&str]) -> Personal {
    let name_index = find_name_line(lines);

    Personal {
        name: name_index.map(|i| lines[i].to_string()).unwrap_or_default(),
        title: name_index
            .and_then(|i| guess_title(lines, i))
            .unwrap_or_default(),
        location: extract_location(text).unwrap_or_default(),
        contacts: Contacts {
            email: extract_email(text).unwrap_or_default(),
            phone: extract_phone(text).unwrap_or_default(),
            linkedin: extract_linkedin(text).unwrap_or_default(),
            github: extract_github(text).unwrap_or_default(),
            website: extract_website(preamble(lines)).unwrap_or_default(),
        },
    }
}

/// Index of the first `Firstname Lastname` line among the leading lines.
pub fn find_name_line(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .take(NAME_SEARCH_LINES)
        .position(|line| NAME_RE.is_match(line))
}

/// The headline right under the name, e.g. `Full Stack Developer`.
pub fn guess_title(lines: &[&str], name_index: usize) -> Option<String> {
    let line = lines.get(name_index + 1)?;
    let len = line.chars().count();
    let looks_like_contact = line.contains('@')
        || line.contains('|')
        || line.contains(',')
        || line.contains("http")
        || line.chars().any(|c| c.is_ascii_digit());

    if (3..=60).contains(&len) && !looks_like_contact && detect_header(line).is_none() {
        Some(line.to_string())
    } else {
        None
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    let handle = LINKEDIN_RE.captures(text)?.get(1)?;
    Some(format!("https://linkedin.com/in/{}", handle.as_str()))
}

pub fn extract_github(text: &str) -> Option<String> {
    let handle = GITHUB_RE.captures(text)?.get(1)?;
    Some(format!("https://github.com/{}", handle.as_str()))
}

pub fn extract_location(text: &str) -> Option<String> {
    LOCATION_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.starts_with(','))
}

/// First personal URL in the header block that is not a LinkedIn or GitHub
/// profile.
pub fn extract_website(header_lines: &[&str]) -> Option<String> {
    header_lines
        .iter()
        .flat_map(|&line| URL_RE.find_iter(line))
        .map(|m| m.as_str())
        .find(|url| {
            let lower = url.to_ascii_lowercase();
            !lower.contains("linkedin.com") && !lower.contains("github.com")
        })
        .map(String::from)
}
