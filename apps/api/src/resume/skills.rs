use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns::split_list;
use crate::models::resume::Skills;

// A captured run ends at `;` or at a `.` that closes a sentence. A `.` inside
// a token such as `Next.js` or `Node.js` does not end it.
const RUN: &str = r"((?:[^.;]|\.[^\s.;])+)";

static LANGUAGES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:Programming\s+Languages?|Languages?|Programming)[:\s]+{RUN}"
    ))
    .unwrap()
});
static FRAMEWORKS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)(?:Frameworks?|Libraries)[:\s]+{RUN}")).unwrap());
static TOOLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)(?:Tools?|Technologies)[:\s]+{RUN}")).unwrap());
static AIML_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:AI\s*/\s*ML|Machine\s+Learning)\s*:\s*{RUN}"
    ))
    .unwrap()
});
static DATABASES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\bDatabases?\s*:\s*{RUN}")).unwrap());

/// Fallback tokens must be longer than this to count as a skill.
const OTHER_MIN_LEN: usize = 2;

fn capture_list(re: &Regex, text: &str) -> Vec<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| split_list(m.as_str()))
        .unwrap_or_default()
}

/// Buckets the skills section. The section is handled as one space-joined
/// string; each label regex fills its bucket independently. When neither
/// languages nor frameworks were found, the whole text lands in `other`.
pub fn parse_skills(lines: &[&str]) -> Skills {
    let text = lines.join(" ");

    let mut skills = Skills {
        languages: capture_list(&LANGUAGES_RE, &text),
        frameworks: capture_list(&FRAMEWORKS_RE, &text),
        tools: capture_list(&TOOLS_RE, &text),
        aiml: capture_list(&AIML_RE, &text),
        databases: capture_list(&DATABASES_RE, &text),
        other: Vec::new(),
    };

    if skills.languages.is_empty() && skills.frameworks.is_empty() {
        skills.other = split_list(&text)
            .into_iter()
            .filter(|s| s.chars().count() > OTHER_MIN_LEN)
            .collect();
    }

    skills
}
