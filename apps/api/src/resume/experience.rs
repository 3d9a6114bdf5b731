use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns::{match_tech_line, strip_bullet, DateRange};
use crate::models::resume::ExperienceEntry;

// "Role at Company", "Role @ Company", "Role | Company", each with an optional
// " - Location" tail.
static JOB_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+(?:at|@|\|)\s+(.+?)(?:\s+[-–—]\s+(.+))?$").unwrap()
});
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\w+\s+\d{4})\s*[-–—]\s*(\w+\s+\d{4}|Present)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHeading {
    pub role: String,
    pub company: String,
    pub location: String,
}

/// What a single experience line means to the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceLine<'a> {
    Bullet(&'a str),
    Tech(Vec<String>),
    Job(JobHeading, Option<DateRange>),
    Dates(DateRange),
    Text(&'a str),
}

pub fn match_job_line(line: &str) -> Option<JobHeading> {
    let captures = JOB_LINE_RE.captures(line)?;
    Some(JobHeading {
        role: captures.get(1)?.as_str().trim().to_string(),
        company: captures.get(2)?.as_str().trim().to_string(),
        location: captures
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

/// `Jan 2021 - Present`, `June 2019 – Dec 2020`.
pub fn match_date_range(line: &str) -> Option<DateRange> {
    let captures = DATE_RANGE_RE.captures(line)?;
    Some(DateRange {
        start: captures.get(1)?.as_str().to_string(),
        end: captures.get(2)?.as_str().to_string(),
    })
}

/// Classifies a line. A leading bullet marker always wins so that bullets
/// like "- Shipped X at scale" never open a new job; after that a job
/// heading takes precedence over a bare date range.
pub fn classify(line: &str) -> ExperienceLine<'_> {
    if let Some(text) = strip_bullet(line) {
        return ExperienceLine::Bullet(text);
    }
    if let Some(items) = match_tech_line(line) {
        return ExperienceLine::Tech(items);
    }
    if let Some(heading) = match_job_line(line) {
        return ExperienceLine::Job(heading, match_date_range(line));
    }
    if let Some(range) = match_date_range(line) {
        return ExperienceLine::Dates(range);
    }
    ExperienceLine::Text(line)
}

/// Folds the experience section into entries.
///
/// `bullet_min_len` is the fallback threshold: an unmarked line longer than
/// this many characters is kept as a bullet. The heuristic is broad and also
/// swallows stray lines such as a company address.
pub fn parse_experience(lines: &[&str], bullet_min_len: usize) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ExperienceEntry> = None;

    for line in lines {
        current = step(current, classify(line), bullet_min_len, &mut entries);
    }

    entries.extend(current);
    entries
}

/// One accumulator transition. Pushes the finished entry into `done` whenever
/// a new-job signal arrives while an entry is open.
pub fn step(
    current: Option<ExperienceEntry>,
    line: ExperienceLine<'_>,
    bullet_min_len: usize,
    done: &mut Vec<ExperienceEntry>,
) -> Option<ExperienceEntry> {
    match line {
        ExperienceLine::Job(heading, dates) => {
            done.extend(current);
            let mut entry = ExperienceEntry {
                role: heading.role,
                company: heading.company,
                location: heading.location,
                ..Default::default()
            };
            if let Some(range) = dates {
                entry.start = range.start;
                entry.end = range.end;
            }
            Some(entry)
        }
        ExperienceLine::Dates(range) => match current {
            // "Role at Company" followed by its own date line.
            Some(mut entry) if entry.start.is_empty() => {
                entry.start = range.start;
                entry.end = range.end;
                Some(entry)
            }
            other => {
                done.extend(other);
                Some(ExperienceEntry {
                    start: range.start,
                    end: range.end,
                    ..Default::default()
                })
            }
        },
        ExperienceLine::Bullet(text) => current.map(|mut entry| {
            if !text.is_empty() {
                entry.bullets.push(text.to_string());
            }
            entry
        }),
        ExperienceLine::Tech(items) => current.map(|mut entry| {
            entry.tech.extend(items);
            entry
        }),
        ExperienceLine::Text(text) => current.map(|mut entry| {
            if text.chars().count() > bullet_min_len {
                entry.bullets.push(text.to_string());
            }
            entry
        }),
    }
}
