use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns::DateRange;
use crate::models::resume::EducationEntry;

static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-–—]\s*(\d{4}|Present)").unwrap());

const INSTITUTION_WORDS: &[&str] = &["University", "College", "Institute"];
const DEGREE_MARKERS: &[&str] = &["Bachelor", "Master", "B.", "M."];

pub fn match_year_range(line: &str) -> Option<DateRange> {
    let captures = YEAR_RANGE_RE.captures(line)?;
    Some(DateRange {
        start: captures.get(1)?.as_str().to_string(),
        end: captures.get(2)?.as_str().to_string(),
    })
}

pub fn names_institution(line: &str) -> bool {
    INSTITUTION_WORDS.iter().any(|word| line.contains(word))
}

pub fn names_degree(line: &str) -> bool {
    DEGREE_MARKERS.iter().any(|marker| line.contains(marker))
}

/// A year range or an institution name opens a new entry.
pub fn starts_entry(line: &str) -> bool {
    names_institution(line) || match_year_range(line).is_some()
}

pub fn parse_education(lines: &[&str]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut current: Option<EducationEntry> = None;

    for &line in lines {
        if starts_entry(line) {
            entries.extend(current.take());
            let mut entry = EducationEntry::default();
            if names_institution(line) {
                entry.institution = line.to_string();
            }
            if let Some(range) = match_year_range(line) {
                entry.start = range.start;
                entry.end = range.end;
            }
            current = Some(entry);
        } else if let Some(entry) = current.as_mut() {
            if entry.degree.is_empty() && names_degree(line) {
                entry.degree = line.to_string();
            } else {
                entry.notes.push(line.to_string());
            }
        }
    }

    entries.extend(current);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_line_opens_entry_with_dates() {
        let lines = vec![
            "Stanford University, 2015 - 2019",
            "Bachelor of Science in Computer Science",
            "GPA 3.9",
        ];
        let entries = parse_education(&lines);
        assert_eq!(entries.len(), 1);
        let edu = &entries[0];
        assert_eq!(edu.institution, "Stanford University, 2015 - 2019");
        assert_eq!(edu.start, "2015");
        assert_eq!(edu.end, "2019");
        assert_eq!(edu.degree, "Bachelor of Science in Computer Science");
        assert_eq!(edu.notes, vec!["GPA 3.9"]);
    }

    #[test]
    fn test_institute_counts_as_institution() {
        let entries = parse_education(&["Indian Institute of Technology"]);
        assert_eq!(entries[0].institution, "Indian Institute of Technology");
    }

    #[test]
    fn test_year_range_alone_opens_new_entry() {
        let lines = vec!["City College", "M.Sc. Physics", "2012 - 2014"];
        let entries = parse_education(&lines);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "M.Sc. Physics");
        assert_eq!(entries[1].institution, "");
        assert_eq!(entries[1].start, "2012");
        assert_eq!(entries[1].end, "2014");
    }

    #[test]
    fn test_only_first_degree_line_is_kept_as_degree() {
        let lines = vec![
            "State University",
            "Master of Engineering",
            "Bachelor of Engineering",
        ];
        let entries = parse_education(&lines);
        assert_eq!(entries[0].degree, "Master of Engineering");
        assert_eq!(entries[0].notes, vec!["Bachelor of Engineering"]);
    }

    #[test]
    fn test_present_end_and_leading_lines_dropped() {
        let lines = vec!["Coursework: Algorithms", "2021 - Present"];
        let entries = parse_education(&lines);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].end, "Present");
        assert!(entries[0].notes.is_empty());
    }
}
