//! Line-level recognizers shared by more than one section parser.

use once_cell::sync::Lazy;
use regex::Regex;

static TECH_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:tech(?:nologies)?(?:\s+stack)?|stack|built\s+with)\s*:\s*(.+)$").unwrap()
});

const BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// Free-text start/end tokens, e.g. `Jan 2021` / `Present`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Returns the line without its leading bullet marker, or `None` when the
/// line does not start with one.
pub fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET_MARKERS).map(str::trim_start)
}

/// `Tech: Rust, Kafka` style lines attached to a job or project.
pub fn match_tech_line(line: &str) -> Option<Vec<String>> {
    let captures = TECH_LINE_RE.captures(line)?;
    let items = split_list(captures.get(1)?.as_str());
    (!items.is_empty()).then_some(items)
}

/// Splits on commas and semicolons, trimming and dropping empty items.
pub fn split_list(text: &str) -> Vec<String> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bullet_handles_each_marker() {
        assert_eq!(strip_bullet("• Shipped it"), Some("Shipped it"));
        assert_eq!(strip_bullet("- Shipped it"), Some("Shipped it"));
        assert_eq!(strip_bullet("*Shipped it"), Some("Shipped it"));
        assert_eq!(strip_bullet("Shipped it"), None);
    }

    #[test]
    fn test_tech_line_variants() {
        assert_eq!(
            match_tech_line("Tech: Rust, Kafka; PostgreSQL"),
            Some(vec![
                "Rust".to_string(),
                "Kafka".to_string(),
                "PostgreSQL".to_string()
            ])
        );
        assert!(match_tech_line("Tech Stack: Go").is_some());
        assert!(match_tech_line("Built with: Next.js").is_some());
        assert!(match_tech_line("technologies: Axum").is_some());
        assert_eq!(match_tech_line("Tech:   "), None);
        assert_eq!(match_tech_line("Led the tech roadmap"), None);
    }

    #[test]
    fn test_split_list_drops_empties() {
        assert_eq!(split_list(" a, ,b;c ;"), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }
}
