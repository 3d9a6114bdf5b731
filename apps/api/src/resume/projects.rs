use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns::{match_tech_line, strip_bullet};
use crate::models::resume::ProjectEntry;

static PROJECT_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|(?:www\.)?github\.com/\S+").unwrap());

/// Where a URL found under a project belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectLink {
    Live(String),
    Repo(String),
}

/// Titles are set in capitals: the line is already upper-case and 4..=49
/// characters long.
pub fn is_project_title(line: &str) -> bool {
    let len = line.chars().count();
    (4..50).contains(&len) && line == line.to_uppercase()
}

/// Only lines mentioning `http` or `github` are scanned. The URL is a repo
/// link when the line mentions GitHub anywhere, otherwise a live link.
pub fn match_project_link(line: &str) -> Option<ProjectLink> {
    if !line.contains("http") && !line.contains("github") {
        return None;
    }
    let url = PROJECT_URL_RE.find(line)?.as_str().to_string();
    if line.to_lowercase().contains("github") {
        Some(ProjectLink::Repo(url))
    } else {
        Some(ProjectLink::Live(url))
    }
}

pub fn parse_projects(lines: &[&str]) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();
    let mut current: Option<ProjectEntry> = None;

    for &line in lines {
        if is_project_title(line) {
            projects.extend(current.take());
            current = Some(ProjectEntry {
                title: line.to_string(),
                ..Default::default()
            });
            continue;
        }

        let Some(project) = current.as_mut() else {
            continue;
        };

        if line.contains("http") || line.contains("github") {
            match match_project_link(line) {
                Some(ProjectLink::Repo(url)) => project.links.repo = url,
                Some(ProjectLink::Live(url)) => project.links.live = url,
                None => {}
            }
        } else if let Some(items) = match_tech_line(line) {
            project.tech.extend(items);
        } else {
            project.description.push_str(strip_bullet(line).unwrap_or(line));
            project.description.push(' ');
        }
    }

    projects.extend(current);
    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_rule() {
        assert!(is_project_title("MY PROJECT"));
        assert!(is_project_title("API2"));
        assert!(!is_project_title("APP"));
        assert!(!is_project_title("My Project"));
        assert!(!is_project_title(&"X".repeat(50)));
        assert!(is_project_title(&"X".repeat(49)));
    }

    #[test]
    fn test_ten_char_title_then_bare_github_link() {
        let lines = vec!["MY PROJECT", "github.com/x/y"];
        let projects = parse_projects(&lines);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "MY PROJECT");
        assert_eq!(projects[0].links.repo, "github.com/x/y");
        assert_eq!(projects[0].links.live, "");
    }

    #[test]
    fn test_live_and_repo_links() {
        let lines = vec![
            "PORTFOLIO SITE",
            "Live: https://jane.dev",
            "Source: https://github.com/jane/site",
        ];
        let projects = parse_projects(&lines);
        assert_eq!(projects[0].links.live, "https://jane.dev");
        assert_eq!(projects[0].links.repo, "https://github.com/jane/site");
    }

    #[test]
    fn test_description_is_naive_concatenation() {
        let lines = vec![
            "CHAT APP",
            "• Realtime chat over websockets",
            "- Deployed on Fly",
            "Handles 1k users",
        ];
        let projects = parse_projects(&lines);
        assert_eq!(
            projects[0].description,
            "Realtime chat over websockets Deployed on Fly Handles 1k users "
        );
    }

    #[test]
    fn test_tech_line_and_multiple_projects() {
        let lines = vec![
            "CHAT APP",
            "Tech: Rust, Axum",
            "TODO CLI",
            "A small terminal app",
        ];
        let projects = parse_projects(&lines);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].tech, vec!["Rust", "Axum"]);
        assert_eq!(projects[1].title, "TODO CLI");
        assert_eq!(projects[1].description, "A small terminal app ");
    }

    #[test]
    fn test_lines_before_first_title_are_dropped() {
        let projects = parse_projects(&["Some intro", "https://example.com"]);
        assert!(projects.is_empty());
    }
}
