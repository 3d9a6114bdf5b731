/// The closed set of résumé sections the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Certifications,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
        }
    }
}

/// Header strings, longest first. A line is a header when its upper-cased
/// form starts with one of these, so `WORK EXPERIENCE` must be tried before
/// `EXPERIENCE` would be and `PROFESSIONAL SUMMARY` before `SUMMARY`.
const SECTION_HEADERS: &[(&str, SectionKind)] = &[
    ("PROFESSIONAL EXPERIENCE", SectionKind::Experience),
    ("PROFESSIONAL SUMMARY", SectionKind::Summary),
    ("TECHNICAL SKILLS", SectionKind::Skills),
    ("WORK EXPERIENCE", SectionKind::Experience),
    ("CERTIFICATIONS", SectionKind::Certifications),
    ("EXPERIENCE", SectionKind::Experience),
    ("EDUCATION", SectionKind::Education),
    ("PROJECTS", SectionKind::Projects),
    ("SUMMARY", SectionKind::Summary),
    ("SKILLS", SectionKind::Skills),
];

/// One header's worth of content lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub lines: Vec<&'a str>,
}

pub fn detect_header(line: &str) -> Option<SectionKind> {
    let upper = line.to_uppercase();
    SECTION_HEADERS
        .iter()
        .find(|(header, _)| upper.starts_with(header))
        .map(|(_, kind)| *kind)
}

/// Partitions normalized lines into sections.
///
/// Lines before the first header are discarded. A section is only emitted
/// when it collected at least one line, so two headers in a row yield one
/// section (the second).
pub fn segment<'a>(lines: &[&'a str]) -> Vec<Section<'a>> {
    let mut sections = Vec::new();
    let mut current: Option<Section<'a>> = None;

    for &line in lines {
        match detect_header(line) {
            Some(kind) => {
                sections.extend(current.take().filter(|s| !s.lines.is_empty()));
                current = Some(Section {
                    kind,
                    lines: Vec::new(),
                });
            }
            None => {
                if let Some(section) = current.as_mut() {
                    section.lines.push(line);
                }
            }
        }
    }

    sections.extend(current.filter(|s| !s.lines.is_empty()));
    sections
}

/// The lines above the first section header (name, title, contact block).
pub fn preamble<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let end = lines
        .iter()
        .position(|line| detect_header(line).is_some())
        .unwrap_or(lines.len());
    &lines[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_ordered_longest_first() {
        let lengths: Vec<usize> = SECTION_HEADERS.iter().map(|(h, _)| h.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_detect_header_is_case_insensitive_and_prefix_based() {
        assert_eq!(detect_header("Experience"), Some(SectionKind::Experience));
        assert_eq!(
            detect_header("Work Experience"),
            Some(SectionKind::Experience)
        );
        assert_eq!(
            detect_header("PROFESSIONAL SUMMARY"),
            Some(SectionKind::Summary)
        );
        assert_eq!(
            detect_header("Technical Skills & Tools"),
            Some(SectionKind::Skills)
        );
        assert_eq!(
            detect_header("Certifications and Awards"),
            Some(SectionKind::Certifications)
        );
        assert_eq!(detect_header("Software Engineer at Acme"), None);
    }

    #[test]
    fn test_segment_discards_preamble_and_emits_in_order() {
        let lines = vec![
            "Jane Doe",
            "jane@example.com",
            "SUMMARY",
            "Builds things.",
            "SKILLS",
            "Rust, Go",
        ];
        let sections = segment(&lines);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Summary);
        assert_eq!(sections[0].lines, vec!["Builds things."]);
        assert_eq!(sections[1].kind, SectionKind::Skills);
        assert_eq!(sections[1].lines, vec!["Rust, Go"]);
    }

    #[test]
    fn test_segment_skips_empty_sections() {
        let lines = vec!["EDUCATION", "PROJECTS", "PORTFOLIO SITE"];
        let sections = segment(&lines);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Projects);
    }

    #[test]
    fn test_segment_without_headers_is_empty() {
        assert!(segment(&["Jane Doe", "Some text"]).is_empty());
    }

    #[test]
    fn test_preamble_stops_at_first_header() {
        let lines = vec!["Jane Doe", "https://jane.dev", "EXPERIENCE", "x"];
        assert_eq!(preamble(&lines), &["Jane Doe", "https://jane.dev"]);
        let no_headers = vec!["Jane Doe"];
        assert_eq!(preamble(&no_headers), &["Jane Doe"]);
    }
}
