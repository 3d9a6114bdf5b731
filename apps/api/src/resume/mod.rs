//! Résumé text → `ResumeRecord`.
//!
//! The pipeline is: normalize lines, pull the personal block from the whole
//! text, segment by section header, run each section's parser, then finalize
//! confidence scores and missing-field notes. Every step is best-effort; a
//! heuristic that finds nothing leaves its field empty.

pub mod education;
pub mod experience;
pub mod finalize;
pub mod normalize;
pub mod output;
pub mod patterns;
pub mod personal;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod source;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::resume::{Certification, ResumeRecord, Skills};
use sections::{Section, SectionKind};

pub const DEFAULT_BULLET_MIN_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Unmarked experience lines longer than this are kept as bullets.
    pub bullet_min_len: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            bullet_min_len: DEFAULT_BULLET_MIN_LEN,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    options: ExtractOptions,
}

impl ResumeExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Builds a complete record from extracted text. `parsed_at` is the only
    /// input that is not derived from `text`, so equal inputs give equal
    /// records.
    pub fn extract(&self, text: &str, source_file: &str, parsed_at: DateTime<Utc>) -> ResumeRecord {
        let mut record = ResumeRecord::new(source_file, parsed_at);
        let lines = normalize::normalize_lines(text);

        record.personal = personal::extract_personal(text, &lines);

        for section in sections::segment(&lines) {
            debug!(
                "Section {} with {} lines",
                section.kind.as_str(),
                section.lines.len()
            );
            self.apply_section(&mut record, &section);
        }

        finalize::finalize(&mut record);
        record
    }

    /// Repeated sections (say `EXPERIENCE` and later `WORK EXPERIENCE`) add
    /// to what earlier ones produced.
    fn apply_section(&self, record: &mut ResumeRecord, section: &Section<'_>) {
        let lines = section.lines.as_slice();
        match section.kind {
            SectionKind::Summary => {
                let text = lines.join(" ");
                let text = text.trim();
                if record.summary.is_empty() {
                    record.summary = text.to_string();
                } else {
                    record.summary = format!("{} {text}", record.summary);
                }
            }
            SectionKind::Experience => record.experience.extend(experience::parse_experience(
                lines,
                self.options.bullet_min_len,
            )),
            SectionKind::Education => record.education.extend(education::parse_education(lines)),
            SectionKind::Projects => record.projects.extend(projects::parse_projects(lines)),
            SectionKind::Skills => merge_skills(&mut record.skills, skills::parse_skills(lines)),
            SectionKind::Certifications => {
                record
                    .certifications
                    .extend(lines.iter().map(|line| Certification {
                        name: line.to_string(),
                        date: None,
                    }))
            }
        }
    }
}

fn merge_skills(into: &mut Skills, from: Skills) {
    into.languages.extend(from.languages);
    into.frameworks.extend(from.frameworks);
    into.tools.extend(from.tools);
    into.aiml.extend(from.aiml);
    into.databases.extend(from.databases);
    into.other.extend(from.other);
}
