use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The structured résumé written by `parse-resume` and served to the site.
///
/// Every list defaults to empty and every scalar string to `""`, so the
/// serialized shape never has absent fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub meta: ResumeMeta,
    pub personal: Personal,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
    pub notes: ExtractionNotes,
}

impl ResumeRecord {
    pub fn new(source_file: impl Into<String>, parsed_at: DateTime<Utc>) -> Self {
        Self {
            meta: ResumeMeta {
                source_file: source_file.into(),
                parsed_at,
            },
            personal: Personal::default(),
            summary: String::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            education: Vec::new(),
            skills: Skills::default(),
            certifications: Vec::new(),
            notes: ExtractionNotes::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMeta {
    pub source_file: String,
    pub parsed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub location: String,
    pub contacts: Contacts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub location: String,
    /// Free-text date token, e.g. `Jan 2021`. Not parsed into a calendar type.
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub live: String,
    pub repo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub start: String,
    pub end: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub aiml: Vec<String>,
    pub databases: Vec<String>,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionNotes {
    pub warnings: Vec<String>,
    pub fields_missing: Vec<String>,
    /// Section name → heuristic score in [0, 1]. Ordered for stable output.
    pub confidence: BTreeMap<String, f64>,
}
