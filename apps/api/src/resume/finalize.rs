use crate::models::resume::ResumeRecord;

pub const NO_EXPERIENCE_WARNING: &str = "No experience entries found";

/// (found, not found) scores per section.
const PERSONAL_CONFIDENCE: (f64, f64) = (0.9, 0.3);
const EXPERIENCE_CONFIDENCE: (f64, f64) = (0.8, 0.2);
const SKILLS_CONFIDENCE: (f64, f64) = (0.85, 0.3);

fn pick((found, missing): (f64, f64), present: bool) -> f64 {
    if present {
        found
    } else {
        missing
    }
}

/// Scores the record, flags missing key fields and records warnings. Runs
/// once, after every section has been applied.
pub fn finalize(record: &mut ResumeRecord) {
    let confidence = &mut record.notes.confidence;
    confidence.insert(
        "personal".to_string(),
        pick(PERSONAL_CONFIDENCE, !record.personal.name.is_empty()),
    );
    confidence.insert(
        "experience".to_string(),
        pick(EXPERIENCE_CONFIDENCE, !record.experience.is_empty()),
    );
    confidence.insert(
        "skills".to_string(),
        pick(SKILLS_CONFIDENCE, !record.skills.languages.is_empty()),
    );

    if record.personal.name.is_empty() {
        record.notes.fields_missing.push("name".to_string());
    }
    if record.personal.contacts.email.is_empty() {
        record.notes.fields_missing.push("email".to_string());
    }
    if record.experience.is_empty() {
        record.notes.warnings.push(NO_EXPERIENCE_WARNING.to_string());
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::resume::ExperienceEntry;

    #[test]
    fn test_empty_record_gets_low_scores_and_flags() {
        let mut record = ResumeRecord::new("resume.pdf", Utc::now());
        finalize(&mut record);

        assert_eq!(record.notes.confidence["personal"], 0.3);
        assert_eq!(record.notes.confidence["experience"], 0.2);
        assert_eq!(record.notes.confidence["skills"], 0.3);
        assert_eq!(record.notes.fields_missing, vec!["name", "email"]);
        assert_eq!(record.notes.warnings, vec![NO_EXPERIENCE_WARNING]);
    }

    #[test]
    fn test_populated_record_gets_high_scores() {
        let mut record = ResumeRecord::new("resume.pdf", Utc::now());
        record.personal.name = "Jane Doe".to_string();
        record.personal.contacts.email = "jane@example.com".to_string();
        record.experience.push(ExperienceEntry::default());
        record.skills.languages.push("Rust".to_string());
        finalize(&mut record);

        assert_eq!(record.notes.confidence["personal"], 0.9);
        assert_eq!(record.notes.confidence["experience"], 0.8);
        assert_eq!(record.notes.confidence["skills"], 0.85);
        assert!(record.notes.fields_missing.is_empty());
        assert!(record.notes.warnings.is_empty());
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        for (found, missing) in [PERSONAL_CONFIDENCE, EXPERIENCE_CONFIDENCE, SKILLS_CONFIDENCE] {
            assert!((0.0..=1.0).contains(&found));
            assert!((0.0..=1.0).contains(&missing));
        }
    }
}
