use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, error, info, warn};

use portfolio::config::Config;
use portfolio::models::resume::ResumeRecord;
use portfolio::resume::output::write_record;
use portfolio::resume::source::load_resume_text;
use portfolio::resume::{ExtractOptions, ResumeExtractor};
use portfolio::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err:#}");
            std::process::exit(2);
        }
    };
    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    if let Err(err) = run(config).await {
        error!("Resume parsing failed: {err:#}");
        std::process::exit(1);
    }
}

/// Usage: parse-resume [INPUT] [OUTPUT]
async fn run(config: Config) -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.resume_source_path.clone());
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.resume_output_path.clone());

    info!("Parsing resume {}", input.display());
    let text = load_resume_text(&input)
        .await
        .with_context(|| format!("could not extract text from {}", input.display()))?;
    debug!("Raw text:\n{text}");

    let source_file = input
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("resume.pdf")
        .to_string();

    let extractor = ResumeExtractor::new(ExtractOptions {
        bullet_min_len: config.bullet_min_len,
    });
    let record = extractor.extract(&text, &source_file, Utc::now());

    write_record(&record, &output)?;
    info!("Resume parsed successfully");

    print_summary(&record, &output);
    Ok(())
}

fn print_summary(record: &ResumeRecord, output: &Path) {
    let or_missing = |value: &str| {
        if value.is_empty() {
            "NOT FOUND".to_string()
        } else {
            value.to_string()
        }
    };
    let skills = &record.skills;

    println!("Output: {}", output.display());
    println!();
    println!("Summary:");
    println!("   Name: {}", or_missing(&record.personal.name));
    println!("   Email: {}", or_missing(&record.personal.contacts.email));
    println!("   Experience entries: {}", record.experience.len());
    println!("   Projects: {}", record.projects.len());
    println!("   Education: {}", record.education.len());
    println!(
        "   Skills: {}",
        skills.languages.len() + skills.frameworks.len() + skills.tools.len()
    );

    if !record.notes.fields_missing.is_empty() {
        println!();
        println!(
            "Missing fields: {}",
            record.notes.fields_missing.join(", ")
        );
    }
    for warning in &record.notes.warnings {
        warn!("{warning}");
    }
}
