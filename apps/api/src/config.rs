use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Résumé document read by `parse-resume` when no path argument is given.
    pub resume_source_path: PathBuf,
    /// Where `parse-resume` writes the record and where the API reads it.
    pub resume_output_path: PathBuf,
    /// Unmarked experience lines longer than this become bullets.
    pub bullet_min_len: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            resume_source_path: env_or("RESUME_SOURCE_PATH", "resume.pdf").into(),
            resume_output_path: env_or("RESUME_OUTPUT_PATH", "data/resume.json").into(),
            bullet_min_len: env_or("RESUME_BULLET_MIN_LEN", "10")
                .parse::<usize>()
                .context("RESUME_BULLET_MIN_LEN must be a non-negative integer")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
