use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::AppError;

static EMAIL_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const MISSING_FIELDS: &str = "All fields are required";
pub const INVALID_EMAIL: &str = "Invalid email address";

/// Contact-form body. Absent fields deserialize as empty so they are reported
/// by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

pub fn validate_contact(req: &ContactRequest) -> Result<(), AppError> {
    if [&req.name, &req.email, &req.message]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }
    if !EMAIL_SHAPE_RE.is_match(req.email.trim()) {
        return Err(AppError::Validation(INVALID_EMAIL.to_string()));
    }
    Ok(())
}
