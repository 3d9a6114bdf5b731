use std::io::ErrorKind;

use anyhow::Context;
use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/resume
/// Serves the file written by `parse-resume` as-is, so hand corrections made
/// to it after extraction are kept.
pub async fn handle_get_resume(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let path = &state.config.resume_output_path;
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!(
                "No resume data at {}; run parse-resume first",
                path.display()
            )))
        }
        Err(e) => {
            return Err(AppError::Internal(
                anyhow::Error::new(e).context(format!("reading {}", path.display())),
            ))
        }
    };

    let value: Value = serde_json::from_slice(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(Json(value))
}
