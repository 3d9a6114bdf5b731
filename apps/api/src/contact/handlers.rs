use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use super::validation::{validate_contact, ContactRequest};
use crate::errors::AppError;
use crate::models::contact::ContactMessage;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub messages: Vec<ContactMessage>,
    pub count: usize,
}

/// POST /api/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactAccepted>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    validate_contact(&req)?;

    let stored = state.contacts.add(req).await;
    info!("New contact message {} from {}", stored.id, stored.email);

    Ok(Json(ContactAccepted {
        success: true,
        message: "Message sent successfully".to_string(),
    }))
}

/// GET /api/contact
pub async fn handle_list_contacts(State(state): State<AppState>) -> Json<ContactListResponse> {
    let messages = state.contacts.list().await;
    let count = messages.len();
    Json(ContactListResponse { messages, count })
}
