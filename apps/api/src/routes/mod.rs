pub mod health;
pub mod resume;

use axum::{routing::get, Router};

use crate::contact::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Contact form
        .route(
            "/api/contact",
            get(handlers::handle_list_contacts).post(handlers::handle_submit_contact),
        )
        // Extracted résumé for the site's sections
        .route("/api/v1/resume", get(resume::handle_get_resume))
        .with_state(state)
}
