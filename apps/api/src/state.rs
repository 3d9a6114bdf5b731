use crate::config::Config;
use crate::contact::store::ContactStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// In-memory contact submissions; lives as long as the server process.
    pub contacts: ContactStore,
}
