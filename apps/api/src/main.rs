use std::net::SocketAddr;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use portfolio::config::Config;
use portfolio::contact::store::ContactStore;
use portfolio::routes::build_router;
use portfolio::state::AppState;
use portfolio::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Serving resume data from {}",
        config.resume_output_path.display()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        contacts: ContactStore::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
