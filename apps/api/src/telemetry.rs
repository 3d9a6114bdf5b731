use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when it parses as a filter directive; otherwise the library
/// and the calling binary both log at `default_level`.
pub fn init_tracing(bin_crate: &str, default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={default_level},{bin_crate}={default_level}",
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
