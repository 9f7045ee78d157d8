//! Showcase API Server
//!
//! Run with: cargo run --bin showcase
//!
//! # Configuration
//!
//! Settings come from the first config file found (see `Config::load_default`)
//! or from defaults, with environment overrides:
//! - `SHOWCASE_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SHOWCASE_API_PORT`: Port to listen on (default: 8083)
//! - `SHOWCASE_DATA_DIR`: Session data directory
//! - `SHOWCASE_MAX_COUNT`: Largest record count per request (default: 100000)
//! - `SHOWCASE_LOG_LEVEL` / `SHOWCASE_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Takes precedence over the configured log level

use showcase::api::{serve, AppState};
use showcase::config::{Config, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    init_logging(&config.logging);

    tracing::info!("Starting Showcase API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Generator limits: default_count={}, max_count={}",
        config.generator.default_count,
        config.generator.max_count
    );

    let state = AppState::from_config(config.clone())?;

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Showcase API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` wins when set
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("showcase={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
