//! Showcase REST API
//!
//! HTTP API layer for Showcase, built with Axum.
//!
//! # Endpoints
//!
//! ## Data
//! - `GET /api/v1/data` - Generate a dataset (`type`, `count`, `threshold`, `category`, `seed`)
//! - `POST /api/v1/data` - Filter uploaded records
//! - `GET /api/v1/employees/summary` - Employee headline metrics
//!
//! ## Session
//! - `GET /api/v1/session` - Current session state
//! - `POST /api/v1/session/counter/{increment,decrement,reset}` - Counter operations
//! - `PUT /api/v1/session/filters` - Replace saved filters
//! - `POST /api/v1/session/messages` - Append a chat message
//! - `DELETE /api/v1/session/messages` - Clear the chat log
//! - `POST /api/v1/session/chat` - Send a message, receive its echo
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use showcase::api::{serve, AppState};
//! use showcase::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::from_config(config.clone())?;
//!     serve(state, &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Data routes
        .route(
            "/data",
            get(routes::data::get_data).post(routes::data::process_data),
        )
        .route("/employees/summary", get(routes::data::employee_summary))
        // Session routes
        .route("/session", get(routes::session::get_session))
        .route("/session/counter/increment", post(routes::session::increment))
        .route("/session/counter/decrement", post(routes::session::decrement))
        .route("/session/counter/reset", post(routes::session::reset))
        .route("/session/filters", put(routes::session::set_filters))
        .route(
            "/session/messages",
            post(routes::session::add_message).delete(routes::session::clear_messages),
        )
        .route("/session/chat", post(routes::session::chat));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.api);
    let timeout = Duration::from_secs(state.config.api.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy: permissive unless origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Showcase API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Showcase API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
