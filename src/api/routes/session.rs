//! Session Routes
//!
//! Client session state: counter, saved filters, and chat log.
//!
//! - GET /api/v1/session - Current session state
//! - POST /api/v1/session/counter/increment - Add one to the counter
//! - POST /api/v1/session/counter/decrement - Subtract one from the counter
//! - POST /api/v1/session/counter/reset - Reset the counter to zero
//! - PUT /api/v1/session/filters - Replace the saved filters
//! - POST /api/v1/session/messages - Append a chat message
//! - DELETE /api/v1/session/messages - Clear the chat log
//! - POST /api/v1/session/chat - Send a message and receive its echo

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ChatRequest, CounterResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::data::Filters;
use crate::session::{ChatMessage, SessionState};

/// GET /api/v1/session
pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionState> {
    let session = state.session.read().await;
    Json(session.state().clone())
}

/// POST /api/v1/session/counter/increment
pub async fn increment(State(state): State<Arc<AppState>>) -> ApiResult<Json<CounterResponse>> {
    let counter = state.session.write().await.increment()?;
    Ok(Json(CounterResponse { counter }))
}

/// POST /api/v1/session/counter/decrement
pub async fn decrement(State(state): State<Arc<AppState>>) -> ApiResult<Json<CounterResponse>> {
    let counter = state.session.write().await.decrement()?;
    Ok(Json(CounterResponse { counter }))
}

/// POST /api/v1/session/counter/reset
pub async fn reset(State(state): State<Arc<AppState>>) -> ApiResult<Json<CounterResponse>> {
    let counter = state.session.write().await.reset()?;
    Ok(Json(CounterResponse { counter }))
}

/// PUT /api/v1/session/filters
pub async fn set_filters(
    State(state): State<Arc<AppState>>,
    Json(filters): Json<Filters>,
) -> ApiResult<Json<SessionState>> {
    let mut session = state.session.write().await;
    session.set_filters(filters)?;
    tracing::debug!(filters = ?session.filters(), "Updated saved filters");
    Ok(Json(session.state().clone()))
}

/// POST /api/v1/session/messages
pub async fn add_message(
    State(state): State<Arc<AppState>>,
    Json(message): Json<ChatMessage>,
) -> Json<SessionState> {
    let mut session = state.session.write().await;
    session.add_message(message);
    Json(session.state().clone())
}

/// DELETE /api/v1/session/messages
pub async fn clear_messages(State(state): State<Arc<AppState>>) -> Json<SessionState> {
    let mut session = state.session.write().await;
    session.clear_messages();
    Json(session.state().clone())
}

/// POST /api/v1/session/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<SessionState>> {
    let mut session = state.session.write().await;
    session.chat(&req.content)?;
    Ok(Json(session.state().clone()))
}
