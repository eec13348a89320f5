//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, messages, participants, status};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(chat_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Participant, message and heartbeat routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/participants",
            post(participants::create_participant).get(participants::list_participants),
        )
        .route(
            "/messages",
            post(messages::create_message).get(messages::get_messages),
        )
        .route("/status", post(status::heartbeat))
}
