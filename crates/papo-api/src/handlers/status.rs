//! Heartbeat handler

use axum::{extract::State, http::StatusCode};
use papo_service::PresenceService;

use crate::extractors::RequestingUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Keep the requesting user's presence alive
///
/// POST /status
pub async fn heartbeat(State(state): State<AppState>, user: RequestingUser) -> ApiResult<StatusCode> {
    PresenceService::new(state.service_context())
        .heartbeat(user.name())
        .await?;
    Ok(StatusCode::OK)
}
