//! Message handlers
//!
//! Endpoints for posting and polling messages.

use axum::{extract::State, Json};
use papo_service::dto::{CreateMessageRequest, MessageResponse};
use papo_service::MessageService;

use crate::extractors::{MessageLimit, RequestingUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Messages visible to the requesting user
///
/// GET /messages?limit=N
pub async fn get_messages(
    State(state): State<AppState>,
    user: RequestingUser,
    MessageLimit(limit): MessageLimit,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service.get_messages(user.name(), limit).await?;
    Ok(Json(messages))
}

/// Post a message as the requesting user
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    user: RequestingUser,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.send_message(user.name(), request).await?;
    Ok(Created(Json(response)))
}
