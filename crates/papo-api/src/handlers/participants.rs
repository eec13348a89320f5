//! Participant handlers

use axum::{extract::State, Json};
use papo_service::dto::{CreateParticipantRequest, ParticipantResponse};
use papo_service::PresenceService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a participant
///
/// POST /participants
pub async fn create_participant(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateParticipantRequest>,
) -> ApiResult<Created<Json<ParticipantResponse>>> {
    let service = PresenceService::new(state.service_context());
    let participant = service.register(&request.name).await?;
    Ok(Created(Json(participant)))
}

/// List active participants
///
/// GET /participants
pub async fn list_participants(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ParticipantResponse>>> {
    let service = PresenceService::new(state.service_context());
    let participants = service.list_participants().await?;
    Ok(Json(participants))
}
