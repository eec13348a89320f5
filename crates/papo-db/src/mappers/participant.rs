//! Participant entity <-> model mapper

use papo_core::entities::Participant;

use crate::models::ParticipantModel;

impl From<ParticipantModel> for Participant {
    fn from(model: ParticipantModel) -> Self {
        Participant {
            name: model.name,
            last_status: model.last_status,
        }
    }
}
