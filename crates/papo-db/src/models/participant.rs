//! Participant database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for participants table
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantModel {
    pub name: String,
    pub last_status: DateTime<Utc>,
}
