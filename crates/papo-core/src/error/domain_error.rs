//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid message type: {0}")]
    InvalidMessageType(String),

    #[error("Unknown sender: {0}")]
    UnknownSender(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Participant name already in use: {0}")]
    ParticipantAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ParticipantNotFound(_) => "UNKNOWN_PARTICIPANT",
            Self::InvalidMessageType(_) => "INVALID_MESSAGE_TYPE",
            Self::UnknownSender(_) => "UNKNOWN_SENDER",
            Self::ParticipantAlreadyExists(_) => "NAME_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ParticipantNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidMessageType(_) | Self::UnknownSender(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ParticipantAlreadyExists(_))
    }
}
