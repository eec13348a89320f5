//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! String fields are trimmed while deserializing, so validation sees the
//! trimmed value.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use papo_core::entities::MessageType;
use papo_core::is_valid_participant_name;

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

fn validate_participant_name(name: &str) -> Result<(), ValidationError> {
    if is_valid_participant_name(name) {
        Ok(())
    } else {
        Err(ValidationError::new("alphanumeric")
            .with_message("Name must contain only letters and digits".into()))
    }
}

fn validate_postable_type(kind: &str) -> Result<(), ValidationError> {
    match kind.parse::<MessageType>() {
        Ok(kind) if kind.is_user_postable() => Ok(()),
        _ => Err(ValidationError::new("message_type")
            .with_message("Type must be message or private_message".into())),
    }
}

// ============================================================================
// Participant Requests
// ============================================================================

/// Register participant request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateParticipantRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, message = "Name is required"),
        custom(function = "validate_participant_name")
    )]
    pub name: String,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Post message request; the sender comes from the `user` header
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Recipient is required"))]
    pub to: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,

    #[serde(rename = "type", deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_postable_type"))]
    pub kind: String,
}

impl CreateMessageRequest {
    /// Parsed message type
    ///
    /// Only meaningful after `validate()` succeeded.
    pub fn message_type(&self) -> Option<MessageType> {
        self.kind.parse().ok()
    }
}
