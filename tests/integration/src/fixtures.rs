//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique alphanumeric participant name
pub fn unique_name() -> String {
    format!("user{}", unique_suffix())
}

/// Register participant request
#[derive(Debug, Serialize)]
pub struct CreateParticipantRequest {
    pub name: String,
}

impl CreateParticipantRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn unique() -> Self {
        Self::new(unique_name())
    }
}

/// Post message request
#[derive(Debug, Serialize)]
pub struct CreateMessageRequest {
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CreateMessageRequest {
    /// Public message to the whole room
    pub fn public(text: &str) -> Self {
        Self {
            to: "Todos".to_string(),
            text: text.to_string(),
            kind: "message".to_string(),
        }
    }

    /// Private message to `to`
    pub fn private(to: &str, text: &str) -> Self {
        Self {
            to: to.to_string(),
            text: text.to_string(),
            kind: "private_message".to_string(),
        }
    }
}

/// Participant response
#[derive(Debug, Deserialize)]
pub struct ParticipantResponse {
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

/// Message response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
}
