//! Message entity - represents a chat message or a join/leave event

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Addressee used for messages meant for the whole room
pub const BROADCAST_RECIPIENT: &str = "Todos";

/// Text of the synthetic status message emitted on registration
pub const JOIN_TEXT: &str = "entra na sala...";

/// Text of the synthetic status message emitted on eviction
pub const LEAVE_TEXT: &str = "sai da sala...";

/// Kind of message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Public message
    Message,
    /// Message addressed to a single participant
    PrivateMessage,
    /// Synthetic join/leave event
    Status,
}

impl MessageType {
    /// Get the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }

    /// Public kinds are readable by everyone regardless of addressee
    #[inline]
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Message | Self::Status)
    }

    /// Kinds a participant may post directly (status is system-only)
    #[inline]
    pub fn is_user_postable(&self) -> bool {
        matches!(self, Self::Message | Self::PrivateMessage)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            "status" => Ok(Self::Status),
            _ => Err(format!("Invalid message type: {s}")),
        }
    }
}

/// Message entity
///
/// Messages are immutable once created and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub text: String,
    pub kind: MessageType,
    /// Wall-clock time of creation, `HH:MM:SS`
    pub time: String,
}

impl Message {
    /// Create a new Message stamped with `now`
    pub fn new(
        from: String,
        to: String,
        text: String,
        kind: MessageType,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            from,
            to,
            text,
            kind,
            time: format_clock_time(now),
        }
    }

    /// Status message announcing that `name` joined the room
    pub fn join(name: &str, now: DateTime<Utc>) -> Self {
        Self::status(name, JOIN_TEXT, now)
    }

    /// Status message announcing that `name` left the room
    pub fn leave(name: &str, now: DateTime<Utc>) -> Self {
        Self::status(name, LEAVE_TEXT, now)
    }

    fn status(name: &str, text: &str, now: DateTime<Utc>) -> Self {
        Self::new(
            name.to_string(),
            BROADCAST_RECIPIENT.to_string(),
            text.to_string(),
            MessageType::Status,
            now,
        )
    }

    /// Check if this is a synthetic status message
    #[inline]
    pub fn is_status(&self) -> bool {
        self.kind == MessageType::Status
    }
}

/// Render a timestamp as `HH:MM:SS`
pub fn format_clock_time(now: DateTime<Utc>) -> String {
    now.format("%H:%M:%S").to_string()
}
