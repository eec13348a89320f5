//! Message entity <-> model mapper

use papo_core::entities::{Message, MessageType};
use papo_core::error::DomainError;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
///
/// Fails only if the row carries a kind the schema check should have rejected.
impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse::<MessageType>()
            .map_err(|e| DomainError::DatabaseError(format!("message {}: {e}", model.id)))?;

        Ok(Message {
            from: model.from_name,
            to: model.to_name,
            text: model.body,
            kind,
            time: model.sent_time,
        })
    }
}

/// Column-wise view of a batch of messages, for `UNNEST` inserts
#[derive(Debug, Default)]
pub struct MessageColumns {
    pub from_names: Vec<String>,
    pub to_names: Vec<String>,
    pub bodies: Vec<String>,
    pub kinds: Vec<String>,
    pub sent_times: Vec<String>,
}

impl MessageColumns {
    pub fn new(messages: &[Message]) -> Self {
        let mut columns = Self {
            from_names: Vec::with_capacity(messages.len()),
            to_names: Vec::with_capacity(messages.len()),
            bodies: Vec::with_capacity(messages.len()),
            kinds: Vec::with_capacity(messages.len()),
            sent_times: Vec::with_capacity(messages.len()),
        };

        for message in messages {
            columns.from_names.push(message.from.clone());
            columns.to_names.push(message.to.clone());
            columns.bodies.push(message.text.clone());
            columns.kinds.push(message.kind.as_str().to_string());
            columns.sent_times.push(message.time.clone());
        }

        columns
    }

    pub fn len(&self) -> usize {
        self.from_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_names.is_empty()
    }
}
