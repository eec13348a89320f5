//! Message database model

use sqlx::FromRow;

/// Database model for messages table
///
/// `id` is a BIGSERIAL and encodes insertion order.
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub from_name: String,
    pub to_name: String,
    pub body: String,
    pub kind: String,
    pub sent_time: String,
}
