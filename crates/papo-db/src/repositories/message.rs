//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use papo_core::entities::Message;
use papo_core::traits::{MessageRepository, RepoResult};

use crate::mappers::MessageColumns;
use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, message), fields(from = %message.from, kind = %message.kind))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO messages (from_name, to_name, body, kind, sent_time)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&message.from)
        .bind(&message.to)
        .bind(&message.text)
        .bind(message.kind.as_str())
        .bind(&message.time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, messages), fields(count = messages.len()))]
    async fn create_many(&self, messages: &[Message]) -> RepoResult<()> {
        let columns = MessageColumns::new(messages);
        if columns.is_empty() {
            return Ok(());
        }

        // Rows are inserted in array order so the serial ids follow the slice.
        sqlx::query(
            r"
            INSERT INTO messages (from_name, to_name, body, kind, sent_time)
            SELECT from_name, to_name, body, kind, sent_time
            FROM UNNEST($1::TEXT[], $2::TEXT[], $3::TEXT[], $4::TEXT[], $5::TEXT[])
                WITH ORDINALITY AS batch(from_name, to_name, body, kind, sent_time, position)
            ORDER BY position
            ",
        )
        .bind(&columns.from_names)
        .bind(&columns.to_names)
        .bind(&columns.bodies)
        .bind(&columns.kinds)
        .bind(&columns.sent_times)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, from_name, to_name, body, kind, sent_time
            FROM messages
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Message::try_from).collect()
    }
}
