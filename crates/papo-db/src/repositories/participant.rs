//! PostgreSQL implementation of ParticipantRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use papo_core::entities::Participant;
use papo_core::error::DomainError;
use papo_core::traits::{ParticipantRepository, RepoResult};

use crate::models::ParticipantModel;

use super::error::{map_db_error, map_unique_violation, participant_not_found};

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM participants WHERE name = $1)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Participant>> {
        let results = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT name, last_status
            FROM participants
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Participant::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, participant: &Participant) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO participants (name, last_status)
            VALUES ($1, $2)
            ",
        )
        .bind(&participant.name)
        .bind(participant.last_status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ParticipantAlreadyExists(participant.name.clone())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn touch(&self, name: &str, at: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE participants
            SET last_status = $2
            WHERE name = $1
            ",
        )
        .bind(name)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(participant_not_found(name));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_idle(&self, threshold: DateTime<Utc>) -> RepoResult<Vec<Participant>> {
        let results = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT name, last_status
            FROM participants
            WHERE last_status <= $1
            ORDER BY last_status, name
            ",
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Participant::from).collect())
    }

    #[instrument(skip(self), fields(count = names.len()))]
    async fn delete_many(&self, names: &[String]) -> RepoResult<u64> {
        if names.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            r"
            DELETE FROM participants
            WHERE name = ANY($1)
            ",
        )
        .bind(names)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgParticipantRepository>();
    }
}
