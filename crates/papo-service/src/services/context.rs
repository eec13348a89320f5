//! Service context - dependency container for services
//!
//! Holds the repositories, the store health probe, the clock and the presence
//! settings. One context is built at startup and shared behind an `Arc` by
//! every handler and the sweeper.

use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;

use papo_core::traits::{
    Clock, MessageRepository, ParticipantRepository, StoreHealth, SystemClock,
};
use papo_db::{PgMessageRepository, PgParticipantRepository, PgPool, PgStoreHealth};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    participant_repo: Arc<dyn ParticipantRepository>,
    message_repo: Arc<dyn MessageRepository>,
    store_health: Arc<dyn StoreHealth>,

    // Time
    clock: Arc<dyn Clock>,
    inactive_limit: TimeDelta,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        participant_repo: Arc<dyn ParticipantRepository>,
        message_repo: Arc<dyn MessageRepository>,
        store_health: Arc<dyn StoreHealth>,
        clock: Arc<dyn Clock>,
        inactive_limit: TimeDelta,
    ) -> Self {
        Self {
            participant_repo,
            message_repo,
            store_health,
            clock,
            inactive_limit,
        }
    }

    // === Repositories ===

    /// Get the participant repository
    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the store health probe
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    // === Time ===

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Idle time after which a participant is evicted
    pub fn inactive_limit(&self) -> TimeDelta {
        self.inactive_limit
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("inactive_limit", &self.inactive_limit)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    clock: Option<Arc<dyn Clock>>,
    inactive_limit: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            participant_repo: None,
            message_repo: None,
            store_health: None,
            clock: None,
            inactive_limit: Duration::from_secs(10),
        }
    }

    /// Use PostgreSQL repositories sharing `pool`
    pub fn pool(self, pool: PgPool) -> Self {
        self.participant_repo(Arc::new(PgParticipantRepository::new(pool.clone())))
            .message_repo(Arc::new(PgMessageRepository::new(pool.clone())))
            .store_health(Arc::new(PgStoreHealth::new(pool)))
    }

    /// Use one value for every repository (e.g. `MemoryStore`)
    pub fn store<S>(self, store: Arc<S>) -> Self
    where
        S: ParticipantRepository + MessageRepository + StoreHealth + 'static,
    {
        self.participant_repo(store.clone())
            .message_repo(store.clone())
            .store_health(store)
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn inactive_limit(mut self, limit: Duration) -> Self {
        self.inactive_limit = limit;
        self
    }

    /// Build the ServiceContext
    ///
    /// The clock defaults to [`SystemClock`].
    ///
    /// # Errors
    /// Returns `ServiceError::Config` if a repository is missing or the
    /// inactivity limit is out of range
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let inactive_limit = TimeDelta::from_std(self.inactive_limit)
            .map_err(|_| ServiceError::config("inactive_limit is out of range"))?;

        Ok(ServiceContext::new(
            self.participant_repo
                .ok_or_else(|| ServiceError::config("participant_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::config("message_repo is required"))?,
            self.store_health
                .ok_or_else(|| ServiceError::config("store_health is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            inactive_limit,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
