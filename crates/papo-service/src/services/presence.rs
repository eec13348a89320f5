//! Presence service
//!
//! Registration, heartbeats, the participant list and the inactivity sweep.

use tracing::{debug, info, instrument};

use papo_core::entities::{Message, Participant};
use papo_core::DomainError;

use crate::dto::ParticipantResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Outcome of one sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Names removed, in selection order
    pub evicted: Vec<String>,
}

impl SweepReport {
    pub fn is_empty(&self) -> bool {
        self.evicted.is_empty()
    }
}

/// Presence service
pub struct PresenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PresenceService<'a> {
    /// Create a new PresenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a participant and announce the join
    ///
    /// `name` must already be validated.
    #[instrument(skip(self))]
    pub async fn register(&self, name: &str) -> ServiceResult<ParticipantResponse> {
        if self.ctx.participant_repo().exists(name).await? {
            return Err(DomainError::ParticipantAlreadyExists(name.to_string()).into());
        }

        let now = self.ctx.clock().now();
        let participant = Participant::new(name.to_string(), now);

        // A concurrent registration of the same name loses on the unique key
        self.ctx.participant_repo().create(&participant).await?;
        self.ctx
            .message_repo()
            .create(&Message::join(name, now))
            .await?;

        info!(name = %name, "Participant registered");

        Ok(ParticipantResponse::from(participant))
    }

    /// Record a heartbeat
    #[instrument(skip(self))]
    pub async fn heartbeat(&self, name: &str) -> ServiceResult<()> {
        let now = self.ctx.clock().now();
        self.ctx.participant_repo().touch(name, now).await?;

        debug!(name = %name, "Heartbeat");

        Ok(())
    }

    /// List all active participants
    #[instrument(skip(self))]
    pub async fn list_participants(&self) -> ServiceResult<Vec<ParticipantResponse>> {
        let participants = self.ctx.participant_repo().find_all().await?;
        Ok(participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect())
    }

    /// Evict every participant idle for at least the inactivity limit
    ///
    /// Leave messages are written first, then the participants are deleted.
    /// Nothing is written when no one is idle.
    #[instrument(skip(self))]
    pub async fn sweep(&self) -> ServiceResult<SweepReport> {
        let now = self.ctx.clock().now();
        // A limit reaching past the earliest representable time leaves no one idle
        let Some(threshold) = now.checked_sub_signed(self.ctx.inactive_limit()) else {
            return Ok(SweepReport::default());
        };

        let idle = self.ctx.participant_repo().find_idle(threshold).await?;
        if idle.is_empty() {
            return Ok(SweepReport::default());
        }

        let leaves: Vec<Message> = idle.iter().map(|p| Message::leave(&p.name, now)).collect();
        let evicted: Vec<String> = idle.into_iter().map(|p| p.name).collect();

        self.ctx.message_repo().create_many(&leaves).await?;
        let removed = self.ctx.participant_repo().delete_many(&evicted).await?;

        info!(count = evicted.len(), removed, "Evicted idle participants");

        Ok(SweepReport { evicted })
    }
}
