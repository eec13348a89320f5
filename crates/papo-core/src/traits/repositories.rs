//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method is a single store operation;
//! no method spans more than one collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Message, Participant};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Check if a name is taken (exact, case-sensitive match)
    async fn exists(&self, name: &str) -> RepoResult<bool>;

    /// List all active participants
    async fn find_all(&self) -> RepoResult<Vec<Participant>>;

    /// Insert a new participant
    ///
    /// Fails with `ParticipantAlreadyExists` if the name is taken.
    async fn create(&self, participant: &Participant) -> RepoResult<()>;

    /// Set `last_status` for an existing participant
    ///
    /// Fails with `ParticipantNotFound` if no participant has that name.
    async fn touch(&self, name: &str, at: DateTime<Utc>) -> RepoResult<()>;

    /// Find participants whose `last_status <= threshold`
    async fn find_idle(&self, threshold: DateTime<Utc>) -> RepoResult<Vec<Participant>>;

    /// Delete participants by name, returning the number removed
    async fn delete_many(&self, names: &[String]) -> RepoResult<u64>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message to the log
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Append several messages, preserving slice order
    async fn create_many(&self, messages: &[Message]) -> RepoResult<()>;

    /// Full log in insertion order
    async fn find_all(&self) -> RepoResult<Vec<Message>>;
}

// ============================================================================
// Store Health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip to the store
    async fn ping(&self) -> RepoResult<()>;
}
