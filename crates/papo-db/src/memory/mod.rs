//! In-process store
//!
//! Implements every repository trait over two locked vectors. Used by the
//! service and HTTP tests and by `STORE_BACKEND=memory` local runs. Each
//! operation takes its lock once, so individual operations are atomic just
//! like single statements against PostgreSQL.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use papo_core::entities::{Message, Participant};
use papo_core::error::DomainError;
use papo_core::traits::{MessageRepository, ParticipantRepository, RepoResult, StoreHealth};

/// Memory-backed store for participants and messages
#[derive(Debug, Default)]
pub struct MemoryStore {
    participants: RwLock<Vec<Participant>>,
    messages: RwLock<Vec<Message>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a lost connection: every operation fails until reset
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of messages in the log
    pub fn message_count(&self) -> usize {
        self.messages.read().len()
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ParticipantRepository for MemoryStore {
    async fn exists(&self, name: &str) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self.participants.read().iter().any(|p| p.name == name))
    }

    async fn find_all(&self) -> RepoResult<Vec<Participant>> {
        self.check_available()?;
        Ok(self.participants.read().clone())
    }

    async fn create(&self, participant: &Participant) -> RepoResult<()> {
        self.check_available()?;
        let mut participants = self.participants.write();
        if participants.iter().any(|p| p.name == participant.name) {
            return Err(DomainError::ParticipantAlreadyExists(
                participant.name.clone(),
            ));
        }
        participants.push(participant.clone());
        Ok(())
    }

    async fn touch(&self, name: &str, at: DateTime<Utc>) -> RepoResult<()> {
        self.check_available()?;
        let mut participants = self.participants.write();
        let participant = participants
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| DomainError::ParticipantNotFound(name.to_string()))?;
        participant.touch(at);
        Ok(())
    }

    async fn find_idle(&self, threshold: DateTime<Utc>) -> RepoResult<Vec<Participant>> {
        self.check_available()?;
        Ok(self
            .participants
            .read()
            .iter()
            .filter(|p| p.is_idle_since(threshold))
            .cloned()
            .collect())
    }

    async fn delete_many(&self, names: &[String]) -> RepoResult<u64> {
        self.check_available()?;
        let mut participants = self.participants.write();
        let before = participants.len();
        participants.retain(|p| !names.contains(&p.name));
        Ok((before - participants.len()) as u64)
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn create(&self, message: &Message) -> RepoResult<()> {
        self.check_available()?;
        self.messages.write().push(message.clone());
        Ok(())
    }

    async fn create_many(&self, messages: &[Message]) -> RepoResult<()> {
        self.check_available()?;
        self.messages.write().extend_from_slice(messages);
        Ok(())
    }

    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        self.check_available()?;
        Ok(self.messages.read().clone())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn participant(name: &str, secs: i64) -> Participant {
        Participant::new(name.to_string(), at(secs))
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let store = MemoryStore::new();
        ParticipantRepository::create(&store, &participant("alice", 0))
            .await
            .unwrap();

        let err = ParticipantRepository::create(&store, &participant("alice", 1))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        // Names are case-sensitive
        ParticipantRepository::create(&store, &participant("Alice", 1))
            .await
            .unwrap();
        assert_eq!(ParticipantRepository::find_all(&store).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_touch_unknown_is_not_found() {
        let store = MemoryStore::new();
        let err = store.touch("ghost", at(0)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_touch_updates_last_status() {
        let store = MemoryStore::new();
        ParticipantRepository::create(&store, &participant("alice", 0))
            .await
            .unwrap();
        store.touch("alice", at(30)).await.unwrap();

        let all = ParticipantRepository::find_all(&store).await.unwrap();
        assert_eq!(all[0].last_status, at(30));
    }

    #[tokio::test]
    async fn test_find_idle_is_inclusive() {
        let store = MemoryStore::new();
        ParticipantRepository::create(&store, &participant("old", 0))
            .await
            .unwrap();
        ParticipantRepository::create(
            &store,
            &Participant::new("fresh".to_string(), at(0) + Duration::milliseconds(1)),
        )
        .await
        .unwrap();

        let idle = store.find_idle(at(0)).await.unwrap();
        assert_eq!(idle.len(), 1);
        assert_eq!(idle[0].name, "old");
    }

    #[tokio::test]
    async fn test_delete_many_counts_removed() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            ParticipantRepository::create(&store, &participant(name, 0))
                .await
                .unwrap();
        }

        let removed = store
            .delete_many(&["a".to_string(), "c".to_string(), "zz".to_string()])
            .await
            .unwrap();
        assert_eq!(removed, 2);
        assert!(store.exists("b").await.unwrap());
        assert!(!store.exists("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_messages_keep_insertion_order() {
        let store = MemoryStore::new();
        MessageRepository::create(&store, &Message::join("alice", at(0)))
            .await
            .unwrap();
        store
            .create_many(&[Message::leave("bob", at(1)), Message::leave("carol", at(1))])
            .await
            .unwrap();

        let log = MessageRepository::find_all(&store).await.unwrap();
        let senders: Vec<_> = log.iter().map(|m| m.from.as_str()).collect();
        assert_eq!(senders, vec!["alice", "bob", "carol"]);
        assert_eq!(store.message_count(), 3);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_operation() {
        let store = MemoryStore::new();
        store.set_unavailable(true);

        assert!(store.ping().await.is_err());
        assert!(store.exists("alice").await.is_err());
        assert!(MessageRepository::find_all(&store).await.is_err());

        store.set_unavailable(false);
        assert!(store.ping().await.is_ok());
    }
}
