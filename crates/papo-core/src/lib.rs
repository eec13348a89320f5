//! # papo-core
//!
//! Domain layer containing entities, the message visibility rule, and the
//! store and clock traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod visibility;

// Re-export commonly used types at crate root
pub use entities::{
    is_valid_participant_name, Message, MessageType, Participant, BROADCAST_RECIPIENT,
    JOIN_TEXT, LEAVE_TEXT,
};
pub use error::DomainError;
pub use traits::{
    Clock, ManualClock, MessageRepository, ParticipantRepository, RepoResult, StoreHealth,
    SystemClock,
};
pub use visibility::{is_visible_to, visible_messages};
