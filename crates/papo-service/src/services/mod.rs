//! Business logic services
//!
//! Services borrow a [`ServiceContext`] for the duration of a call and hold
//! no state of their own.

pub mod context;
pub mod error;
pub mod message;
pub mod presence;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use presence::{PresenceService, SweepReport};
