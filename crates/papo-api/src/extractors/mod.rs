//! Axum extractors for request handling
//!
//! Custom extractors for the requesting user, the message limit, and
//! validated JSON bodies.

mod limit;
mod user;
mod validated;

pub use limit::{LimitParams, MessageLimit};
pub use user::{RequestingUser, USER_HEADER};
pub use validated::ValidatedJson;
