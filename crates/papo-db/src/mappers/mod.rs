//! Entity to model mappers
//!
//! Conversions between domain entities (papo-core) and database rows.
//! - `From`/`TryFrom<Model> for Entity`: convert rows to domain objects
//! - `MessageColumns`: column-wise arrays for batch inserts

mod message;
mod participant;

pub use message::MessageColumns;
