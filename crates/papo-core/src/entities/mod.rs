//! Domain entities - core business objects

mod message;
mod participant;

pub use message::{format_clock_time, Message, MessageType, BROADCAST_RECIPIENT, JOIN_TEXT, LEAVE_TEXT};
pub use participant::{is_valid_participant_name, Participant};
