//! # papo-service
//!
//! Application layer: request/response DTOs, the service context, the
//! presence and message services, and the background inactivity sweeper.

pub mod dto;
pub mod services;
pub mod sweeper;

pub use services::{
    MessageService, PresenceService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SweepReport,
};
pub use sweeper::spawn_sweeper;
