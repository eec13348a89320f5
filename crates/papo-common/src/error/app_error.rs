//! Application error types
//!
//! `AppError` covers process-level failures: bad configuration, an unreachable
//! store at startup, or the listener going away. Request-level failures are
//! mapped to HTTP statuses through [`domain_status`].

use papo_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP status for a domain error
#[must_use]
pub fn domain_status(e: &DomainError) -> u16 {
    if e.is_not_found() {
        404
    } else if e.is_validation() {
        422
    } else if e.is_conflict() {
        409
    } else {
        500
    }
}
