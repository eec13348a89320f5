//! Participant entity - a registered chat user tracked by name

use chrono::{DateTime, Utc};

/// Participant entity
///
/// `name` is the identity: unique across all active participants and compared
/// case-sensitively. `last_status` is refreshed by every heartbeat and drives
/// the inactivity sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub last_status: DateTime<Utc>,
}

impl Participant {
    /// Create a new Participant seen at `now`
    pub fn new(name: String, now: DateTime<Utc>) -> Self {
        Self {
            name,
            last_status: now,
        }
    }

    /// Record a heartbeat
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_status = now;
    }

    /// Check whether the participant should be evicted for the given cutoff
    ///
    /// A participant whose last heartbeat is exactly at the cutoff is idle.
    #[inline]
    pub fn is_idle_since(&self, threshold: DateTime<Utc>) -> bool {
        self.last_status <= threshold
    }

    /// `last_status` as milliseconds since the Unix epoch (wire format)
    #[inline]
    pub fn last_status_millis(&self) -> i64 {
        self.last_status.timestamp_millis()
    }
}

/// Names must be non-empty and ASCII alphanumeric
pub fn is_valid_participant_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}
