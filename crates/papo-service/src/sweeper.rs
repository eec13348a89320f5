//! Background inactivity sweep
//!
//! A single timer task fires every `period`; each tick runs one sweep on its
//! own task so a slow store never delays the schedule. Failures are logged
//! and the next tick starts over.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::services::{PresenceService, ServiceContext};

/// Start the sweeper
///
/// The first sweep runs one full `period` after the call. Abort the returned
/// handle to stop scheduling; sweeps already in flight run to completion.
pub fn spawn_sweeper(ctx: Arc<ServiceContext>, period: Duration) -> JoinHandle<()> {
    info!(period_secs = period.as_secs_f64(), "Starting inactivity sweeper");

    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let ctx = Arc::clone(&ctx);
            tokio::spawn(async move {
                match PresenceService::new(&ctx).sweep().await {
                    Ok(report) if report.is_empty() => debug!("Sweep found no idle participants"),
                    Ok(report) => debug!(evicted = ?report.evicted, "Sweep finished"),
                    Err(e) => error!(error = %e, "Inactivity sweep failed"),
                }
            });
        }
    })
}
