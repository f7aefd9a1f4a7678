//! Periodic refresh driver for one record cache.
//!
//! Replaces the ambient module-level interval timers of the original
//! console with an owned start/stop lifecycle: whoever constructs the
//! cache constructs and holds the scheduler.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::gateway::CollectionGateway;
use crate::model::Record;
use crate::sync::cache::RecordCache;

/// Drives `refresh()` on a fixed period, one instance per collection.
///
/// The loop is strictly sequential: the next tick is not serviced until
/// the previous fetch has settled, and ticks that fall due during a slow
/// fetch are skipped, not queued. One scheduler therefore never has two
/// fetches in flight, and snapshots are installed in the order the
/// fetches were issued.
pub struct PollScheduler {
    stop: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PollScheduler {
    /// Spawn the polling task. The first refresh is issued immediately,
    /// then one per `period`.
    ///
    /// Fetch failures are logged and polling continues with the last
    /// known snapshot in place.
    pub fn start<R, G>(cache: Arc<RecordCache<R, G>>, period: Duration) -> Self
    where
        R: Record,
        G: CollectionGateway<R>,
    {
        let (stop, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // Skip, don't queue: a tick that fell due mid-fetch is dropped.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = stop_rx.changed() => break,
                }

                let fetched = cache.list_remote().await;
                if *stop_rx.borrow() {
                    // Stopped while the call was in flight: drop the result.
                    break;
                }
                match fetched {
                    Ok(records) => cache.install_snapshot(records),
                    Err(error) => {
                        tracing::warn!(
                            collection = cache.collection(),
                            error = %error,
                            "refresh failed; keeping last known snapshot"
                        );
                    }
                }
            }
        });

        Self { stop, handle }
    }

    /// Cancel future ticks. Idempotent. An in-flight fetch is left to
    /// complete; its result is discarded at resumption.
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    /// Whether the polling task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}
