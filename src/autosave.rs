//! Periodic background auto-save
//!
//! Runs as a spawned tokio task that snapshots the shared inventory at a fixed
//! interval. Unlike a detached daemon thread, the task carries an explicit
//! stop signal so shutdown can halt it deterministically before the final
//! synchronous save.

use crate::persist;
use crate::store::SharedInventory;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Handle to a running auto-save task.
pub struct AutosaveTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl AutosaveTask {
    /// Spawn the auto-save loop, saving to `path` every `period`.
    pub fn spawn(inventory: SharedInventory, path: PathBuf, period: Duration) -> Self {
        let (shutdown, rx) = watch::channel(false);
        let handle = tokio::spawn(run(inventory, path, period, rx));
        AutosaveTask { shutdown, handle }
    }

    /// Signal the task to stop and wait for it to finish.
    ///
    /// After this returns no further background saves can race with the
    /// caller's own save-on-exit.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.handle.await {
            log::error!("Auto-save task panicked: {}", e);
        }
    }
}

async fn run(
    inventory: SharedInventory,
    path: PathBuf,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(period);
    // The first tick completes immediately; consume it so the first real save
    // happens one full period after startup.
    ticker.tick().await;

    log::info!("Auto-save running every {:?}", period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                save_snapshot(&inventory, &path);
            }
            _ = shutdown.changed() => {
                log::info!("Auto-save stopping");
                break;
            }
        }
    }
}

/// Take a consistent copy of the store under the lock, then write it out with
/// the lock released. A failed save is logged and the loop carries on.
fn save_snapshot(inventory: &SharedInventory, path: &PathBuf) {
    let copy = inventory.lock().unwrap().clone();
    if let Err(e) = persist::save(&copy, path) {
        log::error!("Auto-save failed: {}", e);
    }
}
