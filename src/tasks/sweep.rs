//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The first sweep fires at `first_tick`, normally one full `interval` after
/// the cache was created, then every `interval` after that. Each sweep takes the write lock and drops entries
/// older than `interval`. Ticks missed because the runtime was busy are
/// skipped rather than replayed.
///
/// The task stops as soon as `shutdown` resolves, whether a value is sent or
/// the sender is dropped.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `first_tick` - Deadline of the first sweep
/// * `interval` - Sweep period and maximum entry age
/// * `shutdown` - Stop signal
pub fn spawn_sweep_task(
    store: Arc<RwLock<CacheStore>>,
    first_tick: Instant,
    interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        let mut ticker = time::interval_at(first_tick, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    debug!("TTL sweep task received stop signal");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut store_guard = store.write().await;
                        store_guard.evict_expired(interval, Instant::now())
                    };

                    if removed > 0 {
                        info!("TTL sweep: removed {} expired entries", removed);
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                }
            }
        }
    })
}
