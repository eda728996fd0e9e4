//! TTL Cache Handle
//!
//! Ties the shared store to its sweep task so the task lives exactly as long
//! as the cache that started it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_sweep_task;

/// Owned sweep task plus the signal that stops it.
#[derive(Debug)]
struct Sweeper {
    handle: JoinHandle<()>,
    stop: oneshot::Sender<()>,
}

// == TTL Cache ==
/// Concurrent byte cache whose entries are swept once they outlive `interval`.
///
/// Expiry is soft: `get` never checks age, so an entry older than `interval`
/// stays readable until the next sweep tick removes it. Share the cache
/// between callers with `Arc<TtlCache>`.
#[derive(Debug)]
pub struct TtlCache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    sweeper: Mutex<Option<Sweeper>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates a cache and starts its background sweep.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns `PokedexError::InvalidInterval` if `interval` is zero or so
    /// large that the first sweep deadline cannot be represented.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval);
        }
        let first_tick = Instant::now()
            .checked_add(interval)
            .ok_or(PokedexError::InvalidInterval)?;

        let store = Arc::new(RwLock::new(CacheStore::new()));
        let (stop, stop_rx) = oneshot::channel();
        let handle = spawn_sweep_task(store.clone(), first_tick, interval, stop_rx);

        Ok(Self {
            store,
            interval,
            sweeper: Mutex::new(Some(Sweeper { handle, stop })),
        })
    }

    // == Add ==
    /// Inserts or replaces the payload stored under `key`.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        debug!(%key, "cache add");
        self.store.write().await.add(key, value.into());
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if present.
    ///
    /// The entry's age is not checked here; only the sweep removes entries.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        let value = store.get(key).map(|entry| entry.value.clone());
        debug!(key, hit = value.is_some(), "cache get");
        value
    }

    // == Shutdown ==
    /// Stops the sweep task and waits for it to exit.
    ///
    /// Calling this more than once is harmless, and concurrent callers all
    /// return only after the task has exited. The cache stays usable
    /// afterwards, but entries no longer expire.
    pub async fn shutdown(&self) {
        // Held across the join so a concurrent caller waits for it too
        let mut sweeper = self.sweeper.lock().await;
        let Some(Sweeper { handle, stop }) = sweeper.take() else {
            return;
        };

        // The task may already be gone, in which case the receiver is closed
        let _ = stop.send(());
        if let Err(err) = handle.await {
            warn!("TTL sweep task ended abnormally: {}", err);
        }
        debug!("TTL sweep task stopped");
    }

    /// Returns true while the sweep task is running.
    pub async fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .await
            .as_ref()
            .is_some_and(|sweeper| !sweeper.handle.is_finished())
    }

    /// Sweep period and maximum entry age.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of entries currently held, including not-yet-swept stale ones.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        if let Some(sweeper) = self.sweeper.get_mut().take() {
            sweeper.handle.abort();
        }
    }
}
