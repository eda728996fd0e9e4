//! Cache Store Module
//!
//! The unsynchronized map behind the TTL cache. Locking lives one level up in
//! `TtlCache`; everything here runs under whichever guard the caller holds.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage of byte payloads with creation timestamps.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a payload under `key`, stamped with the current instant.
    ///
    /// If the key already exists the whole entry is replaced, resetting its age.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.add_at(key, value, Instant::now());
    }

    /// Stores a payload under `key` with an explicit creation instant.
    pub fn add_at(&mut self, key: String, value: Vec<u8>, created_at: Instant) {
        self.entries
            .insert(key, CacheEntry::new_at(value, created_at));
    }

    // == Get ==
    /// Returns the entry stored under `key`, regardless of its age.
    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Evict Expired ==
    /// Removes every entry whose age at `now` strictly exceeds `max_age`.
    ///
    /// Returns the number of entries removed.
    pub fn evict_expired(&mut self, max_age: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired(max_age, now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
