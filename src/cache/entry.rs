//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with their creation time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload together with the instant it was inserted.
///
/// Both fields are fixed at insertion; an overwrite replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Insertion instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a cache entry with an explicit creation instant.
    pub fn new_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long ago the entry was created, relative to `now`.
    ///
    /// Saturates to zero if `now` precedes the creation instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `max_age` at `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `max_age` is still
    /// live. Only a strictly greater age counts as expired.
    pub fn is_expired(&self, max_age: Duration, now: Instant) -> bool {
        self.age(now) > max_age
    }
}
