//! Cache Module
//!
//! Provides an in-memory byte cache with age-based expiry enforced by a
//! periodic background sweep.

mod entry;
mod store;
mod ttl;


pub(crate) use entry::CacheEntry;
pub(crate) use store::CacheStore;
pub use ttl::TtlCache;

// == Public Constants ==
/// Default sweep interval and maximum entry age, in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Largest interval accepted from the command line or environment (one year)
pub const MAX_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;
