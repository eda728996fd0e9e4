//! Fetch-or-populate over the TTL cache
//!
//! Responses are stored as JSON bytes keyed by their URL. The cache never
//! sees the structured type; decoding happens here on the way out.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::TtlCache;
use crate::config::CorruptEntryPolicy;
use crate::error::{PokedexError, Result};

/// Returns the cached value for `key`, or runs `fetch` and caches its result.
///
/// On a hit the cached bytes are decoded into `T`. If they don't decode,
/// `policy` decides between a forced miss (`Refetch`) and an error (`Fail`).
/// On a miss, a successful fetch is re-serialized and stored under `key`; a
/// failed fetch leaves the cache untouched.
pub async fn get_or_fetch<T, F, Fut>(
    cache: &TtlCache,
    key: &str,
    policy: CorruptEntryPolicy,
    fetch: F,
) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if let Some(bytes) = cache.get(key).await {
        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                debug!(key, "served from cache");
                return Ok(value);
            }
            Err(source) if policy == CorruptEntryPolicy::Fail => {
                return Err(PokedexError::CorruptedCache {
                    key: key.to_string(),
                    source,
                });
            }
            Err(source) => {
                warn!(key, error = %source, "discarding undecodable cached response");
            }
        }
    }

    let value = fetch().await?;
    let bytes = serde_json::to_vec(&value).map_err(PokedexError::Encode)?;
    cache.add(key, bytes).await;

    Ok(value)
}
