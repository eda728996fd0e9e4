//! PokeAPI HTTP client
//!
//! Builds resource URLs and performs GET + JSON decode. The URL doubles as
//! the cache key, so every lookup of the same resource goes through the same
//! string.

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::api::get_or_fetch;
use crate::cache::TtlCache;
use crate::config::{normalize_base_url, CorruptEntryPolicy, DEFAULT_BASE_URL};
use crate::error::{PokedexError, Result};

const ENDPOINT_LOCATION_AREA: &str = "location-area";
const ENDPOINT_POKEMON: &str = "pokemon";

/// Client for the PokeAPI REST endpoints
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PokeApiClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// First page of the location area listing
    pub fn location_areas_url(&self) -> String {
        format!("{}/{}", self.base_url, ENDPOINT_LOCATION_AREA)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/{}/{}", self.base_url, ENDPOINT_LOCATION_AREA, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/{}/{}", self.base_url, ENDPOINT_POKEMON, name)
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// # Errors
    /// * `PokedexError::Request` - transport failure or non-2xx status
    /// * `PokedexError::Decode` - body is not the expected JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let request_error = |source: reqwest::Error| PokedexError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(request_error)?;
        let body = response.bytes().await.map_err(request_error)?;

        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Cache-aside GET: serve `url` from `cache` when possible, otherwise
    /// fetch it and populate the cache.
    pub async fn get_cached<T>(
        &self,
        cache: &TtlCache,
        url: &str,
        policy: CorruptEntryPolicy,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        get_or_fetch(cache, url, policy, || self.get_json(url)).await
    }
}
