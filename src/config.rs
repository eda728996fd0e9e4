//! Configuration Module
//!
//! Handles loading and managing explorer configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_INTERVAL_SECS, MAX_INTERVAL_SECS};

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default upper bound of a catch roll
pub const DEFAULT_CATCH_THRESHOLD: u32 = 400;

/// What to do when a cached payload no longer decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptEntryPolicy {
    /// Treat the entry as a miss, fetch again and overwrite it
    #[default]
    Refetch,
    /// Surface `PokedexError::CorruptedCache` to the caller
    Fail,
}

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache sweep period and maximum entry age
    pub cache_interval: Duration,
    /// PokeAPI root URL, without trailing slash
    pub base_url: String,
    /// Handling of undecodable cached payloads
    pub corrupt_entry_policy: CorruptEntryPolicy,
    /// Catch rolls draw from `0..catch_threshold`
    pub catch_threshold: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache interval in seconds, 1 to one year (default: 5)
    /// - `POKEDEX_BASE_URL` - PokeAPI root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_STRICT_CACHE` - `1`/`true` to fail on corrupted cache entries
    /// - `POKEDEX_CATCH_THRESHOLD` - Catch roll upper bound (default: 400)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL")
                .ok()
                .and_then(|v| parse_interval_secs(&v))
                .unwrap_or(defaults.cache_interval),
            base_url: env::var("POKEDEX_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.base_url),
            corrupt_entry_policy: match env::var("POKEDEX_STRICT_CACHE").as_deref() {
                Ok("1") | Ok("true") => CorruptEntryPolicy::Fail,
                _ => defaults.corrupt_entry_policy,
            },
            catch_threshold: env::var("POKEDEX_CATCH_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|threshold| *threshold > 0)
                .unwrap_or(defaults.catch_threshold),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
            corrupt_entry_policy: CorruptEntryPolicy::Refetch,
            catch_threshold: DEFAULT_CATCH_THRESHOLD,
        }
    }
}

/// Parses a whole number of seconds in `1..=MAX_INTERVAL_SECS`.
fn parse_interval_secs(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| (1..=MAX_INTERVAL_SECS).contains(secs))
        .map(Duration::from_secs)
}

/// Strips trailing slashes so endpoint paths can be appended with `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_interval, Duration::from_secs(5));
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.corrupt_entry_policy, CorruptEntryPolicy::Refetch);
        assert_eq!(config.catch_threshold, 400);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEDEX_CACHE_INTERVAL");
        env::remove_var("POKEDEX_BASE_URL");
        env::remove_var("POKEDEX_STRICT_CACHE");
        env::remove_var("POKEDEX_CATCH_THRESHOLD");

        let config = Config::from_env();
        assert_eq!(config.cache_interval, Duration::from_secs(5));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.corrupt_entry_policy, CorruptEntryPolicy::Refetch);
        assert_eq!(config.catch_threshold, 400);
    }

    #[test]
    fn test_parse_interval_secs() {
        assert_eq!(parse_interval_secs("30"), Some(Duration::from_secs(30)));
        assert_eq!(parse_interval_secs(" 1 "), Some(Duration::from_secs(1)));
        assert_eq!(
            parse_interval_secs(&MAX_INTERVAL_SECS.to_string()),
            Some(Duration::from_secs(MAX_INTERVAL_SECS))
        );

        assert_eq!(parse_interval_secs("0"), None);
        assert_eq!(parse_interval_secs(&(MAX_INTERVAL_SECS + 1).to_string()), None);
        assert_eq!(parse_interval_secs(&u64::MAX.to_string()), None);
        assert_eq!(parse_interval_secs("soon"), None);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:8080/"), "http://localhost:8080");
        assert_eq!(normalize_base_url(" https://pokeapi.co/api/v2// "), "https://pokeapi.co/api/v2");
        assert_eq!(normalize_base_url(DEFAULT_BASE_URL), DEFAULT_BASE_URL);
    }
}
