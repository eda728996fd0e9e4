//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex library.
///
/// The cache itself never fails once constructed; every other variant belongs
/// to the layers that talk to PokeAPI or the console.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache interval must be greater than zero and small enough to schedule
    #[error("Invalid cache interval: must be greater than zero and fit the clock's range")]
    InvalidInterval,

    /// HTTP request failed or returned a non-success status
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream body could not be decoded
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Cached payload could not be decoded
    #[error("Cached data for {key} may be corrupted: {source}")]
    CorruptedCache {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Response could not be re-serialized for the cache
    #[error("Failed to encode response for the cache: {0}")]
    Encode(#[source] serde_json::Error),

    /// Command invoked without its required argument
    #[error("{command} requires a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument {
            command: "explore",
            argument: "location area name",
        };
        assert_eq!(err.to_string(), "explore requires a location area name");
    }

    #[test]
    fn test_corrupted_cache_message_names_key() {
        let source = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err = PokedexError::CorruptedCache {
            key: "https://pokeapi.co/api/v2/pokemon/pikachu".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.contains("may be corrupted"));
        assert!(message.contains("pokemon/pikachu"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: PokedexError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, PokedexError::Io(_)));
    }
}
