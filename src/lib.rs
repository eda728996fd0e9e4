//! Pokedex - an interactive PokeAPI explorer
//!
//! Responses are kept in a time-bounded cache whose entries are removed by a
//! periodic background sweep.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
mod tasks;

pub use cache::TtlCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
