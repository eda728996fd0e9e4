//! Command-line interface parsing for the Pokedex
//!
//! Flags given on the command line override the environment-derived `Config`.

use std::time::Duration;

use clap::Parser;

use crate::cache::MAX_INTERVAL_SECS;
use crate::config::{normalize_base_url, Config, CorruptEntryPolicy};

/// Pokedex - explore the PokeAPI catalog from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive PokeAPI explorer with a response cache")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached response lives before the sweep may remove it
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL_SECS))]
    pub cache_interval: Option<u64>,

    /// PokeAPI root URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Fail instead of re-fetching when a cached response cannot be decoded
    #[arg(long)]
    pub strict_cache: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(secs) = self.cache_interval {
            config.cache_interval = Duration::from_secs(secs);
        }
        if let Some(url) = &self.base_url {
            config.base_url = normalize_base_url(url);
        }
        if self.strict_cache {
            config.corrupt_entry_policy = CorruptEntryPolicy::Fail;
        }
        config
    }
}
