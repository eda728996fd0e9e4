//! Pokedex - an interactive PokeAPI explorer
//!
//! Reads commands from stdin and prints results to stdout. Logs go to stderr.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::repl::{Outcome, PROMPT};
use pokedex::{Config, Session, TtlCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables and CLI flags
/// 3. Create the response cache, which starts its sweep task
/// 4. Run the read-eval loop until `exit`, EOF or Ctrl+C
/// 5. Stop the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to "warn" so log lines stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = cli.apply(Config::from_env());
    info!(
        "Configuration loaded: cache_interval={:?}, base_url={}, corrupt_entry_policy={:?}",
        config.cache_interval, config.base_url, config.corrupt_entry_policy
    );

    let cache = Arc::new(TtlCache::new(config.cache_interval).context("failed to create cache")?);
    let mut session = Session::from_config(&config, cache.clone());

    let result = run_repl(&mut session).await;

    cache.shutdown().await;
    info!("Pokedex closed");
    result
}

/// Prompts, reads a line, runs it; repeats until the session ends.
async fn run_repl(session: &mut Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read input")?,
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, closing");
                writeln!(stdout)?;
                None
            }
        };
        let Some(line) = line else {
            return Ok(());
        };

        match session.execute(&line, &mut stdout).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => return Ok(()),
            Err(err) => {
                warn!(error = %err, "command failed");
                writeln!(stdout, "Error: {}", err)?;
            }
        }
    }
}
