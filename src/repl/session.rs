//! Per-session REPL state and command handlers
//!
//! Handlers write user-facing output to the supplied writer; diagnostics go
//! through `tracing`.

use std::io::Write;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::api::PokeApiClient;
use crate::cache::TtlCache;
use crate::config::{Config, CorruptEntryPolicy};
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};
use crate::pokedex::Pokedex;
use crate::repl::{clean_input, Command, Outcome};

/// Stats printed by `inspect`, in display order
const INSPECT_STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Pagination links of the last location-area page shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl PageCursor {
    fn follow(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}

/// A catch succeeds when the roll reaches the Pokemon's base experience.
pub fn catch_succeeds(roll: u32, base_experience: u32) -> bool {
    roll >= base_experience
}

/// Everything one interactive session needs
pub struct Session {
    client: PokeApiClient,
    cache: Arc<TtlCache>,
    pokedex: Pokedex,
    cursor: PageCursor,
    corrupt_entry_policy: CorruptEntryPolicy,
    catch_threshold: u32,
}

impl Session {
    /// Creates a session with default policy and catch threshold.
    pub fn new(client: PokeApiClient, cache: Arc<TtlCache>) -> Self {
        let defaults = Config::default();
        Self {
            client,
            cache,
            pokedex: Pokedex::new(),
            cursor: PageCursor::default(),
            corrupt_entry_policy: defaults.corrupt_entry_policy,
            catch_threshold: defaults.catch_threshold,
        }
    }

    /// Creates a session from configuration.
    pub fn from_config(config: &Config, cache: Arc<TtlCache>) -> Self {
        Self::new(PokeApiClient::new(&config.base_url), cache)
            .with_corrupt_entry_policy(config.corrupt_entry_policy)
            .with_catch_threshold(config.catch_threshold)
    }

    pub fn with_corrupt_entry_policy(mut self, policy: CorruptEntryPolicy) -> Self {
        self.corrupt_entry_policy = policy;
        self
    }

    pub fn with_catch_threshold(mut self, threshold: u32) -> Self {
        self.catch_threshold = threshold.max(1);
        self
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.cache
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Parses and runs one input line.
    ///
    /// Blank lines do nothing; unknown commands print a notice. Errors are
    /// returned for the caller to report, and the session stays usable.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome> {
        let words = clean_input(line);
        let Some(first) = words.first() else {
            return Ok(Outcome::Continue);
        };
        let arg = words.get(1).map(String::as_str);

        let Some(command) = Command::parse(first) else {
            writeln!(out, "Unknown command")?;
            return Ok(Outcome::Continue);
        };
        debug!(command = command.name(), arg, "dispatch");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Outcome::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => self.explore(arg, out).await?,
            Command::Catch => self.catch(arg, out).await?,
            Command::Inspect => self.inspect(arg, out).await?,
            Command::Pokedex => self.list_caught(out).await?,
        }
        Ok(Outcome::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let url = match (&self.cursor.next, &self.cursor.previous) {
            (Some(next), _) => next.clone(),
            (None, None) => self.client.location_areas_url(),
            (None, Some(_)) => {
                writeln!(out, "you're on the last page")?;
                return Ok(());
            }
        };
        self.show_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.cursor.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page: LocationAreaPage = self
            .client
            .get_cached(&self.cache, url, self.corrupt_entry_policy)
            .await?;

        // Only move the cursor once the page actually arrived
        self.cursor.follow(&page);
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&self, arg: Option<&str>, out: &mut W) -> Result<()> {
        let area_name = arg.ok_or(PokedexError::MissingArgument {
            command: "explore",
            argument: "location area name",
        })?;
        writeln!(out, "Exploring {}...", area_name)?;

        let url = self.client.location_area_url(area_name);
        let area: LocationAreaDetail = self
            .client
            .get_cached(&self.cache, &url, self.corrupt_entry_policy)
            .await?;

        writeln!(out, "Found Pokemon:")?;
        for name in area.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&self, arg: Option<&str>, out: &mut W) -> Result<()> {
        let name = arg.ok_or(PokedexError::MissingArgument {
            command: "catch",
            argument: "pokemon name",
        })?;
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let url = self.client.pokemon_url(name);
        let pokemon: Pokemon = self
            .client
            .get_cached(&self.cache, &url, self.corrupt_entry_policy)
            .await?;

        let base_experience = pokemon.base_experience.unwrap_or(0);
        let roll = rand::thread_rng().gen_range(0..self.catch_threshold);
        debug!(pokemon = %pokemon.name, roll, base_experience, "catch roll");

        if catch_succeeds(roll, base_experience) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            info!(pokemon = %pokemon.name, "caught");
            self.pokedex.add(pokemon).await;
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    async fn inspect<W: Write>(&self, arg: Option<&str>, out: &mut W) -> Result<()> {
        let name = arg.ok_or(PokedexError::MissingArgument {
            command: "inspect",
            argument: "pokemon name",
        })?;

        let Some(pokemon) = self.pokedex.get(name).await else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in INSPECT_STATS {
            writeln!(out, "  -{}: {}", stat, pokemon.stat(stat))?;
        }
        writeln!(out, "Types:")?;
        for type_name in pokemon.type_names() {
            writeln!(out, "  - {}", type_name)?;
        }
        Ok(())
    }

    async fn list_caught<W: Write>(&self, out: &mut W) -> Result<()> {
        let names = self.pokedex.names().await;
        if names.is_empty() {
            writeln!(out, "Your Pokedex is empty. Go catch something!")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in names {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
