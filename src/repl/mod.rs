//! REPL Module
//!
//! Turns input lines into commands and runs them against a `Session`.

mod commands;
mod session;

pub use commands::{Command, Outcome};
pub use session::{catch_succeeds, PageCursor, Session};

/// Prompt printed before every input line
pub const PROMPT: &str = "Pokedex > ";

/// Splits `text` on whitespace and lowercases every word.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
