//! API Module
//!
//! PokeAPI access for the explorer.
//!
//! # Endpoints
//! - `GET /location-area` - Paginated listing of location areas
//! - `GET /location-area/{name}` - Encounters in one area
//! - `GET /pokemon/{name}` - A single Pokemon

pub mod client;
pub mod fetch;

pub use client::PokeApiClient;
pub use fetch::get_or_fetch;
