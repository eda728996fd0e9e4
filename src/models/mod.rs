//! PokeAPI response models
//!
//! Serde structs mirroring the subset of PokeAPI JSON the explorer reads.
//! Every model round-trips through JSON because decoded responses are
//! re-serialized into the cache.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, StatSlot, TypeSlot};
