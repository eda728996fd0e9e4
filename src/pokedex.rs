//! Caught Pokemon registry
//!
//! A guarded map with no expiry; entries live for the whole session.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::models::Pokemon;

/// Pokemon the user has caught, keyed by name
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: RwLock<BTreeMap<String, Pokemon>>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught Pokemon, replacing an earlier catch of the same name.
    pub async fn add(&self, pokemon: Pokemon) {
        self.caught
            .write()
            .await
            .insert(pokemon.name.clone(), pokemon);
    }

    pub async fn get(&self, name: &str) -> Option<Pokemon> {
        self.caught.read().await.get(name).cloned()
    }

    /// Names of every caught Pokemon in alphabetical order.
    pub async fn names(&self) -> Vec<String> {
        self.caught.read().await.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.caught.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.caught.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience: Some(64),
            height: 7,
            weight: 69,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let pokedex = Pokedex::new();
        pokedex.add(pokemon("bulbasaur")).await;

        assert_eq!(pokedex.get("bulbasaur").await.unwrap().weight, 69);
        assert!(pokedex.get("ivysaur").await.is_none());
    }

    #[tokio::test]
    async fn test_names_sorted() {
        let pokedex = Pokedex::new();
        pokedex.add(pokemon("squirtle")).await;
        pokedex.add(pokemon("bulbasaur")).await;
        pokedex.add(pokemon("charmander")).await;

        assert_eq!(pokedex.names().await, ["bulbasaur", "charmander", "squirtle"]);
    }

    #[tokio::test]
    async fn test_recatch_replaces() {
        let pokedex = Pokedex::new();
        pokedex.add(pokemon("pidgey")).await;
        let mut heavier = pokemon("pidgey");
        heavier.weight = 100;
        pokedex.add(heavier).await;

        assert_eq!(pokedex.len().await, 1);
        assert_eq!(pokedex.get("pidgey").await.unwrap().weight, 100);
    }

    #[tokio::test]
    async fn test_empty() {
        assert!(Pokedex::new().is_empty().await);
    }
}
