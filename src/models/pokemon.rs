//! Pokemon model
//!
//! `GET /pokemon/{name}`, reduced to what `catch` and `inspect` need.

use serde::{Deserialize, Serialize};

use super::NamedResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// `null` for a handful of forms; treated as zero when rolling a catch
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Base value of the named stat, or 0 if the Pokemon doesn't list it.
    pub fn stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|slot| slot.stat.name == name)
            .map(|slot| slot.base_stat)
            .unwrap_or(0)
    }

    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.into_iter().map(|slot| slot.kind.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIDGEY: &str = r#"{
        "name": "pidgey",
        "base_experience": 50,
        "height": 3,
        "weight": 18,
        "stats": [
            {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 45, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}},
            {"base_stat": 56, "effort": 1, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
        ],
        "types": [
            {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}},
            {"slot": 1, "type": {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"}}
        ]
    }"#;

    #[test]
    fn test_pokemon_deserialize() {
        let pokemon: Pokemon = serde_json::from_str(PIDGEY).unwrap();

        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience, Some(50));
        assert_eq!(pokemon.height, 3);
        assert_eq!(pokemon.weight, 18);
    }

    #[test]
    fn test_stat_lookup() {
        let pokemon: Pokemon = serde_json::from_str(PIDGEY).unwrap();

        assert_eq!(pokemon.stat("hp"), 40);
        assert_eq!(pokemon.stat("speed"), 56);
        assert_eq!(pokemon.stat("special-defense"), 0);
    }

    #[test]
    fn test_type_names_follow_slot_order() {
        let pokemon: Pokemon = serde_json::from_str(PIDGEY).unwrap();
        assert_eq!(pokemon.type_names(), ["normal", "flying"]);
    }

    #[test]
    fn test_null_base_experience() {
        let pokemon: Pokemon =
            serde_json::from_str(r#"{"name": "missingno", "base_experience": null}"#).unwrap();
        assert_eq!(pokemon.base_experience, None);
        assert!(pokemon.stats.is_empty());
    }

    #[test]
    fn test_reserialized_pokemon_decodes_identically() {
        let pokemon: Pokemon = serde_json::from_str(PIDGEY).unwrap();
        let bytes = serde_json::to_vec(&pokemon).unwrap();
        let decoded: Pokemon = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, pokemon);
    }
}
