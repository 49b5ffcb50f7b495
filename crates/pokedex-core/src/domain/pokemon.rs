//! Pokémon detail types.

use serde::{Deserialize, Serialize};

/// Detailed information about a single Pokémon.
///
/// Measurements keep the units the upstream data uses: `height` is in
/// decimetres and `weight` in hectograms. Use [`PokemonInfo::height_m`] and
/// [`PokemonInfo::weight_kg`] for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInfo {
    /// National Pokédex number.
    pub id: u32,
    /// Lowercase species name (e.g. `pikachu`).
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Experience gained for defeating this Pokémon, when known.
    pub base_experience: Option<u32>,
    /// Types ordered by slot.
    pub types: Vec<PokemonType>,
    /// Base stats.
    pub stats: Vec<PokemonStat>,
    /// Front sprite URL, when available.
    pub sprite_url: Option<String>,
}

impl PokemonInfo {
    /// Height in metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Look up a base stat by its name (e.g. `special-attack`).
    pub fn stat(&self, name: &str) -> Option<&PokemonStat> {
        self.stats.iter().find(|s| s.name == name)
    }

    /// The type in the lowest slot.
    pub fn primary_type(&self) -> Option<&PokemonType> {
        self.types.iter().min_by_key(|t| t.slot)
    }

    /// Sum of all base stats.
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }
}

/// A type assigned to a Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    /// Slot the type occupies (1 = primary).
    pub slot: u8,
    /// Type name (e.g. `electric`).
    pub name: String,
}

/// A single base stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    /// Stat name as used upstream (e.g. `special-defense`).
    pub name: String,
    /// Base value.
    pub base_stat: u32,
    /// Effort value yield.
    pub effort: u32,
}

impl PokemonStat {
    /// Short display label for well-known stats, falling back to the raw name.
    pub fn abbreviation(&self) -> &str {
        match self.name.as_str() {
            "hp" => "HP",
            "attack" => "Atk",
            "defense" => "Def",
            "special-attack" => "SpAtk",
            "special-defense" => "SpDef",
            "speed" => "Spd",
            other => other,
        }
    }
}
