//! Pokémon data-access port.

use super::error::PokemonPortResult;
use crate::domain::{PokemonInfo, PokemonPage};
use async_trait::async_trait;

/// Port trait for fetching Pokémon data.
///
/// This trait defines the interface that core services use to obtain
/// Pokémon data. The PokeAPI implementation lives in `pokedex-api`.
///
/// # Design
///
/// - Uses core-owned domain types, not API wire types
/// - Returns `PokemonPortError` for all failures
/// - Any caching, retry or name normalization policy belongs to the implementation
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Fetch detailed information for the Pokémon called `name`.
    async fn get_pokemon_info(&self, name: &str) -> PokemonPortResult<PokemonInfo>;

    /// Fetch `limit` list entries starting at `offset`.
    async fn get_pokemon_list(&self, limit: u32, offset: u32) -> PokemonPortResult<PokemonPage>;
}
