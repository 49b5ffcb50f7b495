//! Port trait implementation for `PokeApiClient`.
//!
//! This module implements the core-owned `PokemonRepository` trait for
//! `PokeApiClient`, handling the conversion between internal PokeAPI types
//! and core domain types.

use async_trait::async_trait;
use pokedex_core::{PokemonInfo, PokemonPage, PokemonPortError, PokemonPortResult, PokemonRepository};

use crate::client::PokeApiClient;
use crate::error::PokeApiError;
use crate::http::HttpBackend;
use crate::parsing::{to_pokemon_info, to_pokemon_page};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `PokeApiError` to core `PokemonPortError`.
pub(crate) fn map_error(err: PokeApiError) -> PokemonPortError {
    match err {
        PokeApiError::ApiRequestFailed { status, url } => match status {
            429 => PokemonPortError::RateLimited,
            _ => PokemonPortError::Network {
                message: format!("API request failed with status {status}: {url}"),
            },
        },
        PokeApiError::PokemonNotFound { name } => PokemonPortError::NotFound { name },
        PokeApiError::InvalidResponse { message } => PokemonPortError::InvalidResponse { message },
        PokeApiError::InvalidBaseUrl { url, reason } => PokemonPortError::Configuration {
            message: format!("invalid base URL '{url}': {reason}"),
        },
        PokeApiError::Network(e) if e.is_builder() => PokemonPortError::Configuration {
            message: e.to_string(),
        },
        PokeApiError::Network(e) => PokemonPortError::Network {
            message: e.to_string(),
        },
        PokeApiError::InvalidUrl(e) => PokemonPortError::Configuration {
            message: e.to_string(),
        },
        PokeApiError::JsonParse(e) => PokemonPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> PokemonRepository for PokeApiClient<B> {
    async fn get_pokemon_info(&self, name: &str) -> PokemonPortResult<PokemonInfo> {
        let pokemon = self.fetch_pokemon(name).await.map_err(map_error)?;
        Ok(to_pokemon_info(pokemon))
    }

    async fn get_pokemon_list(&self, limit: u32, offset: u32) -> PokemonPortResult<PokemonPage> {
        let list = self
            .fetch_pokemon_page(limit, offset)
            .await
            .map_err(map_error)?;
        to_pokemon_page(list).map_err(map_error)
    }
}
