//! Pokémon detail and list endpoints.

use crate::error::{PokeApiError, PokeApiResult};
use crate::http::HttpBackend;
use crate::models::{ApiPokemon, ApiPokemonList};
use crate::url::{build_pokemon_list_url, build_pokemon_url, normalize_name};

use super::PokeApiClient;

impl<B: HttpBackend> PokeApiClient<B> {
    /// Fetch a single Pokémon by name.
    ///
    /// The name is normalized before the lookup. Names that can't address a
    /// single resource are reported as not found without a request.
    pub(crate) async fn fetch_pokemon(&self, name: &str) -> PokeApiResult<ApiPokemon> {
        let normalized = normalize_name(name);
        if matches!(normalized.as_str(), "" | "." | "..") {
            return Err(PokeApiError::PokemonNotFound {
                name: name.to_string(),
            });
        }

        let url = build_pokemon_url(&self.config, &normalized)?;
        match self.backend.get_json(&url).await {
            Err(PokeApiError::ApiRequestFailed { status: 404, .. }) => {
                Err(PokeApiError::PokemonNotFound {
                    name: name.to_string(),
                })
            }
            other => other,
        }
    }

    /// Fetch one page of the Pokémon list.
    pub(crate) async fn fetch_pokemon_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> PokeApiResult<ApiPokemonList> {
        let url = build_pokemon_list_url(&self.config, limit, offset)?;
        self.backend.get_json(&url).await
    }
}
