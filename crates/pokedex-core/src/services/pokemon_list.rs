//! Pokémon list service - paginated browsing of the Pokédex.

use crate::domain::PokemonPage;
use crate::ports::{PokemonPortError, PokemonPortResult, PokemonRepository};
use std::sync::Arc;

/// Number of entries fetched per page.
pub const PAGE_SIZE: u32 = 20;

/// Service backing the Pokédex list view.
#[derive(Clone)]
pub struct PokemonListService {
    repository: Arc<dyn PokemonRepository>,
}

impl PokemonListService {
    /// Create a new list service over the given repository.
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        Self { repository }
    }

    /// Load the zero-based `page` of the Pokédex.
    pub async fn load_page(&self, page: u32) -> PokemonPortResult<PokemonPage> {
        let offset = page
            .checked_mul(PAGE_SIZE)
            .ok_or_else(|| PokemonPortError::Configuration {
                message: format!("page {page} is out of range"),
            })?;

        tracing::debug!(page, offset, limit = PAGE_SIZE, "loading pokemon page");
        self.repository.get_pokemon_list(PAGE_SIZE, offset).await
    }
}
