//! PokeAPI client for fetching Pokémon details and the Pokédex list.

mod pokemon;

use crate::config::PokeApiClientConfig;
use crate::error::PokeApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use crate::port::map_error;
use crate::url::parse_base_url;
use pokedex_core::PokemonPortResult;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default PokeAPI client using the reqwest HTTP backend.
pub type DefaultPokeApiClient = PokeApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the PokeAPI REST API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultPokeApiClient` for production code.
pub struct PokeApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultPokeApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with a configuration error if the base URL is unusable or the
    /// HTTP client can't be built.
    pub fn new(config: &PokeApiClientConfig) -> PokemonPortResult<Self> {
        Self::build(config).map_err(map_error)
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> PokemonPortResult<Self> {
        Self::new(&PokeApiClientConfig::default())
    }

    fn build(config: &PokeApiClientConfig) -> PokeApiResult<Self> {
        let internal_config = to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

fn to_internal_config(config: &PokeApiClientConfig) -> PokeApiResult<ApiConfig> {
    Ok(ApiConfig {
        base_url: parse_base_url(&config.base_url)?,
        user_agent: config.user_agent.clone(),
        timeout: config.timeout,
        max_retries: config.max_retries,
        #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
        retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
    })
}

impl<B: HttpBackend> PokeApiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
