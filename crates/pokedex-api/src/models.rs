//! Internal API response types for PokeAPI.
//!
//! These types are internal to `pokedex-api` and are not exposed to consumers.
//! External consumers should use the domain types defined in `pokedex-core`.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal, validated configuration for the PokeAPI client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the API, always ending in `/`
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

#[cfg(test)]
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(crate::config::DEFAULT_BASE_URL).unwrap(),
            user_agent: "pokedex-api/test".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiNamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response of `GET pokemon/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    #[serde(default)]
    pub stats: Vec<ApiStat>,
    #[serde(default)]
    pub sprites: ApiSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: ApiNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: ApiNamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Response of `GET pokemon?limit=&offset=`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemonList {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<ApiNamedResource>,
}
