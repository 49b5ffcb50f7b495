//! Internal error types for PokeAPI operations.
//!
//! These errors are internal to `pokedex-api` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for PokeAPI operations.
pub type PokeApiResult<T> = Result<T, PokeApiError>;

/// Errors related to PokeAPI operations.
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// API request failed with an HTTP error status.
    #[error("PokeAPI request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from PokeAPI: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The requested Pokémon does not exist.
    #[error("Pokemon '{name}' not found on PokeAPI")]
    PokemonNotFound {
        /// The name that was looked up
        name: String,
    },

    /// The configured base URL can't be used for API requests.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The offending URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
