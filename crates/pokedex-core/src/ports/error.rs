//! Error types for Pokémon port operations.

use thiserror::Error;

/// Errors from Pokémon repository operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokemonPortError {
    /// No Pokémon exists with the requested name.
    #[error("Pokemon not found: {name}")]
    NotFound {
        /// The name that was looked up
        name: String,
    },

    /// Upstream rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The data source answered with something unusable.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl PokemonPortError {
    /// Whether repeating the same request later might succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Network { .. })
    }
}

/// Result type alias for Pokémon port operations.
pub type PokemonPortResult<T> = Result<T, PokemonPortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PokemonPortError::NotFound {
            name: "missingno".to_string(),
        };
        assert_eq!(err.to_string(), "Pokemon not found: missingno");

        let err = PokemonPortError::Network {
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(PokemonPortError::RateLimited.is_retryable());
        assert!(
            PokemonPortError::Network {
                message: String::new()
            }
            .is_retryable()
        );
        assert!(
            !PokemonPortError::NotFound {
                name: "x".to_string()
            }
            .is_retryable()
        );
        assert!(
            !PokemonPortError::InvalidResponse {
                message: String::new()
            }
            .is_retryable()
        );
    }
}
