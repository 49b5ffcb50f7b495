//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `PokemonPortError` to exit codes and user-facing messages.

use pokedex_core::PokemonPortError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested Pokémon doesn't exist.
    #[error("No Pokémon named '{0}'")]
    NotFound(String),

    /// PokeAPI couldn't be reached or refused the request.
    #[error("PokeAPI unavailable: {0}")]
    Unavailable(String),

    /// PokeAPI answered with data we couldn't use.
    #[error("Unexpected PokeAPI response: {0}")]
    Protocol(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => 66,    // EX_NOINPUT
            CliError::Unavailable(_) => 69, // EX_UNAVAILABLE
            CliError::Protocol(_) => 76,    // EX_PROTOCOL
            CliError::Arguments(_) => 2,    // EX_USAGE
            CliError::Config(_) => 78,      // EX_CONFIG
            CliError::Output(_) => 74,      // EX_IOERR
        }
    }
}

impl From<PokemonPortError> for CliError {
    fn from(err: PokemonPortError) -> Self {
        match err {
            PokemonPortError::NotFound { name } => CliError::NotFound(name),
            err @ (PokemonPortError::RateLimited | PokemonPortError::Network { .. }) => {
                CliError::Unavailable(err.to_string())
            }
            PokemonPortError::InvalidResponse { message } => CliError::Protocol(message),
            PokemonPortError::Configuration { message } => CliError::Config(message),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}
