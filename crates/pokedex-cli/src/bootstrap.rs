//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The PokeAPI client (via pokedex-api) is created here
//! and injected into the core services (via pokedex-core).
//!
//! Command handlers receive the composed `CliContext` and delegate to it.

use std::sync::Arc;
use std::time::Duration;

use pokedex_api::{DefaultPokeApiClient, PokeApiClientConfig};
use pokedex_core::{PokemonDetailService, PokemonListService, PokemonRepository};

use crate::error::CliError;

/// Environment variable overriding the PokeAPI base URL.
pub const ENV_BASE_URL: &str = "POKEDEX_API_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "POKEDEX_TIMEOUT_SECS";
/// Environment variable overriding the retry count for transient errors.
pub const ENV_MAX_RETRIES: &str = "POKEDEX_MAX_RETRIES";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// PokeAPI base URL, `None` for the client default.
    pub base_url: Option<String>,
    /// Request timeout, `None` for the client default.
    pub timeout: Option<Duration>,
    /// Retry count, `None` for the client default.
    pub max_retries: Option<u8>,
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let base_url = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty());

        let timeout = lookup(ENV_TIMEOUT_SECS)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .ok_or_else(|| {
                        CliError::Config(format!(
                            "{ENV_TIMEOUT_SECS} must be a positive number of seconds, got '{raw}'"
                        ))
                    })
            })
            .transpose()?;

        let max_retries = lookup(ENV_MAX_RETRIES)
            .map(|raw| {
                raw.trim().parse::<u8>().map_err(|_| {
                    CliError::Config(format!(
                        "{ENV_MAX_RETRIES} must be between 0 and 255, got '{raw}'"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            base_url,
            timeout,
            max_retries,
        })
    }

    /// Override the base URL (from the `--base-url` flag).
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    /// Build the PokeAPI client configuration.
    pub fn client_config(&self) -> PokeApiClientConfig {
        let mut config = PokeApiClientConfig::new();
        if let Some(ref url) = self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(retries) = self.max_retries {
            config = config.with_max_retries(retries);
        }
        config
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    detail: PokemonDetailService,
    list: PokemonListService,
}

impl CliContext {
    /// Access the detail service.
    pub fn detail(&self) -> &PokemonDetailService {
        &self.detail
    }

    /// Access the list service.
    pub fn list(&self) -> &PokemonListService {
        &self.list
    }
}

/// Bootstrap the CLI application.
///
/// Creates the PokeAPI client from `config` and hands it to the core
/// services as their repository.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let client_config = config.client_config();
    tracing::debug!(?client_config, "building PokeAPI client");

    let client = DefaultPokeApiClient::new(&client_config)?;
    Ok(bootstrap_with(Arc::new(client)))
}

/// Bootstrap with a custom repository (for testing).
pub fn bootstrap_with(repository: Arc<dyn PokemonRepository>) -> CliContext {
    CliContext {
        detail: PokemonDetailService::new(Arc::clone(&repository)),
        list: PokemonListService::new(repository),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
        assert!(config.max_retries.is_none());
    }

    #[test]
    fn test_environment_values_are_parsed() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "http://localhost:8000/api/v2/"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_MAX_RETRIES, "0"),
        ]))
        .unwrap();

        assert_eq!(
            config.base_url.as_deref(),
            Some("http://localhost:8000/api/v2/")
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.max_retries, Some(0));
    }

    #[test]
    fn test_invalid_environment_values_are_rejected() {
        let err = CliConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));

        let err = CliConfig::from_lookup(lookup_from(&[(ENV_MAX_RETRIES, "-1")])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_flag_overrides_environment() {
        let config = CliConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "http://env/")]))
            .unwrap()
            .with_base_url(Some("http://flag/".to_string()));
        assert_eq!(config.base_url.as_deref(), Some("http://flag/"));

        let config = config.with_base_url(None);
        assert_eq!(config.base_url.as_deref(), Some("http://flag/"));
    }

    #[test]
    fn test_bootstrap_with_default_config() {
        assert!(bootstrap(&CliConfig::default()).is_ok());
    }

    #[test]
    fn test_bootstrap_rejects_bad_base_url() {
        let config = CliConfig::default().with_base_url(Some("ftp://example.com/".to_string()));
        let err = bootstrap(&config).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
    }
}
