//! HTTP backend abstraction for PokeAPI.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with automatic retry logic for transient errors.

use crate::error::{PokeApiError, PokeApiResult};
use crate::models::ApiConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `PokemonRepository` port.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PokeApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Implements exponential backoff for transient server errors (5xx)
/// and network errors. Client errors (4xx) fail on the first attempt.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiConfig) -> PokeApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    fn backoff_delay(&self, attempt: u8) -> Duration {
        Duration::from_millis(
            self.retry_base_delay_ms
                .saturating_mul(2u64.saturating_pow(u32::from(attempt) - 1)),
        )
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> PokeApiResult<reqwest::Response> {
        let mut last_error: Option<PokeApiError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff_delay(attempt);
                tracing::debug!(%url, attempt, ?delay, "retrying PokeAPI request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        tracing::warn!(%url, status = status.as_u16(), "PokeAPI server error");
                        last_error = Some(PokeApiError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(PokeApiError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        tracing::warn!(%url, error = %e, "PokeAPI request failed");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| PokeApiError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PokeApiResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
