//! URL construction helpers for PokeAPI.
//!
//! Pure functions for building endpoint URLs from the configured base URL.

use crate::error::{PokeApiError, PokeApiResult};
use crate::models::ApiConfig;
use url::Url;

/// Normalize a Pokémon name the way PokeAPI indexes it.
///
/// PokeAPI resource names are lowercase with no surrounding whitespace.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validate a configured base URL and make sure it ends with `/`.
pub fn parse_base_url(raw: &str) -> PokeApiResult<Url> {
    let mut url = Url::parse(raw)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(PokeApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Build the URL for a single Pokémon, `{base}pokemon/{name}`.
///
/// `name` is used as a single path segment and percent-encoded as needed.
pub fn build_pokemon_url(config: &ApiConfig, name: &str) -> PokeApiResult<Url> {
    let mut url = config.base_url.clone();
    url.path_segments_mut()
        .map_err(|()| PokeApiError::InvalidBaseUrl {
            url: config.base_url.to_string(),
            reason: "URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .push("pokemon")
        .push(name);
    Ok(url)
}

/// Build the URL for a page of the Pokémon list.
pub fn build_pokemon_list_url(config: &ApiConfig, limit: u32, offset: u32) -> PokeApiResult<Url> {
    let mut url = config.base_url.join("pokemon")?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string())
        .append_pair("offset", &offset.to_string());
    Ok(url)
}
