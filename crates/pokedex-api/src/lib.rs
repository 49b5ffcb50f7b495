//! PokeAPI client for pokedex.
//!
//! Implements the core-owned [`pokedex_core::PokemonRepository`] port on top
//! of the public [PokeAPI](https://pokeapi.co). Wire types, retries and
//! error mapping stay inside this crate; consumers only ever see core types.
//!
//! ```no_run
//! use pokedex_api::{DefaultPokeApiClient, PokeApiClientConfig};
//! use pokedex_core::PokemonDetailService;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), pokedex_core::PokemonPortError> {
//! let client = DefaultPokeApiClient::new(&PokeApiClientConfig::new())?;
//! let service = PokemonDetailService::new(Arc::new(client));
//! let pikachu = service.get_pokemon_info("pikachu").await?;
//! println!("#{} {}", pikachu.id, pikachu.name);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// PokeApiClient is meant to be used through the PokemonRepository port,
// not through its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPokeApiClient;

// Configuration
pub use config::PokeApiClientConfig;
