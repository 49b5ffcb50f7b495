//! Core domain types, ports and services for pokedex.
//!
//! This crate owns the `PokemonRepository` port and the services that
//! consumers (CLI, GUI) talk to. It has no knowledge of HTTP; the PokeAPI
//! implementation of the port lives in `pokedex-api` and is wired in by the
//! composition root.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{PokemonInfo, PokemonListEntry, PokemonPage, PokemonStat, PokemonType};
pub use ports::{PokemonPortError, PokemonPortResult, PokemonRepository};
pub use services::{PAGE_SIZE, PokemonDetailService, PokemonListService};

// Silence unused dev-dependency warnings for crates only used by some tests
#[cfg(test)]
use serde_json as _;
