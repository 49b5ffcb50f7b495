//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.

mod error;
mod pokemon_repository;

pub use error::{PokemonPortError, PokemonPortResult};
pub use pokemon_repository::PokemonRepository;
