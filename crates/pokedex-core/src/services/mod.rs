//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators over ports. They don't know about
//! concrete implementations and are constructed explicitly by a composition
//! root, which hands them their collaborators.

mod pokemon_detail;
mod pokemon_list;

pub use pokemon_detail::PokemonDetailService;
pub use pokemon_list::{PAGE_SIZE, PokemonListService};
