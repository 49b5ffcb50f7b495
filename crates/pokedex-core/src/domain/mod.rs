//! Domain types shared by every pokedex adapter.
//!
//! These types are owned by core and never mirror a particular API's wire
//! format. Adapters convert their own models into them at the boundary.

mod pokemon;
mod pokemon_list;

pub use pokemon::{PokemonInfo, PokemonStat, PokemonType};
pub use pokemon_list::{PokemonListEntry, PokemonPage};
