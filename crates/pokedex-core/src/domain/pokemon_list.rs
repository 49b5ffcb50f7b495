//! Paginated Pokédex listing types.

use serde::{Deserialize, Serialize};

/// One row of the Pokédex list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListEntry {
    /// Species name.
    pub name: String,
    /// National Pokédex number.
    pub number: u32,
    /// Artwork URL for the entry.
    pub image_url: String,
}

/// A page of the Pokédex list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    /// Total number of Pokémon known upstream.
    pub count: u32,
    /// Entries on this page, in Pokédex order.
    pub entries: Vec<PokemonListEntry>,
    /// Whether another page follows this one.
    pub has_more: bool,
}

impl PokemonPage {
    /// An empty last page.
    pub const fn empty(count: u32) -> Self {
        Self {
            count,
            entries: Vec::new(),
            has_more: false,
        }
    }

    /// Whether this page has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
