//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: renderers return strings and never fetch
//! or transform domain data.

pub mod pokemon_display;
pub mod tables;

// Re-export commonly used items
pub use pokemon_display::{render_pokemon_info, render_pokemon_page};
pub use tables::{capitalize, separator, stat_bar, truncate_string};
