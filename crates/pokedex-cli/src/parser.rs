//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for browsing the Pokédex.
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Look up Pokémon from PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Override the PokeAPI base URL for this invocation
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
