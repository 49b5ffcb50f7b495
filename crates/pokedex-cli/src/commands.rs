//! Subcommands of the pokedex CLI.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show details for a single Pokémon
    Info {
        /// Pokémon name (e.g. "pikachu")
        name: String,
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List Pokémon one page at a time
    List {
        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_list_defaults_to_first_page() {
        let cli = Cli::parse_from(["pokedex", "list"]);
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                page: 1,
                json: false
            })
        ));
    }

    #[test]
    fn test_list_rejects_page_zero() {
        assert!(Cli::try_parse_from(["pokedex", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn test_info_accepts_empty_name() {
        let cli = Cli::parse_from(["pokedex", "info", "", "--json"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Info { ref name, json: true }) if name.is_empty()
        ));
    }
}
