//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to the core services.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pokedex_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so `--json` output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_env()?.with_base_url(cli.base_url);
    let ctx = bootstrap(&config)?;

    match command {
        Commands::Info { name, json } => {
            handlers::info::execute(&ctx, &name, json).await?;
        }
        Commands::List { page, json } => {
            handlers::list::execute(&ctx, page, json).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        tracing::debug!(code, error = ?err, "command failed");
        eprintln!("Error: {err:#}");
        std::process::exit(code);
    }
}
