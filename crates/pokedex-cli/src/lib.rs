//! Command-line interface for pokedex.
//!
//! The binary in `main.rs` parses arguments, wires the PokeAPI client into
//! the core services via [`bootstrap`], and dispatches to [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the main.rs binary
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
