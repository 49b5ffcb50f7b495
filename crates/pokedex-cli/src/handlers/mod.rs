//! Command handlers that delegate to the core services.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Call a core service from the context
//!   2. Format output for the terminal
//!
//! Handlers should NOT construct repositories or contain business logic.

pub mod info;
pub mod list;
