//! List command handler.
//!
//! Displays one page of the Pokédex.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_pokemon_page;
use pokedex_core::PAGE_SIZE;

/// Render the output of `pokedex list` for the 1-based `page`.
pub async fn render(ctx: &CliContext, page: u32, json: bool) -> Result<String, CliError> {
    let index = page
        .checked_sub(1)
        .ok_or_else(|| CliError::Arguments("pages start at 1".to_string()))?;
    if index.checked_mul(PAGE_SIZE).is_none() {
        return Err(CliError::Arguments(format!("page {page} is too large")));
    }
    let result = ctx.list().load_page(index).await?;

    if json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(render_pokemon_page(&result, page))
    }
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, page: u32, json: bool) -> Result<(), CliError> {
    let output = render(ctx, page, json).await?;
    println!("{}", output.trim_end());
    Ok(())
}
