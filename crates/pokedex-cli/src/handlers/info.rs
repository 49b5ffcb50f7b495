//! Info command handler.
//!
//! Looks up one Pokémon through the detail service and prints it.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_pokemon_info;

/// Render the output of `pokedex info` for `name`.
pub async fn render(ctx: &CliContext, name: &str, json: bool) -> Result<String, CliError> {
    let info = ctx.detail().get_pokemon_info(name).await?;

    if json {
        Ok(serde_json::to_string_pretty(&info)?)
    } else {
        Ok(render_pokemon_info(&info))
    }
}

/// Execute the info command.
pub async fn execute(ctx: &CliContext, name: &str, json: bool) -> Result<(), CliError> {
    let output = render(ctx, name, json).await?;
    println!("{}", output.trim_end());
    Ok(())
}
