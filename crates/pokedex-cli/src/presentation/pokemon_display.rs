//! Rendering of Pokémon details and list pages.

use std::fmt::Write as _;

use pokedex_core::{PokemonInfo, PokemonPage};

use super::tables::{capitalize, separator, stat_bar, truncate_string};

const STAT_BAR_WIDTH: usize = 30;
const LIST_NAME_WIDTH: usize = 24;

/// Render the detail view of a Pokémon.
pub fn render_pokemon_info(info: &PokemonInfo) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "#{:03} {}", info.id, capitalize(&info.name));
    let _ = writeln!(out, "{}", separator(48));

    let types = info
        .types
        .iter()
        .map(|t| capitalize(&t.name))
        .collect::<Vec<_>>()
        .join(" / ");
    let _ = writeln!(
        out,
        "Type:      {}",
        if types.is_empty() { "--" } else { types.as_str() }
    );
    let _ = writeln!(out, "Height:    {:.1} m", info.height_m());
    let _ = writeln!(out, "Weight:    {:.1} kg", info.weight_kg());
    if let Some(exp) = info.base_experience {
        let _ = writeln!(out, "Base exp:  {exp}");
    }

    if !info.stats.is_empty() {
        let _ = writeln!(out);
        for stat in &info.stats {
            let _ = writeln!(
                out,
                "{:<6} {:>3} {}",
                stat.abbreviation(),
                stat.base_stat,
                stat_bar(stat.base_stat, STAT_BAR_WIDTH)
            );
        }
        let _ = writeln!(out, "{:<6} {:>3}", "Total", info.base_stat_total());
    }

    if let Some(ref sprite) = info.sprite_url {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sprite:    {sprite}");
    }

    out
}

/// Render one page of the Pokédex list. `page` is 1-based.
pub fn render_pokemon_page(page: &PokemonPage, page_number: u32) -> String {
    let mut out = String::new();

    if page.is_empty() {
        let _ = writeln!(out, "No Pokémon on page {page_number}.");
        return out;
    }

    let _ = writeln!(out, "{:<6} {:<LIST_NAME_WIDTH$}", "No.", "Name");
    let _ = writeln!(out, "{}", separator(6 + 1 + LIST_NAME_WIDTH));
    for entry in &page.entries {
        let _ = writeln!(
            out,
            "#{:<5} {:<LIST_NAME_WIDTH$}",
            entry.number,
            truncate_string(&capitalize(&entry.name), LIST_NAME_WIDTH)
        );
    }

    let _ = writeln!(out);
    let _ = write!(
        out,
        "Page {page_number} ({} of {} Pokémon)",
        page.entries.len(),
        page.count
    );
    if page.has_more {
        let _ = write!(out, " - next: --page {}", page_number.saturating_add(1));
    }
    let _ = writeln!(out);

    out
}
