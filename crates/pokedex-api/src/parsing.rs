//! Conversion of PokeAPI responses into core domain types.

use crate::error::{PokeApiError, PokeApiResult};
use crate::models::{ApiNamedResource, ApiPokemon, ApiPokemonList};
use pokedex_core::{PokemonInfo, PokemonListEntry, PokemonPage, PokemonStat, PokemonType};

/// Official artwork sprite location, keyed by Pokédex number.
const ARTWORK_URL_PREFIX: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/";

/// Official artwork URL for a Pokédex number.
pub fn artwork_url(number: u32) -> String {
    format!("{ARTWORK_URL_PREFIX}{number}.png")
}

/// Extract the Pokédex number from a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon/25/`.
pub fn parse_entry_number(resource_url: &str) -> Option<u32> {
    let trimmed = resource_url.strip_suffix('/').unwrap_or(resource_url);
    let segment = trimmed.rsplit('/').next()?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

pub fn to_pokemon_info(pokemon: ApiPokemon) -> PokemonInfo {
    let mut types: Vec<PokemonType> = pokemon
        .types
        .into_iter()
        .map(|t| PokemonType {
            slot: t.slot,
            name: t.kind.name,
        })
        .collect();
    types.sort_by_key(|t| t.slot);

    PokemonInfo {
        id: pokemon.id,
        name: pokemon.name,
        height: pokemon.height,
        weight: pokemon.weight,
        base_experience: pokemon.base_experience,
        types,
        stats: pokemon
            .stats
            .into_iter()
            .map(|s| PokemonStat {
                name: s.stat.name,
                base_stat: s.base_stat,
                effort: s.effort,
            })
            .collect(),
        sprite_url: pokemon.sprites.front_default,
    }
}

fn to_list_entry(resource: ApiNamedResource) -> PokeApiResult<PokemonListEntry> {
    let number =
        parse_entry_number(&resource.url).ok_or_else(|| PokeApiError::InvalidResponse {
            message: format!(
                "list entry '{}' has no Pokédex number in '{}'",
                resource.name, resource.url
            ),
        })?;

    Ok(PokemonListEntry {
        name: resource.name,
        number,
        image_url: artwork_url(number),
    })
}

pub fn to_pokemon_page(list: ApiPokemonList) -> PokeApiResult<PokemonPage> {
    let entries = list
        .results
        .into_iter()
        .map(to_list_entry)
        .collect::<PokeApiResult<Vec<_>>>()?;

    Ok(PokemonPage {
        count: list.count,
        entries,
        has_more: list.next.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_entry_number() {
        assert_eq!(
            parse_entry_number("https://pokeapi.co/api/v2/pokemon/25/"),
            Some(25)
        );
        assert_eq!(
            parse_entry_number("https://pokeapi.co/api/v2/pokemon/10034"),
            Some(10034)
        );
        assert_eq!(parse_entry_number("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(parse_entry_number(""), None);
        assert_eq!(parse_entry_number("42"), Some(42));
    }

    #[test]
    fn test_parse_entry_number_non_ascii_segment() {
        assert_eq!(parse_entry_number("https://pokeapi.co/api/v2/pokémon/é"), None);
        assert_eq!(parse_entry_number("https://pokeapi.co/api/v2/pokémon/7é/"), None);
        assert_eq!(parse_entry_number("https://pokeapi.co/api/v2/pokémon/7/"), Some(7));
        assert_eq!(parse_entry_number("https://pokeapi.co/api/v2/pokemon/+5"), None);
    }

    #[test]
    fn test_to_pokemon_page_non_ascii_url_is_invalid_response() {
        let api: ApiPokemonList = serde_json::from_value(json!({
            "count": 1,
            "results": [{"name": "glitch", "url": "https://pokeapi.co/api/v2/pokémon/é"}]
        }))
        .unwrap();

        let err = to_pokemon_page(api).unwrap_err();
        assert!(matches!(err, PokeApiError::InvalidResponse { .. }));
    }

    #[test]
    fn test_artwork_url() {
        assert!(artwork_url(1).ends_with("/official-artwork/1.png"));
    }

    #[test]
    fn test_to_pokemon_info_sorts_types_by_slot() {
        let api: ApiPokemon = serde_json::from_value(json!({
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "base_experience": 267,
            "types": [
                {"slot": 2, "type": {"name": "flying", "url": ""}},
                {"slot": 1, "type": {"name": "fire", "url": ""}}
            ],
            "stats": [
                {"base_stat": 78, "effort": 0, "stat": {"name": "hp", "url": ""}}
            ],
            "sprites": {"front_default": "https://img.example/6.png"}
        }))
        .unwrap();

        let info = to_pokemon_info(api);

        assert_eq!(info.id, 6);
        assert_eq!(info.types[0].name, "fire");
        assert_eq!(info.types[1].name, "flying");
        assert_eq!(info.stat("hp").map(|s| s.base_stat), Some(78));
        assert_eq!(info.sprite_url.as_deref(), Some("https://img.example/6.png"));
    }

    #[test]
    fn test_to_pokemon_page() {
        let api: ApiPokemonList = serde_json::from_value(json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }))
        .unwrap();

        let page = to_pokemon_page(api).unwrap();

        assert_eq!(page.count, 1302);
        assert!(page.has_more);
        assert_eq!(page.entries[1].number, 2);
        assert_eq!(page.entries[1].image_url, artwork_url(2));
    }

    #[test]
    fn test_to_pokemon_page_rejects_entry_without_number() {
        let api: ApiPokemonList = serde_json::from_value(json!({
            "count": 1,
            "results": [{"name": "glitch", "url": "https://pokeapi.co/api/v2/pokemon/"}]
        }))
        .unwrap();

        let err = to_pokemon_page(api).unwrap_err();
        assert!(matches!(err, PokeApiError::InvalidResponse { .. }));
    }
}
