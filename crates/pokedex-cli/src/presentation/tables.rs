//! Table formatting utilities for CLI output.

/// Highest base stat any Pokémon can have.
const MAX_BASE_STAT: u32 = 255;

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use pokedex_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("pikachu", 10), "pikachu");
/// assert_eq!(truncate_string("crabominable", 8), "crabo...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Uppercase the first character of each `-`-separated word.
///
/// ```rust
/// use pokedex_cli::presentation::capitalize;
///
/// assert_eq!(capitalize("mr-mime"), "Mr-Mime");
/// ```
pub fn capitalize(s: &str) -> String {
    s.split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// A bar of `width` cells filled in proportion to `value` out of the max base stat.
pub fn stat_bar(value: u32, width: usize) -> String {
    let value = value.min(MAX_BASE_STAT) as usize;
    let filled = (value * width).div_ceil(MAX_BASE_STAT as usize);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}
