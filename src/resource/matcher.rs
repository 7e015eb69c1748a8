//! Resource key matching
//!
//! Used to resolve what the user typed (`lam`, `ec2/inst`, `gdf`) into
//! registry keys.

/// Return the keys matching `pattern`, sorted.
///
/// Prefix matches win; if there are none, fall back to fuzzy matching where
/// the pattern's characters appear in order. Matching is case-insensitive.
pub fn match_resource_keys<'a>(keys: &[&'a str], pattern: &str) -> Vec<&'a str> {
    let pattern = pattern.to_lowercase();

    let mut matches: Vec<&'a str> = keys
        .iter()
        .copied()
        .filter(|key| key.to_lowercase().starts_with(&pattern))
        .collect();

    if matches.is_empty() {
        matches = keys
            .iter()
            .copied()
            .filter(|key| fuzzy_match(key, &pattern))
            .collect();
    }

    matches.sort_unstable();
    matches
}

/// True if the characters of `pattern` appear in `text` in order
fn fuzzy_match(text: &str, pattern: &str) -> bool {
    let mut remaining = text.chars().flat_map(char::to_lowercase);
    pattern
        .chars()
        .all(|wanted| remaining.by_ref().any(|c| c == wanted))
}
