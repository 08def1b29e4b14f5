//! Generic utilities used across core modules.

/// First `max` characters of `s` (char-safe, never splits a code point).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Mask a secret for display: keep a short prefix (at most 20 chars, at most half the key).
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    let keep = (len / 2).min(20);
    format!("{}...", truncate_chars(secret, keep))
}

/// Filter items by case-insensitive query matching on one string field.
/// Returns all items when query is empty.
pub fn filter_by_query<'a, T, F>(items: &'a [T], query: &str, get_field: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    if query.is_empty() {
        return items.iter().collect();
    }
    let q = query.to_lowercase();
    items
        .iter()
        .filter(|item| get_field(item).to_lowercase().contains(&q))
        .collect()
}
