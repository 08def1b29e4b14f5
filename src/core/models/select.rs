//! Which models to probe.

/// Known-significant ids, probed first when the gateway lists them.
pub const PRIORITY_MODELS: &[&str] = &[
    "claude-sonnet-4-20250514",
    "claude-3-5-sonnet-20241022",
    "gpt-4o",
    "o1",
    "gemini-2.5-pro",
    "gemini-2.0-flash",
];

/// Number of listed models probed when no priority id is available.
pub const FALLBACK_COUNT: usize = 3;

/// Priority ids present in `available` (priority order), else the first `FALLBACK_COUNT` ids.
pub fn select_probe_set(available: &[String]) -> Vec<String> {
    select_with_priority(PRIORITY_MODELS, available)
}

pub fn select_with_priority(priority: &[&str], available: &[String]) -> Vec<String> {
    let picked: Vec<String> = priority
        .iter()
        .filter(|id| available.iter().any(|a| a == *id))
        .map(|id| id.to_string())
        .collect();
    if !picked.is_empty() {
        return picked;
    }
    available.iter().take(FALLBACK_COUNT).cloned().collect()
}
