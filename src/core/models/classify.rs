//! Provider classification by id substring, and grouping for display.

use std::collections::HashMap;
use std::fmt;

use super::info::Model;

/// Provider family a model id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    Claude,
    Gpt,
    Gemini,
    Qwen,
    Other,
}

impl Provider {
    pub fn label(self) -> &'static str {
        match self {
            Provider::Claude => "Claude (Anthropic)",
            Provider::Gpt => "GPT (OpenAI/Codex)",
            Provider::Gemini => "Gemini (Google)",
            Provider::Qwen => "Qwen (Alibaba)",
            Provider::Other => "Other",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rules in priority order; the first matching needle wins.
const RULES: &[(&[&str], Provider)] = &[
    (&["claude"], Provider::Claude),
    (&["gpt", "o1", "o3"], Provider::Gpt),
    (&["gemini"], Provider::Gemini),
    (&["qwen"], Provider::Qwen),
];

/// Classify a model id (case-insensitive substring match).
pub fn classify(model_id: &str) -> Provider {
    let id = model_id.to_lowercase();
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| id.contains(*n)))
        .map(|(_, provider)| *provider)
        .unwrap_or(Provider::Other)
}

/// Models bucketed by provider.
#[derive(Debug, Default)]
pub struct ProviderGroups {
    groups: Vec<(Provider, Vec<String>)>,
}

impl ProviderGroups {
    /// Groups sorted by label with `Other` last; ids sorted alphabetically within each group.
    pub fn from_models(models: &[Model]) -> Self {
        let mut buckets: HashMap<Provider, Vec<String>> = HashMap::new();
        for model in models {
            buckets
                .entry(classify(&model.id))
                .or_default()
                .push(model.id.clone());
        }

        let mut groups: Vec<(Provider, Vec<String>)> = buckets.into_iter().collect();
        for (_, ids) in &mut groups {
            ids.sort();
        }
        groups.sort_by_key(|(p, _)| (*p == Provider::Other, p.label()));
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Provider, &[String])> {
        self.groups.iter().map(|(p, ids)| (*p, ids.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, provider: Provider) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(p, _)| *p == provider)
            .map(|(_, ids)| ids.as_slice())
    }
}
