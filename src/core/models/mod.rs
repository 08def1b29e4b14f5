//! Model listing data, provider classification, filtering, and probe selection.

mod classify;
mod info;
mod select;

use crate::core::util;

pub use classify::ProviderGroups;
pub use info::{Model, model_ids};
pub use select::select_probe_set;

/// Filter models by query (case-insensitive match on id).
pub fn filter_models(models: &[Model], query: &str) -> Vec<Model> {
    util::filter_by_query(models, query, |m| m.id.as_str())
        .into_iter()
        .cloned()
        .collect()
}
