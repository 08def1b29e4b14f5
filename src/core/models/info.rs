//! Model entry as listed by the gateway.

use serde::Deserialize;

const UNKNOWN_ID: &str = "unknown";

/// One element of the `/models` `data` array. Other fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Model {
    #[serde(default = "unknown_id")]
    pub id: String,
}

fn unknown_id() -> String {
    UNKNOWN_ID.to_string()
}

#[cfg(test)]
impl Model {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Model ids in listing order.
pub fn model_ids(models: &[Model]) -> Vec<String> {
    models.iter().map(|m| m.id.clone()).collect()
}
