//! Probing models with a single chat completion, and tallying the results.

use log::{debug, warn};

use crate::core::gateway::{GatewayClient, GatewayError};

/// Literal response recorded for a timed-out probe.
pub const TIMEOUT_RESPONSE: &str = "timeout";

/// Outcome of probing one model.
#[derive(Debug)]
pub struct ProbeResult {
    pub model_id: String,
    pub outcome: Result<String, GatewayError>,
}

impl ProbeResult {
    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Reply text on success; otherwise the truncated error body, `"timeout"`, or the error message.
    pub fn response(&self) -> String {
        match &self.outcome {
            Ok(content) => content.clone(),
            Err(GatewayError::Http { body, .. }) => body.clone(),
            Err(GatewayError::Timeout) => TIMEOUT_RESPONSE.to_string(),
            Err(e) => e.to_string(),
        }
    }
}

/// Send one chat completion to `model_id`. Never retried.
pub async fn probe_model(client: &GatewayClient, model_id: &str, message: &str) -> ProbeResult {
    let outcome = client.chat_completion(model_id, message).await;
    match &outcome {
        Ok(content) => debug!("probe {} ok ({} chars)", model_id, content.chars().count()),
        Err(e) => warn!("probe {} failed: {}", model_id, e),
    }
    ProbeResult {
        model_id: model_id.to_string(),
        outcome,
    }
}

/// Totals over a finished probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl ProbeSummary {
    pub fn from_results(results: &[ProbeResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.success()).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
        }
    }
}
