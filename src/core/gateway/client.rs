//! HTTP client for the two gateway endpoints: model listing and chat completion.

use log::debug;
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::config::Config;
use crate::core::models::Model;
use crate::core::util;

use super::error::{BODY_PREVIEW_CHARS, GatewayError};

#[derive(Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<Model>,
}

/// Client bound to one gateway base URL and bearer key.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    config: Config,
}

impl GatewayClient {
    pub fn new(config: Config) -> Result<Self, GatewayError> {
        // Every call opens a fresh connection.
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Attach `Authorization: Bearer <key>` when a key is configured.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// `GET {base}/models`. A missing `data` key yields an empty list.
    pub async fn list_models(&self) -> Result<Vec<Model>, GatewayError> {
        let url = format!("{}/models", self.config.base_url);
        debug!("GET {}", url);

        let response = self
            .authorize(self.http.get(&url))
            .timeout(self.config.list_timeout)
            .send()
            .await?;
        let text = success_body(response).await?;

        let parsed: ModelsResponse =
            serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))?;
        debug!("gateway listed {} models", parsed.data.len());
        Ok(parsed.data)
    }

    /// `POST {base}/chat/completions` with a single user message, non-streaming.
    /// Returns `choices[0].message.content`, or an empty string when that path is absent.
    pub async fn chat_completion(&self, model: &str, message: &str) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let payload = json!({
            "model": model,
            "messages": [{ "role": "user", "content": message }],
            "max_tokens": self.config.max_tokens,
            "stream": false,
        });
        debug!("POST {} model={}", url, model);

        let response = self
            .authorize(self.http.post(&url))
            .json(&payload)
            .timeout(self.config.probe_timeout)
            .send()
            .await?;
        let text = success_body(response).await?;

        let value: Value =
            serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))?;
        Ok(reply_content(&value))
    }
}

/// Read the body of a 200. Any other status becomes `GatewayError::Http` with a truncated
/// body preview, which is empty when the body itself cannot be read.
async fn success_body(response: reqwest::Response) -> Result<String, GatewayError> {
    let status = response.status();
    if status != StatusCode::OK {
        let text = response.text().await.unwrap_or_default();
        return Err(GatewayError::Http {
            status: status.as_u16(),
            body: util::truncate_chars(&text, BODY_PREVIEW_CHARS).to_string(),
        });
    }
    Ok(response.text().await?)
}

fn reply_content(value: &Value) -> String {
    value
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
