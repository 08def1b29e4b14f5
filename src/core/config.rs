//! Gateway configuration: environment variables (optionally from `.env`) plus CLI overrides.

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8317/v1";
pub const DEFAULT_PROBE_MESSAGE: &str = "你好，请简短回复";
pub const DEFAULT_LIST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_TOKENS: u32 = 50;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// Bearer key; `None` sends requests without an `Authorization` header.
    pub api_key: Option<String>,
    pub probe_message: String,
    pub list_timeout: Duration,
    pub probe_timeout: Duration,
    pub max_tokens: u32,
}

impl Config {
    /// Config with default timeouts and probe message. Trailing `/` is trimmed from the base URL;
    /// a blank key means no key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into().trim().to_string();
        Self {
            base_url: normalize_base_url(base_url.into()),
            api_key: (!api_key.is_empty()).then_some(api_key),
            probe_message: DEFAULT_PROBE_MESSAGE.to_string(),
            list_timeout: DEFAULT_LIST_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Values from the command line that take precedence over the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub probe_message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Load configuration from the process environment and apply CLI overrides.
pub fn load(overrides: Overrides) -> Result<Config, ConfigError> {
    load_from(overrides, |key| env::var(key).ok())
}

/// Load configuration from an arbitrary variable lookup. Empty values count as unset.
pub fn load_from<F>(overrides: Overrides, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let base_url = overrides
        .base_url
        .or_else(|| var("GATEWAY_BASE_URL"))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let api_key = overrides
        .api_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| var("GATEWAY_API_KEY"))
        .unwrap_or_default();

    let mut config = Config::new(base_url, api_key);

    if let Some(message) = overrides
        .probe_message
        .or_else(|| var("GATEWAY_PROBE_MESSAGE"))
    {
        config.probe_message = message;
    }
    if let Some(raw) = var("GATEWAY_LIST_TIMEOUT_SECS") {
        config.list_timeout = parse_timeout("GATEWAY_LIST_TIMEOUT_SECS", &raw)?;
    }
    if let Some(raw) = var("GATEWAY_PROBE_TIMEOUT_SECS") {
        config.probe_timeout = parse_timeout("GATEWAY_PROBE_TIMEOUT_SECS", &raw)?;
    }
    Ok(config)
}

fn parse_timeout(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var,
            value: raw.to_string(),
        }),
    }
}

fn normalize_base_url(url: String) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    trimmed.to_string()
}
