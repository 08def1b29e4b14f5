//! Gateway call outcomes other than success.

/// Maximum number of characters of a response body kept for reporting.
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Why a gateway call did not produce a usable response.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The gateway answered with a non-200 status. `body` holds the first 200 characters.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The request did not complete within its timeout.
    #[error("request timed out")]
    Timeout,
    /// Connection, DNS, or other transport failure.
    #[error("{0}")]
    Transport(String),
    /// A 200 response whose body could not be parsed.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_decode() {
            GatewayError::Decode(e.to_string())
        } else {
            GatewayError::Transport(e.to_string())
        }
    }
}
