//! OpenAI-compatible gateway access: `/models` and `/chat/completions`.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;

pub use client::GatewayClient;
pub use error::GatewayError;
