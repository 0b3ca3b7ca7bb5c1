//! Outbound text-generation collaborator used by the chat endpoint.

pub mod gemini;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("provider response had no text")]
    EmptyResponse,

    #[error("LLM call timed out after {0:?}")]
    Timeout(Duration),
}

pub type LlmResult<T> = Result<T, LlmError>;

/// Single capability the chat handler depends on.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send ordered prompt parts and return the generated text.
    async fn generate(&self, parts: &[String]) -> LlmResult<String>;
}
