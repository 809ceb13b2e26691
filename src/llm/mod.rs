pub mod gemini;
pub mod prompts;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

/// Failures at the text-generation boundary. None of these are retried;
/// the caller sees the first failure.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("request to text-generation API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("text-generation API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("text-generation API returned no candidate text")]
    EmptyResponse,
}

/// Anything that can turn a prompt into generated text.
///
/// The analysis core never depends on this; it is injected into the HTTP
/// handlers and documentation helpers that need it, so tests can substitute
/// a stub.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
