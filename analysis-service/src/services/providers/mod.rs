//! Text-model provider abstraction and implementations.
//!
//! The analysis pipeline only knows the `TextModel` trait; the concrete
//! backend (OpenAI-compatible API or mock) is chosen at startup.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Generation deadline exceeded")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// A completed generation.
pub struct ModelReply {
    /// Free-form analysis text.
    pub text: String,

    /// Input tokens consumed, when the provider reports usage.
    pub input_tokens: i32,

    /// Output tokens generated, when the provider reports usage.
    pub output_tokens: i32,
}

/// Trait for text generation backends.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Submit one generation request with a system instruction and a user
    /// prompt, returning the provider's free-form reply.
    async fn generate(&self, system: &str, prompt: &str) -> Result<ModelReply, ModelError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ModelError>;
}
