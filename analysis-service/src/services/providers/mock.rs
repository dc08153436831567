//! Mock provider implementation for testing.

use super::{ModelError, ModelReply, TextModel};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Mock text model returning a canned reply.
pub struct MockTextModel {
    reply: String,
    fail: bool,
    calls: AtomicU64,
}

impl MockTextModel {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
            calls: AtomicU64::new(0),
        }
    }

    /// A mock that fails every generation call.
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            calls: AtomicU64::new(0),
        }
    }

    /// Number of generation calls received.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn generate(&self, _system: &str, prompt: &str) -> Result<ModelReply, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(ModelError::ApiError(
                "Mock provider failure".to_string(),
            ));
        }

        // Simulate some processing
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;

        Ok(ModelReply {
            text: self.reply.clone(),
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: self.reply.len() as i32 / 4,
        })
    }

    async fn health_check(&self) -> Result<(), ModelError> {
        if self.fail {
            Err(ModelError::NotConfigured(
                "Mock text model set to fail".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
