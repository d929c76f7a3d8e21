//! Completion provider trait and common types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default per-request deadline for external completion calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from completion providers
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Provider not available")]
    NotAvailable,
}

/// A request to a completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System prompt (role/persona)
    pub system: String,
    /// User message
    pub prompt: String,
    /// Model identifier; `None` uses the provider's configured default
    pub model: Option<String>,
    /// Temperature (0.0 = deterministic, 1.0 = creative)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a simple request with default settings
    pub fn simple(prompt: &str) -> Self {
        Self {
            system: "You are a helpful assistant.".to_string(),
            prompt: prompt.to_string(),
            model: None,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }

    /// Create a request with a specific system role
    pub fn with_role(system: &str, prompt: &str) -> Self {
        Self {
            system: system.to_string(),
            prompt: prompt.to_string(),
            model: None,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }

    /// Override the model for this request
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }
}

/// Response from a completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated text
    pub content: String,
    /// Model that produced it
    pub model: String,
    /// Tokens used (if reported)
    pub tokens_used: Option<u32>,
    /// Time taken in milliseconds
    pub latency_ms: u64,
}

/// Trait for completion providers
///
/// The engine owns only prompt templates and response parsing; transport and
/// model selection live behind this seam. Implementations must enforce a
/// request deadline so a hung backend can never block a session.
#[async_trait]
pub trait CompletionProvider: Send + Sync + std::fmt::Debug {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Check if the provider is reachable
    async fn is_available(&self) -> bool;

    /// Generate a completion
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Generate with a simple prompt (convenience method)
    async fn ask(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.complete(CompletionRequest::simple(prompt)).await?;
        Ok(response.content)
    }
}
