//! Configuration for completion providers
//!
//! Handles API keys, provider selection, and request deadlines. Providers
//! are constructed explicitly from this config at process start and injected
//! where they are needed; there are no process-global clients.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Error types for configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Groq API key (env: GROQ_API_KEY)
    pub groq_api_key: Option<String>,
    /// Ollama base URL (default: http://localhost:11434)
    pub ollama_url: String,
    /// Default provider
    pub default_provider: String,
    /// Default model
    pub default_model: String,
    /// Per-request deadline in seconds for external calls
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            ollama_url: "http://localhost:11434".to_string(),
            default_provider: "groq".to_string(),
            default_model: "llama3-8b-8192".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            groq_api_key: env::var("GROQ_API_KEY").ok(),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            default_provider: env::var("VERISCOPE_PROVIDER")
                .unwrap_or_else(|_| "groq".to_string()),
            default_model: env::var("VERISCOPE_MODEL")
                .unwrap_or_else(|_| "llama3-8b-8192".to_string()),
            request_timeout_secs: env::var("VERISCOPE_LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// The per-request deadline as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check if a provider is configured
    pub fn is_configured(&self, provider: &str) -> bool {
        match provider.to_lowercase().as_str() {
            "groq" => self.groq_api_key.is_some(),
            "ollama" | "mock" => true,
            _ => false,
        }
    }

    /// List available providers
    pub fn available_providers(&self) -> Vec<&str> {
        let mut providers = vec!["mock", "ollama"];
        if self.groq_api_key.is_some() {
            providers.push("groq");
        }
        providers
    }
}
