//! # Veriscope LLM
//!
//! Text-completion provider integrations for the Veriscope engine.
//!
//! ## Supported Backends
//!
//! | Provider | Type | Key Required |
//! |----------|------|--------------|
//! | Groq | API | `GROQ_API_KEY` |
//! | Ollama | Local | None |
//! | Mock | Testing | None |
//!
//! Every provider enforces a per-request deadline; a hung backend surfaces
//! as [`LlmError::Timeout`], which callers treat the same as any other
//! transport failure: degrade to the documented fallback, never block.
//!
//! ## Quick Start
//!
//! ```rust
//! use veriscope_llm::{CompletionProvider, MockProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let llm = MockProvider::risk_reply(15, "Neutral operational language.");
//!
//!     let reply = llm.ask("Analyze this text for risk").await.unwrap();
//!     assert!(reply.starts_with("Score: 15"));
//!     assert_eq!(llm.call_count(), 1);
//! }
//! ```
//!
//! ## With Groq
//!
//! ```rust,ignore
//! use veriscope_llm::{GroqProvider, LlmConfig};
//!
//! let config = LlmConfig::from_env();
//! let api_key = config.groq_api_key.as_deref().unwrap();
//! let llm = GroqProvider::llama3(api_key).with_timeout(config.request_timeout());
//!
//! let response = llm.ask("Explain lip-sync scoring").await.unwrap();
//! ```

pub mod config;
pub mod groq;
pub mod mock;
pub mod ollama;
pub mod provider;

pub use config::{ConfigError, LlmConfig};
pub use groq::GroqProvider;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use provider::{
    CompletionProvider, CompletionRequest, CompletionResponse, LlmError, DEFAULT_TIMEOUT,
};
