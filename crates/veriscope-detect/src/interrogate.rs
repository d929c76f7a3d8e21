//! Interrogation analyzer: threat-actor profiling of an attack script
//!
//! Two independent probes against the completion provider: an intent
//! analysis predicting the attacker's goals and methodology, and a style
//! probe that asks the model to rephrase the script in an exaggerated
//! persona; fluent compliance is a tell that the script itself was
//! machine-written. Either probe degrades to a fallback string on failure;
//! the briefing always completes.

use std::sync::Arc;
use std::time::Duration;

use veriscope_llm::{CompletionProvider, CompletionRequest, DEFAULT_TIMEOUT};

/// Fallback text when a probe cannot reach the provider.
pub const INTERROGATION_FALLBACK: &str = "Interrogation failed.";

/// Output of both probes.
#[derive(Debug, Clone)]
pub struct InterrogationProfile {
    /// Predicted attacker intent and methodology
    pub intent_analysis: String,
    /// The persona rephrasing used as a generated-text fluency tell
    pub style_probe: String,
}

/// Runs the two interrogation probes against an attack script.
#[derive(Debug)]
pub struct Interrogator {
    provider: Arc<dyn CompletionProvider>,
    timeout: Duration,
}

impl Interrogator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn probe(&self, system: &str, prompt: &str) -> String {
        let request = CompletionRequest::with_role(system, prompt);
        match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Ok(Ok(response)) => response.content,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "interrogation probe failed");
                INTERROGATION_FALLBACK.to_string()
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "interrogation probe timed out");
                INTERROGATION_FALLBACK.to_string()
            }
        }
    }

    /// Profile the origin and intent of an attack script.
    pub async fn interrogate(&self, text: &str) -> InterrogationProfile {
        let intent_analysis = self
            .probe(
                "You are a threat intelligence analyst.",
                &format!(
                    "Based on the following malicious script, predict the attacker's \
                     intent and methodology. Script: '{text}'"
                ),
            )
            .await;

        let style_probe = self
            .probe(
                "You are a helpful assistant.",
                &format!(
                    "The following text has been flagged as potentially AI-generated. \
                     Please rephrase it in the style of a pirate. Text: '{text}'"
                ),
            )
            .await;

        InterrogationProfile {
            intent_analysis,
            style_probe,
        }
    }
}
