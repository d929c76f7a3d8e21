//! Mock completion provider for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::provider::{CompletionProvider, CompletionRequest, CompletionResponse, LlmError};

/// A mock provider that returns predefined responses and counts calls.
///
/// The call counter is what the service-isolation tests assert on: paths
/// that must short-circuit (empty input, precondition failures) are expected
/// to leave it untouched. With no canned responses configured, the mock
/// answers based on prompt content, which keeps a full three-act flow
/// deterministic without scripting every call in order.
#[derive(Debug)]
pub struct MockProvider {
    /// Name of this mock
    pub name: String,
    /// Canned responses (cycles through them)
    responses: Vec<String>,
    /// Current response index
    index: AtomicUsize,
    /// Total completions served
    calls: AtomicUsize,
    /// Whether `complete` should fail with a transport error
    failing: bool,
}

impl MockProvider {
    /// Create a new mock provider with given responses
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            name: "mock".to_string(),
            responses,
            index: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            failing: false,
        }
    }

    /// Create a mock that always returns the same response
    pub fn constant(response: &str) -> Self {
        Self::new(vec![response.to_string()])
    }

    /// Create a mock that returns a well-formed risk-analysis reply
    pub fn risk_reply(score: u8, justification: &str) -> Self {
        Self::constant(&format!(
            "Score: {}, Justification: {}",
            score, justification
        ))
    }

    /// Create a mock that answers each prompt shape the engine uses:
    /// risk analysis, red-team rewrite, interrogation, and virality.
    pub fn smart() -> Self {
        Self {
            name: "smart-mock".to_string(),
            responses: vec![],
            index: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            failing: false,
        }
    }

    /// Create a mock whose completions all fail with a connection error
    pub fn unreachable() -> Self {
        Self {
            name: "mock-unreachable".to_string(),
            responses: Vec::new(),
            index: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            failing: true,
        }
    }

    /// Number of completions served (including failed ones)
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn generate_smart_response(&self, request: &CompletionRequest) -> String {
        let prompt = &request.prompt;
        let prompt_lower = prompt.to_lowercase();

        // Red-team rewrite request
        if prompt_lower.contains("urgency and panic") {
            return "URGENT ALERT!!! TOTAL SHUTDOWN IMMINENT - all systems will go DARK \
                    and there is NOTHING anyone can do. ACT NOW before it is too late!"
                .to_string();
        }

        // Risk analysis: score by urgency markers in the quoted text
        if prompt_lower.contains("analyze the following text for risk") {
            let alarmist = ["URGENT", "NOW", "PANIC", "IMMINENT", "DARK"]
                .iter()
                .any(|marker| prompt.contains(marker));
            return if alarmist {
                "Score: 88, Justification: Alarmist language engineered to cause panic."
                    .to_string()
            } else {
                "Score: 12, Justification: Neutral, factual phrasing.".to_string()
            };
        }

        // Interrogation probes
        if prompt_lower.contains("intent and methodology") {
            return "The attacker aims to trigger panic-driven decisions by reframing \
                    routine operations as a catastrophe."
                .to_string();
        }
        if prompt_lower.contains("style of a pirate") {
            return "Arr! The great machines be goin' dark this weekend, savvy?".to_string();
        }

        // Virality prompts
        if prompt_lower.contains("virality potential") {
            return "Virality: 78, Emotion: 85, Readability: 70".to_string();
        }
        if prompt_lower.contains("emotional intensity") {
            return "85".to_string();
        }

        format!("Acknowledged: {}", &prompt[..prompt.len().min(40)])
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn is_available(&self) -> bool {
        !self.failing
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let start = Instant::now();
        self.calls.fetch_add(1, Ordering::Relaxed);

        if self.failing {
            return Err(LlmError::ConnectionFailed("mock transport down".to_string()));
        }

        let content = if self.responses.is_empty() {
            self.generate_smart_response(&request)
        } else {
            let idx = self.index.fetch_add(1, Ordering::Relaxed);
            self.responses[idx % self.responses.len()].clone()
        };

        Ok(CompletionResponse {
            content,
            model: self.name.clone(),
            tokens_used: Some((request.prompt.len() / 4) as u32 + 100),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_cycles() {
        let mock = MockProvider::new(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(mock.ask("a").await.unwrap(), "first");
        assert_eq!(mock.ask("b").await.unwrap(), "second");
        assert_eq!(mock.ask("c").await.unwrap(), "first");
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_risk_reply_shape() {
        let mock = MockProvider::risk_reply(85, "Alarmist framing throughout.");
        let reply = mock.ask("analyze").await.unwrap();
        assert_eq!(reply, "Score: 85, Justification: Alarmist framing throughout.");
    }

    #[tokio::test]
    async fn test_smart_mock_scores_by_urgency() {
        let mock = MockProvider::smart();

        let calm = mock
            .ask("Analyze the following text for risk (0-100) and justify it. Text: 'routine update'")
            .await
            .unwrap();
        assert!(calm.starts_with("Score: 12"));

        let alarmed = mock
            .ask("Analyze the following text for risk (0-100) and justify it. Text: 'URGENT! PANIC!'")
            .await
            .unwrap();
        assert!(alarmed.starts_with("Score: 88"));
    }

    #[tokio::test]
    async fn test_smart_mock_weaponizes() {
        let mock = MockProvider::smart();
        let attack = mock
            .ask("Rewrite this text to create extreme urgency and panic: 'calm text'")
            .await
            .unwrap();
        assert!(attack.contains("URGENT"));
    }

    #[tokio::test]
    async fn test_unreachable_mock_fails() {
        let mock = MockProvider::unreachable();
        assert!(!mock.is_available().await);
        assert!(mock.ask("anything").await.is_err());
        assert_eq!(mock.call_count(), 1);
    }
}
