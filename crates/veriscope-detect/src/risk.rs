//! Content risk analyzer
//!
//! Scores free text for manipulation risk through the completion provider.
//! The analyzer never fails: empty input short-circuits without a provider
//! call, and a malformed reply, transport error, or timeout all degrade to
//! the mid-scale fallback. Mid-scale is deliberate: it signals "unknown"
//! rather than "safe" or "dangerous", so escalation comparisons downstream
//! are not biased by a parse failure.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use veriscope_core::RiskScore;
use veriscope_llm::{CompletionProvider, CompletionRequest, DEFAULT_TIMEOUT};

use crate::detector::{DetectError, Detector, DetectorDetail, DetectorResult};
use crate::parse::ReplyExtractor;
use crate::translate::{translate_or_original, IdentityTranslator, Translator};

/// Fallback when the reply cannot be parsed or the transport fails.
pub const PARSE_FALLBACK_SCORE: i64 = 50;
pub const PARSE_FALLBACK_JUSTIFICATION: &str = "Could not parse AI response";

/// Short-circuit result for empty input.
pub const EMPTY_INPUT_JUSTIFICATION: &str = "No text provided for analysis";

/// Analyst persona given to the provider for every risk call.
const RISK_SYSTEM_PROMPT: &str = "You are a media and security analyst. Your task is to analyze \
text for signs of manipulation, misinformation, and emotional exploitation. Assign a risk score \
from 0 (completely safe, neutral journalism) to 100 (dangerous, highly manipulative propaganda). \
Consider urgency and panic cues, emotionally charged language, misleading framing, and overall \
trustworthiness. A standard professional news report should receive a score of 20 or less; a \
text engineered to create fear and panic should receive 70 or more.";

/// A scored piece of text.
#[derive(Debug, Clone)]
pub struct RiskAssessment {
    pub score: RiskScore,
    pub justification: String,
}

/// Scores text for manipulation risk via the completion provider.
#[derive(Debug)]
pub struct ContentRiskAnalyzer {
    provider: Arc<dyn CompletionProvider>,
    translator: Arc<dyn Translator>,
    extractor: ReplyExtractor,
    timeout: Duration,
}

impl ContentRiskAnalyzer {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            translator: Arc::new(IdentityTranslator),
            extractor: ReplyExtractor::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Wire up a translation backend for non-English transcripts
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    /// Set the deadline applied to each provider call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Analyze text already in English (or of unknown language).
    pub async fn analyze(&self, text: &str) -> RiskAssessment {
        if text.trim().is_empty() {
            return RiskAssessment {
                score: RiskScore::new(0),
                justification: EMPTY_INPUT_JUSTIFICATION.to_string(),
            };
        }

        let prompt = format!(
            "Analyze the following text for risk (0-100) and justify it. \
             Format: Score: [score], Justification: [justification]. Text: '{text}'"
        );
        let request = CompletionRequest::with_role(RISK_SYSTEM_PROMPT, &prompt);

        let reply = match tokio::time::timeout(self.timeout, self.provider.complete(request)).await
        {
            Ok(Ok(response)) => response.content,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "risk analysis call failed, using fallback");
                return self.fallback();
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "risk analysis call timed out, using fallback");
                return self.fallback();
            }
        };

        match self.extractor.risk(&reply) {
            Some(parsed) => RiskAssessment {
                score: RiskScore::new(parsed.score),
                justification: parsed.justification,
            },
            None => {
                tracing::warn!("risk reply did not match expected format, using fallback");
                self.fallback()
            }
        }
    }

    /// Analyze a transcript in a known language, translating first when it
    /// is not English.
    pub async fn analyze_localized(&self, text: &str, language: &str) -> RiskAssessment {
        if text.trim().is_empty() {
            return self.analyze(text).await;
        }
        let english = translate_or_original(self.translator.as_ref(), text, language).await;
        self.analyze(&english).await
    }

    fn fallback(&self) -> RiskAssessment {
        RiskAssessment {
            score: RiskScore::new(PARSE_FALLBACK_SCORE),
            justification: PARSE_FALLBACK_JUSTIFICATION.to_string(),
        }
    }
}

#[async_trait]
impl Detector for ContentRiskAnalyzer {
    type Input = str;
    type Score = RiskScore;

    fn name(&self) -> &'static str {
        "content-risk"
    }

    fn neutral_score(&self) -> RiskScore {
        RiskScore::new(PARSE_FALLBACK_SCORE)
    }

    async fn run(&self, text: &str) -> Result<DetectorResult<RiskScore>, DetectError> {
        let assessment = self.analyze(text).await;
        let detail = DetectorDetail {
            justification: Some(assessment.justification),
            ..DetectorDetail::default()
        };
        Ok(DetectorResult::with_detail(assessment.score, detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veriscope_llm::MockProvider;

    #[tokio::test]
    async fn test_empty_input_short_circuits_without_provider_call() {
        let mock = Arc::new(MockProvider::risk_reply(90, "should never be seen"));
        let analyzer = ContentRiskAnalyzer::new(mock.clone());

        let assessment = analyzer.analyze("").await;
        assert_eq!(assessment.score.value(), 0);
        assert_eq!(assessment.justification, EMPTY_INPUT_JUSTIFICATION);
        assert_eq!(mock.call_count(), 0);

        let assessment = analyzer.analyze("   \n\t ").await;
        assert_eq!(assessment.score.value(), 0);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_well_formed_reply() {
        let mock = Arc::new(MockProvider::risk_reply(85, "Urgency cues throughout."));
        let analyzer = ContentRiskAnalyzer::new(mock.clone());

        let assessment = analyzer.analyze("URGENT: act now before it is too late!").await;
        assert_eq!(assessment.score.value(), 85);
        assert_eq!(assessment.justification, "Urgency cues throughout.");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_reply_uses_fallback() {
        let mock = Arc::new(MockProvider::constant("This text is moderately risky."));
        let analyzer = ContentRiskAnalyzer::new(mock);

        let assessment = analyzer.analyze("some text to analyze").await;
        assert_eq!(assessment.score.value(), 50);
        assert_eq!(assessment.justification, PARSE_FALLBACK_JUSTIFICATION);
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        let mock = Arc::new(MockProvider::unreachable());
        let analyzer = ContentRiskAnalyzer::new(mock);

        let assessment = analyzer.analyze("some text to analyze").await;
        assert_eq!(assessment.score.value(), 50);
        assert_eq!(assessment.justification, PARSE_FALLBACK_JUSTIFICATION);
    }

    #[tokio::test]
    async fn test_timeout_uses_fallback() {
        use async_trait::async_trait;
        use veriscope_llm::{CompletionRequest, CompletionResponse, LlmError};

        #[derive(Debug)]
        struct HungProvider;

        #[async_trait]
        impl veriscope_llm::CompletionProvider for HungProvider {
            fn name(&self) -> &str {
                "hung"
            }

            async fn is_available(&self) -> bool {
                true
            }

            async fn complete(
                &self,
                _request: CompletionRequest,
            ) -> Result<CompletionResponse, LlmError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                unreachable!("the analyzer deadline must fire first")
            }
        }

        let analyzer = ContentRiskAnalyzer::new(Arc::new(HungProvider))
            .with_timeout(Duration::from_millis(20));

        let assessment = analyzer.analyze("some text to analyze").await;
        assert_eq!(assessment.score.value(), 50);
        assert_eq!(assessment.justification, PARSE_FALLBACK_JUSTIFICATION);
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_clamped() {
        let mock = Arc::new(MockProvider::constant(
            "Score: 250, Justification: Very exaggerated.",
        ));
        let analyzer = ContentRiskAnalyzer::new(mock);

        let assessment = analyzer.analyze("text").await;
        assert_eq!(assessment.score.value(), 100);
    }

    #[tokio::test]
    async fn test_detector_contract_carries_justification() {
        let analyzer = ContentRiskAnalyzer::new(Arc::new(MockProvider::risk_reply(
            15,
            "Neutral operational language.",
        )));
        let result = analyzer.run("routine maintenance notice").await.unwrap();
        assert_eq!(result.score.value(), 15);
        assert_eq!(
            result.detail.unwrap().justification.as_deref(),
            Some("Neutral operational language.")
        );
    }
}
