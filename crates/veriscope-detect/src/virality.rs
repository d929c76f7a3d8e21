//! Virality predictor: spread-potential scoring of an attack script
//!
//! Primary path asks the provider for the full
//! `Virality:/Emotion:/Readability:` triple; any missing or non-numeric
//! field drops the whole reply to the neutral (50, 50, 50) triple. The
//! weighted variant asks only for emotional intensity and computes
//! readability locally (Flesch reading ease), combining them 60/40, the
//! shape used when no structured reply can be trusted end-to-end.

use std::sync::Arc;
use std::time::Duration;

use veriscope_llm::{CompletionProvider, CompletionRequest, DEFAULT_TIMEOUT};

use crate::parse::ReplyExtractor;

/// Neutral component used when a reply cannot be parsed.
pub const NEUTRAL_COMPONENT: u8 = 50;

/// Predicted spread potential of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViralityForecast {
    /// Overall spread potential, 0-100
    pub virality: u8,
    /// Emotional intensity, 0-100
    pub emotion: u8,
    /// Reading ease, 0-100
    pub readability: u8,
}

impl ViralityForecast {
    /// The all-neutral forecast used on parse or transport failure.
    pub fn neutral() -> Self {
        Self {
            virality: NEUTRAL_COMPONENT,
            emotion: NEUTRAL_COMPONENT,
            readability: NEUTRAL_COMPONENT,
        }
    }
}

fn clamp_component(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Count syllables in a word by vowel groups, with a silent-e adjustment.
fn syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    if word.ends_with('e') && !word.ends_with("le") && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Flesch reading ease over free text, clamped to [0,100].
///
/// Higher is easier to read. Empty text scores 0.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| s.split_whitespace().next().is_some())
        .count()
        .max(1);
    let syllable_count: usize = words.iter().map(|w| syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentence_count as f64;
    let syllables_per_word = syllable_count as f64 / words.len() as f64;

    (206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word).clamp(0.0, 100.0)
}

/// Predicts how far and fast a script would spread.
#[derive(Debug)]
pub struct ViralityPredictor {
    provider: Arc<dyn CompletionProvider>,
    extractor: ReplyExtractor,
    timeout: Duration,
}

impl ViralityPredictor {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            extractor: ReplyExtractor::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn ask(&self, prompt: &str) -> Option<String> {
        let request = CompletionRequest::simple(prompt);
        match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Ok(Ok(response)) => Some(response.content),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "virality call failed");
                None
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "virality call timed out");
                None
            }
        }
    }

    /// Predict the full triple through the provider.
    pub async fn predict(&self, text: &str) -> ViralityForecast {
        let prompt = format!(
            "Analyze this text for virality potential. Provide a virality score (0-100), \
             emotion score (0-100), and readability score (0-100). \
             Format: Virality: [score], Emotion: [score], Readability: [score]. Text: '{text}'"
        );

        let Some(reply) = self.ask(&prompt).await else {
            return ViralityForecast::neutral();
        };

        match self.extractor.virality(&reply) {
            Some(parsed) => ViralityForecast {
                virality: clamp_component(parsed.virality),
                emotion: clamp_component(parsed.emotion),
                readability: clamp_component(parsed.readability),
            },
            None => {
                tracing::warn!("virality reply did not match expected format, using neutral triple");
                ViralityForecast::neutral()
            }
        }
    }

    /// Predict emotion through the provider and compute readability locally,
    /// weighting them 60/40 into the virality component.
    pub async fn predict_weighted(&self, text: &str) -> ViralityForecast {
        let prompt = format!(
            "On a scale from 0 (calm) to 100 (highly emotional), rate the emotional \
             intensity of this text. Respond with only the number. Text: '{text}'"
        );

        let emotion = match self.ask(&prompt).await {
            Some(reply) => self
                .extractor
                .first_integer(&reply)
                .map(clamp_component)
                .unwrap_or(NEUTRAL_COMPONENT),
            None => NEUTRAL_COMPONENT,
        };

        let readability = flesch_reading_ease(text) as u8;
        let virality = (f64::from(emotion) * 0.6 + f64::from(readability) * 0.4) as u8;

        ViralityForecast {
            virality,
            emotion,
            readability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veriscope_llm::MockProvider;

    #[tokio::test]
    async fn test_predict_parses_triple() {
        let mock = Arc::new(MockProvider::constant(
            "Virality: 80, Emotion: 90, Readability: 75",
        ));
        let predictor = ViralityPredictor::new(mock);

        let forecast = predictor.predict("PANIC NOW!").await;
        assert_eq!(forecast.virality, 80);
        assert_eq!(forecast.emotion, 90);
        assert_eq!(forecast.readability, 75);
    }

    #[tokio::test]
    async fn test_predict_falls_back_to_neutral_triple() {
        let mock = Arc::new(MockProvider::constant("This would spread fast."));
        let predictor = ViralityPredictor::new(mock);

        assert_eq!(
            predictor.predict("text").await,
            ViralityForecast::neutral()
        );
    }

    #[tokio::test]
    async fn test_predict_transport_failure_is_neutral() {
        let predictor = ViralityPredictor::new(Arc::new(MockProvider::unreachable()));
        assert_eq!(
            predictor.predict("text").await,
            ViralityForecast::neutral()
        );
    }

    #[tokio::test]
    async fn test_predict_weighted_combines_components() {
        let mock = Arc::new(MockProvider::constant("90"));
        let predictor = ViralityPredictor::new(mock);

        let text = "Act now. The grid is down. Do not wait.";
        let forecast = predictor.predict_weighted(text).await;
        assert_eq!(forecast.emotion, 90);
        assert_eq!(forecast.readability, flesch_reading_ease(text) as u8);
        let expected = (90.0 * 0.6 + f64::from(forecast.readability) * 0.4) as u8;
        assert_eq!(forecast.virality, expected);
    }

    #[test]
    fn test_flesch_simple_text_reads_easy() {
        let easy = flesch_reading_ease("The cat sat. The dog ran. We all saw it.");
        let dense = flesch_reading_ease(
            "Institutional interoperability considerations necessitate comprehensive \
             infrastructural reorganization notwithstanding operational continuity imperatives.",
        );
        assert!(easy > dense);
        assert!(easy > 80.0);
    }

    #[test]
    fn test_flesch_empty_text_is_zero() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease("   "), 0.0);
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("table"), 2);
        assert_eq!(syllables("migration"), 3);
        assert_eq!(syllables("e"), 1);
    }
}
