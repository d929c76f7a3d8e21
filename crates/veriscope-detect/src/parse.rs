//! Tolerant extraction of structured fields from model replies
//!
//! Model replies are expected in marker form (`Score: 85, Justification:
//! ...`) but arrive as free text. The extractor never raises on a missing
//! marker: it returns `None` and the caller applies its documented fallback.
//! A field value that is present but not an integer also counts as a miss.

use regex::Regex;

/// A parsed risk reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskReply {
    pub score: i64,
    pub justification: String,
}

/// A parsed virality reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViralityReply {
    pub virality: i64,
    pub emotion: i64,
    pub readability: i64,
}

/// Compiled extraction patterns for the reply shapes the engine requests.
#[derive(Debug)]
pub struct ReplyExtractor {
    score: Regex,
    justification: Regex,
    virality: Regex,
    emotion: Regex,
    readability: Regex,
    integer: Regex,
}

impl Default for ReplyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyExtractor {
    pub fn new() -> Self {
        Self {
            // Field value runs to the next comma or line end; brackets from
            // literal-minded models ("Score: [85]") are tolerated.
            score: Regex::new(r"(?i)score:\s*([^,\n]+)").unwrap(),
            justification: Regex::new(r"(?is)justification:\s*(.+)").unwrap(),
            virality: Regex::new(r"(?i)virality:\s*([^,\n]+)").unwrap(),
            emotion: Regex::new(r"(?i)emotion:\s*([^,\n]+)").unwrap(),
            readability: Regex::new(r"(?i)readability:\s*([^,\n]+)").unwrap(),
            integer: Regex::new(r"\d+").unwrap(),
        }
    }

    fn field_int(&self, marker: &Regex, reply: &str) -> Option<i64> {
        let raw = marker.captures(reply)?.get(1)?.as_str().trim();
        let raw = raw
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim_end_matches('.')
            .trim();
        raw.parse().ok()
    }

    /// Extract `(score, justification)` from a risk reply.
    pub fn risk(&self, reply: &str) -> Option<RiskReply> {
        let score = self.field_int(&self.score, reply)?;
        let justification = self
            .justification
            .captures(reply)?
            .get(1)?
            .as_str()
            .trim()
            .to_string();
        Some(RiskReply {
            score,
            justification,
        })
    }

    /// Extract the virality/emotion/readability triple.
    pub fn virality(&self, reply: &str) -> Option<ViralityReply> {
        Some(ViralityReply {
            virality: self.field_int(&self.virality, reply)?,
            emotion: self.field_int(&self.emotion, reply)?,
            readability: self.field_int(&self.readability, reply)?,
        })
    }

    /// Extract the first bare integer anywhere in the reply.
    ///
    /// Used for single-number prompts ("respond with only the number") where
    /// models still wrap the value in prose.
    pub fn first_integer(&self, reply: &str) -> Option<i64> {
        self.integer.find(reply)?.as_str().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_well_formed() {
        let extractor = ReplyExtractor::new();
        let reply = "Score: 85, Justification: Alarmist framing and urgency cues.";
        let parsed = extractor.risk(reply).unwrap();
        assert_eq!(parsed.score, 85);
        assert_eq!(parsed.justification, "Alarmist framing and urgency cues.");
    }

    #[test]
    fn test_risk_tolerates_brackets_and_case() {
        let extractor = ReplyExtractor::new();
        let parsed = extractor
            .risk("score: [40], justification: Mild editorializing.")
            .unwrap();
        assert_eq!(parsed.score, 40);
        assert_eq!(parsed.justification, "Mild editorializing.");
    }

    #[test]
    fn test_risk_multiline_justification() {
        let extractor = ReplyExtractor::new();
        let reply = "Score: 70,\nJustification: Uses panic language.\nRepeats unverified claims.";
        let parsed = extractor.risk(reply).unwrap();
        assert_eq!(parsed.score, 70);
        assert!(parsed.justification.contains("unverified claims"));
    }

    #[test]
    fn test_risk_missing_score_marker() {
        let extractor = ReplyExtractor::new();
        assert!(extractor.risk("The text seems risky overall.").is_none());
    }

    #[test]
    fn test_risk_non_numeric_score() {
        let extractor = ReplyExtractor::new();
        assert!(extractor
            .risk("Score: high, Justification: very risky")
            .is_none());
    }

    #[test]
    fn test_risk_missing_justification() {
        let extractor = ReplyExtractor::new();
        assert!(extractor.risk("Score: 55").is_none());
    }

    #[test]
    fn test_virality_triple() {
        let extractor = ReplyExtractor::new();
        let reply = "Virality: 80, Emotion: 90, Readability: 75";
        let parsed = extractor.virality(reply).unwrap();
        assert_eq!(parsed.virality, 80);
        assert_eq!(parsed.emotion, 90);
        assert_eq!(parsed.readability, 75);
    }

    #[test]
    fn test_virality_missing_field() {
        let extractor = ReplyExtractor::new();
        assert!(extractor.virality("Virality: 80, Emotion: 90").is_none());
    }

    #[test]
    fn test_first_integer() {
        let extractor = ReplyExtractor::new();
        assert_eq!(
            extractor.first_integer("I would rate this text 85 out of 100."),
            Some(85)
        );
        assert_eq!(extractor.first_integer("no numbers here"), None);
    }
}
