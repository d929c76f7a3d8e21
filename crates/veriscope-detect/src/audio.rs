//! Audio detectors: zero-shot anomaly and sync/content
//!
//! The anomaly detector maps the backend's inlier/outlier verdict onto the
//! trust scale (inlier 90, outlier 25). The sync detector transcribes the
//! audio and scores lip-sync plausibility from transcript density; its
//! result carries the transcript and detected language for the content
//! analysis stage.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use veriscope_core::TrustScore;

use crate::backend::{AnomalyDecision, AudioBackend, SpeechBackend};
use crate::detector::{DetectError, Detector, DetectorDetail, DetectorResult};

/// Neutral score when audio features could not be extracted.
const FEATURES_UNAVAILABLE: i64 = 50;

/// Transcripts at or below this many words score the sparse sync value.
pub const MIN_TRANSCRIPT_WORDS: usize = 2;

const SYNC_PLAUSIBLE: i64 = 95;
const SYNC_SPARSE: i64 = 30;

/// Scores audio authenticity against a trained normal-speech profile.
#[derive(Debug)]
pub struct AudioAnomalyDetector {
    backend: Arc<dyn AudioBackend>,
}

impl AudioAnomalyDetector {
    pub fn new(backend: Arc<dyn AudioBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Detector for AudioAnomalyDetector {
    type Input = Path;
    type Score = TrustScore;

    fn name(&self) -> &'static str {
        "audio-anomaly"
    }

    fn neutral_score(&self) -> TrustScore {
        TrustScore::new(FEATURES_UNAVAILABLE)
    }

    async fn run(&self, audio: &Path) -> Result<DetectorResult<TrustScore>, DetectError> {
        let decision = self.backend.classify_anomaly(audio).await?;

        let score = match decision {
            AnomalyDecision::Inlier => TrustScore::new(90),
            AnomalyDecision::Outlier => TrustScore::new(25),
        };

        let detail = DetectorDetail {
            sub_scores: Some(serde_json::json!({
                "decision": match decision {
                    AnomalyDecision::Inlier => "inlier",
                    AnomalyDecision::Outlier => "outlier",
                },
            })),
            ..DetectorDetail::default()
        };

        Ok(DetectorResult::with_detail(score, detail))
    }
}

/// Transcribes the audio and scores sync plausibility.
///
/// The transcript and detected language ride along in the result detail so
/// the pipeline can hand them to translation and content-risk analysis
/// without transcribing twice.
#[derive(Debug)]
pub struct SyncContentDetector {
    backend: Arc<dyn SpeechBackend>,
}

impl SyncContentDetector {
    pub fn new(backend: Arc<dyn SpeechBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Detector for SyncContentDetector {
    type Input = Path;
    type Score = TrustScore;

    fn name(&self) -> &'static str {
        "sync-content"
    }

    fn neutral_score(&self) -> TrustScore {
        TrustScore::new(SYNC_SPARSE)
    }

    async fn run(&self, audio: &Path) -> Result<DetectorResult<TrustScore>, DetectError> {
        let transcription = self.backend.transcribe(audio).await?;

        let word_count = transcription.text.split_whitespace().count();
        let score = if word_count > MIN_TRANSCRIPT_WORDS {
            TrustScore::new(SYNC_PLAUSIBLE)
        } else {
            TrustScore::new(SYNC_SPARSE)
        };

        let detail = DetectorDetail {
            transcript: Some(transcription.text),
            language: Some(transcription.language),
            sub_scores: Some(serde_json::json!({ "word_count": word_count })),
            ..DetectorDetail::default()
        };

        Ok(DetectorResult::with_detail(score, detail))
    }
}
