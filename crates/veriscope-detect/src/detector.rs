//! Detector trait and failure isolation
//!
//! A detector consumes one artifact (video path, audio path, or text) and
//! produces a score plus optional auxiliary payload. Detectors are
//! side-effect-free with respect to each other: none reads another's output
//! within a stage, so they can run concurrently. A failing detector never
//! aborts the pipeline: [`run_isolated`] substitutes the detector's
//! documented neutral default instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from detector backends
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("feature extraction failed: {0}")]
    Extraction(String),
}

/// Auxiliary payload attached to a detector result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectorDetail {
    /// Free-text justification, where the detector produces one
    pub justification: Option<String>,
    /// Transcript, for detectors that transcribe audio
    pub transcript: Option<String>,
    /// Detected language of the transcript (ISO 639-1)
    pub language: Option<String>,
    /// Detector-specific sub-scores and counters
    pub sub_scores: Option<serde_json::Value>,
}

/// Result of a single detector run. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorResult<S> {
    /// The detector's score
    pub score: S,
    /// Optional structured payload
    pub detail: Option<DetectorDetail>,
}

impl<S> DetectorResult<S> {
    /// A bare result with no detail
    pub fn score(score: S) -> Self {
        Self {
            score,
            detail: None,
        }
    }

    /// Attach detail to the result
    pub fn with_detail(score: S, detail: DetectorDetail) -> Self {
        Self {
            score,
            detail: Some(detail),
        }
    }
}

/// A polymorphic scoring unit over one input kind.
///
/// `Score` is either `TrustScore` (technical detectors) or `RiskScore`
/// (content analysis); the two families never mix.
#[async_trait]
pub trait Detector: Send + Sync {
    /// Input kind: a filesystem path for media, `str` for text
    type Input: ?Sized + Sync;
    /// Score family this detector speaks
    type Score: Copy + Send;

    /// Stable detector name, used in logs
    fn name(&self) -> &'static str;

    /// The documented neutral default substituted when this detector fails
    fn neutral_score(&self) -> Self::Score;

    /// Run the detector against one input
    async fn run(&self, input: &Self::Input) -> Result<DetectorResult<Self::Score>, DetectError>;
}

/// Run a detector with failure isolation.
///
/// A backend error is logged and replaced by the detector's neutral default;
/// there is no automatic retry. This is the only way the baseline pipeline
/// invokes detectors.
pub async fn run_isolated<D>(detector: &D, input: &D::Input) -> DetectorResult<D::Score>
where
    D: Detector + ?Sized,
{
    match detector.run(input).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(
                detector = detector.name(),
                error = %e,
                "detector failed, substituting neutral default"
            );
            DetectorResult::score(detector.neutral_score())
        }
    }
}
