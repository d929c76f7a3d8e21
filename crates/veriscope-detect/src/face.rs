//! Facial consistency detector
//!
//! Scores how consistently the same face appears across sampled frames: the
//! share of sampled faces matching the first one, times 100. Fewer than two
//! faces cannot establish consistency and scores the inconclusive 75.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use veriscope_core::TrustScore;

use crate::backend::{FaceBackend, FaceOptions};
use crate::detector::{DetectError, Detector, DetectorDetail, DetectorResult};

/// Neutral score when there is not enough signal to compare faces.
const INCONCLUSIVE: i64 = 75;

/// Scores face-identity consistency across sampled video frames.
#[derive(Debug)]
pub struct FacialConsistencyDetector {
    backend: Arc<dyn FaceBackend>,
    options: FaceOptions,
}

impl FacialConsistencyDetector {
    pub fn new(backend: Arc<dyn FaceBackend>) -> Self {
        Self {
            backend,
            options: FaceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FaceOptions) -> Self {
        self.options = options;
        self
    }
}

#[async_trait]
impl Detector for FacialConsistencyDetector {
    type Input = Path;
    type Score = TrustScore;

    fn name(&self) -> &'static str {
        "facial-consistency"
    }

    fn neutral_score(&self) -> TrustScore {
        TrustScore::new(INCONCLUSIVE)
    }

    async fn run(&self, video: &Path) -> Result<DetectorResult<TrustScore>, DetectError> {
        let sample = self.backend.sample_faces(video, &self.options).await?;

        if sample.faces_found < 2 {
            tracing::info!(
                faces = sample.faces_found,
                "not enough faces to determine consistency"
            );
            return Ok(DetectorResult::score(TrustScore::new(INCONCLUSIVE)));
        }

        let ratio = f64::from(sample.matching_faces) / f64::from(sample.faces_found);
        let score = TrustScore::new((ratio * 100.0) as i64);

        let detail = DetectorDetail {
            sub_scores: Some(serde_json::json!({
                "faces_found": sample.faces_found,
                "matching_faces": sample.matching_faces,
            })),
            ..DetectorDetail::default()
        };

        Ok(DetectorResult::with_detail(score, detail))
    }
}
