//! Gaze & blink pattern detector
//!
//! Converts counted blink events into blinks-per-minute and scores against
//! the normal human band: inside (10, 35) scores 95, five or fewer per
//! minute is a strong synthesis signal and scores 10, anything else is
//! out-of-range and scores 50.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use veriscope_core::TrustScore;

use crate::backend::{GazeBackend, GazeOptions};
use crate::detector::{DetectError, Detector, DetectorDetail, DetectorResult};

/// Neutral score when no usable footage was analyzed.
const NO_SIGNAL: i64 = 50;

/// Score a blink rate against the normal human band.
fn score_blink_rate(blinks_per_minute: f64) -> i64 {
    if blinks_per_minute > 10.0 && blinks_per_minute < 35.0 {
        95
    } else if blinks_per_minute <= 5.0 {
        10
    } else {
        50
    }
}

/// Scores blink cadence authenticity over video footage.
#[derive(Debug)]
pub struct GazeBlinkDetector {
    backend: Arc<dyn GazeBackend>,
    options: GazeOptions,
}

impl GazeBlinkDetector {
    pub fn new(backend: Arc<dyn GazeBackend>) -> Self {
        Self {
            backend,
            options: GazeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GazeOptions) -> Self {
        self.options = options;
        self
    }
}

#[async_trait]
impl Detector for GazeBlinkDetector {
    type Input = Path;
    type Score = TrustScore;

    fn name(&self) -> &'static str {
        "gaze-blink"
    }

    fn neutral_score(&self) -> TrustScore {
        TrustScore::new(NO_SIGNAL)
    }

    async fn run(&self, video: &Path) -> Result<DetectorResult<TrustScore>, DetectError> {
        let sample = self.backend.sample_blinks(video, &self.options).await?;

        if sample.duration_secs <= 0.0 {
            return Ok(DetectorResult::score(TrustScore::new(NO_SIGNAL)));
        }

        let blinks_per_minute = f64::from(sample.blink_count) / sample.duration_secs * 60.0;
        let score = TrustScore::new(score_blink_rate(blinks_per_minute));

        let detail = DetectorDetail {
            sub_scores: Some(serde_json::json!({
                "blink_count": sample.blink_count,
                "duration_secs": sample.duration_secs,
                "blinks_per_minute": blinks_per_minute,
            })),
            ..DetectorDetail::default()
        };

        Ok(DetectorResult::with_detail(score, detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SimulatedGazeBackend;
    use crate::detector::run_isolated;

    fn video() -> &'static Path {
        Path::new("baseline.mp4")
    }

    #[test]
    fn test_blink_rate_bands() {
        assert_eq!(score_blink_rate(17.0), 95);
        assert_eq!(score_blink_rate(10.0), 50); // band is exclusive
        assert_eq!(score_blink_rate(35.0), 50);
        assert_eq!(score_blink_rate(5.0), 10);
        assert_eq!(score_blink_rate(0.0), 10);
        assert_eq!(score_blink_rate(7.0), 50);
        assert_eq!(score_blink_rate(60.0), 50);
    }

    #[tokio::test]
    async fn test_normal_cadence_scores_high() {
        let detector = GazeBlinkDetector::new(Arc::new(SimulatedGazeBackend::with_sample(17, 60.0)));
        let result = detector.run(video()).await.unwrap();
        assert_eq!(result.score.value(), 95);
    }

    #[tokio::test]
    async fn test_unnaturally_low_cadence_scores_low() {
        // 3 blinks over 90 seconds: 2 per minute
        let detector = GazeBlinkDetector::new(Arc::new(SimulatedGazeBackend::with_sample(3, 90.0)));
        let result = detector.run(video()).await.unwrap();
        assert_eq!(result.score.value(), 10);
    }

    #[tokio::test]
    async fn test_empty_footage_is_neutral() {
        let detector = GazeBlinkDetector::new(Arc::new(SimulatedGazeBackend::with_sample(0, 0.0)));
        let result = detector.run(video()).await.unwrap();
        assert_eq!(result.score.value(), 50);
    }

    #[tokio::test]
    async fn test_unavailable_backend_defaults_via_isolation() {
        let detector = GazeBlinkDetector::new(Arc::new(SimulatedGazeBackend::unavailable()));
        let result = run_isolated(&detector, video()).await;
        assert_eq!(result.score.value(), 50);
    }
}
