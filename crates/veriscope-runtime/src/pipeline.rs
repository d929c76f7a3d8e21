//! Baseline analysis pipeline
//!
//! Extracts the audio track, runs the four technical detectors concurrently
//! under failure isolation, releases the audio artifact once its consumers
//! finish, then fuses the scores and risk-analyzes the transcript. The
//! report is assembled only after all four detector results have resolved;
//! there is no partial fusion.

use std::path::Path;
use std::sync::Arc;

use veriscope_core::{fuse, Report, TechnicalScores};
use veriscope_detect::backend::{
    SimulatedAudioBackend, SimulatedFaceBackend, SimulatedGazeBackend, SimulatedSpeechBackend,
};
use veriscope_detect::{
    run_isolated, AudioAnomalyDetector, ContentRiskAnalyzer, FacialConsistencyDetector,
    GazeBlinkDetector, SyncContentDetector,
};
use veriscope_llm::CompletionProvider;

use crate::audio::{AudioExtractor, SimulatedAudioExtractor};
use crate::session::SessionError;

/// Runs the full Act-1 analysis over one video.
#[derive(Debug)]
pub struct BaselinePipeline {
    extractor: Arc<dyn AudioExtractor>,
    face: FacialConsistencyDetector,
    gaze: GazeBlinkDetector,
    anomaly: AudioAnomalyDetector,
    sync: SyncContentDetector,
    risk: Arc<ContentRiskAnalyzer>,
}

impl BaselinePipeline {
    pub fn new(
        extractor: Arc<dyn AudioExtractor>,
        face: FacialConsistencyDetector,
        gaze: GazeBlinkDetector,
        anomaly: AudioAnomalyDetector,
        sync: SyncContentDetector,
        risk: Arc<ContentRiskAnalyzer>,
    ) -> Self {
        Self {
            extractor,
            face,
            gaze,
            anomaly,
            sync,
            risk,
        }
    }

    /// Wire the pipeline against the simulated backends.
    pub fn simulated(provider: Arc<dyn CompletionProvider>) -> Self {
        let risk = Arc::new(ContentRiskAnalyzer::new(provider));
        Self::new(
            Arc::new(SimulatedAudioExtractor),
            FacialConsistencyDetector::new(Arc::new(SimulatedFaceBackend::default())),
            GazeBlinkDetector::new(Arc::new(SimulatedGazeBackend::default())),
            AudioAnomalyDetector::new(Arc::new(SimulatedAudioBackend::default())),
            SyncContentDetector::new(Arc::new(SimulatedSpeechBackend::default())),
            risk,
        )
    }

    /// Run the baseline analysis and assemble the report.
    pub async fn run(&self, video: &Path) -> Result<Report, SessionError> {
        let mut audio = self
            .extractor
            .extract(video)
            .await
            .map_err(|e| SessionError::AudioExtraction(e.to_string()))?;

        tracing::info!(video = %video.display(), "running baseline detectors");

        let (face, gaze, anomaly, sync) = tokio::join!(
            run_isolated(&self.face, video),
            run_isolated(&self.gaze, video),
            run_isolated(&self.anomaly, audio.path()),
            run_isolated(&self.sync, audio.path()),
        );

        // All detectors that read the audio have finished.
        audio.release();

        let fusion = fuse(&TechnicalScores {
            facial: face.score,
            sync: sync.score,
            anomaly: anomaly.score,
            gaze: gaze.score,
        });

        let (transcript, language) = sync
            .detail
            .map(|d| {
                (
                    d.transcript.unwrap_or_default(),
                    d.language.unwrap_or_else(|| "en".to_string()),
                )
            })
            .unwrap_or_else(|| (String::new(), "en".to_string()));

        let assessment = self.risk.analyze_localized(&transcript, &language).await;

        tracing::info!(
            technical = %fusion.technical_score,
            confidence = fusion.display_confidence(),
            content_risk = %assessment.score,
            "baseline analysis complete"
        );

        Ok(Report::new(
            fusion,
            assessment.score,
            transcript,
            assessment.justification,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veriscope_llm::MockProvider;

    #[tokio::test]
    async fn test_simulated_pipeline_produces_report() {
        let pipeline = BaselinePipeline::simulated(Arc::new(MockProvider::smart()));
        let report = pipeline.run(Path::new("baseline.mp4")).await.unwrap();

        // facial 88, sync 95, anomaly 90, gaze 95 -> floor-mean 92
        assert_eq!(report.technical_score.value(), 92);
        assert!(report.confidence > 90.0 && report.confidence <= 100.0);
        assert!(report.transcript.contains("server migration"));
        assert_eq!(report.content_risk.value(), 12);
    }

    #[tokio::test]
    async fn test_detector_failures_degrade_to_neutral_defaults() {
        let risk = Arc::new(ContentRiskAnalyzer::new(Arc::new(MockProvider::smart())));
        let pipeline = BaselinePipeline::new(
            Arc::new(SimulatedAudioExtractor),
            FacialConsistencyDetector::new(Arc::new(SimulatedFaceBackend::unavailable())),
            GazeBlinkDetector::new(Arc::new(SimulatedGazeBackend::unavailable())),
            AudioAnomalyDetector::new(Arc::new(SimulatedAudioBackend::unavailable())),
            SyncContentDetector::new(Arc::new(SimulatedSpeechBackend::unavailable())),
            risk,
        );

        let report = pipeline.run(Path::new("baseline.mp4")).await.unwrap();

        // facial 75, sync 30, anomaly 50, gaze 50 -> floor-mean 51
        assert_eq!(report.technical_score.value(), 51);
        // No transcript survived, so risk short-circuits to the empty-input pair
        assert_eq!(report.content_risk.value(), 0);
        assert!(report.transcript.is_empty());
    }
}
