//! Full three-act session flow against the simulated backends
//!
//! Exercises the complete chain: baseline analysis → red-team attack →
//! intelligence briefing, plus the degradation paths (provider down) and
//! the audio-artifact release guarantee.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use veriscope_adversarial::{AdversarialTransform, ESCALATION_MARGIN};
use veriscope_detect::backend::{
    SimulatedAudioBackend, SimulatedFaceBackend, SimulatedGazeBackend, SimulatedSpeechBackend,
};
use veriscope_detect::{
    AudioAnomalyDetector, ContentRiskAnalyzer, DetectError, FacialConsistencyDetector,
    GazeBlinkDetector, Interrogator, SyncContentDetector, ViralityPredictor,
    PARSE_FALLBACK_JUSTIFICATION,
};
use veriscope_llm::{CompletionProvider, MockProvider};
use veriscope_runtime::{
    AudioArtifact, AudioExtractor, BaselinePipeline, Session, SessionError, SessionServices,
    SessionStage, SimulatedAudioExtractor,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Extractor wrapper that remembers where the audio artifact landed.
#[derive(Debug)]
struct RecordingExtractor {
    inner: SimulatedAudioExtractor,
    last_path: Mutex<Option<PathBuf>>,
}

impl RecordingExtractor {
    fn new() -> Self {
        Self {
            inner: SimulatedAudioExtractor,
            last_path: Mutex::new(None),
        }
    }

    fn last_path(&self) -> Option<PathBuf> {
        self.last_path.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioExtractor for RecordingExtractor {
    async fn extract(&self, video: &Path) -> Result<AudioArtifact, DetectError> {
        let artifact = self.inner.extract(video).await?;
        *self.last_path.lock().unwrap() = Some(artifact.path().to_path_buf());
        Ok(artifact)
    }
}

fn services_with_extractor(
    provider: Arc<dyn CompletionProvider>,
    extractor: Arc<dyn AudioExtractor>,
    speech: SimulatedSpeechBackend,
) -> SessionServices {
    let risk = Arc::new(ContentRiskAnalyzer::new(provider.clone()));
    SessionServices {
        pipeline: BaselinePipeline::new(
            extractor,
            FacialConsistencyDetector::new(Arc::new(SimulatedFaceBackend::default())),
            GazeBlinkDetector::new(Arc::new(SimulatedGazeBackend::default())),
            AudioAnomalyDetector::new(Arc::new(SimulatedAudioBackend::default())),
            SyncContentDetector::new(Arc::new(speech)),
            risk.clone(),
        ),
        risk,
        transform: AdversarialTransform::new(provider.clone()),
        interrogator: Interrogator::new(provider.clone()),
        virality: ViralityPredictor::new(provider),
    }
}

#[tokio::test]
async fn test_three_act_flow() {
    init_tracing();

    let video = tempfile::NamedTempFile::new().unwrap();
    let mut session = Session::new(SessionServices::simulated(Arc::new(MockProvider::smart())));
    assert_eq!(session.stage(), SessionStage::Empty);

    // Act 1
    let report = session.run_baseline(video.path()).await.unwrap();
    assert_eq!(report.technical_score.value(), 92);
    assert!(report.confidence > 90.0);
    assert!(report.transcript.contains("server migration"));
    assert_eq!(report.content_risk.value(), 12);
    assert_eq!(session.stage(), SessionStage::BaselineReady);

    // Act 2: the smart mock scores the neutral transcript 12 and the
    // weaponized rewrite 88, a jump well past the escalation margin
    let attack = session.run_attack(None).await.unwrap();
    assert_eq!(attack.original_risk.value(), 12);
    assert_eq!(attack.attack_risk.value(), 88);
    assert!(i64::from(attack.attack_risk.value()) - i64::from(attack.original_risk.value())
        > i64::from(ESCALATION_MARGIN));
    assert!(attack.defended);
    assert_eq!(session.stage(), SessionStage::AttackReady);

    // Act 3
    let briefing = session.run_briefing().await.unwrap();
    assert!(briefing.intent_analysis.contains("panic"));
    assert_eq!(briefing.virality_score, 78);
    assert_eq!(briefing.emotion_score, 85);
    assert_eq!(briefing.readability_score, 70);
    assert_eq!(session.stage(), SessionStage::BriefingReady);
}

#[tokio::test]
async fn test_acts_complete_when_provider_is_down() {
    init_tracing();

    let provider: Arc<dyn CompletionProvider> = Arc::new(MockProvider::unreachable());
    let mut session = Session::new(SessionServices::simulated(provider));

    // Baseline still produces a report; risk degrades to the mid-scale pair
    let report = session.run_baseline(Path::new("clip.mp4")).await.unwrap();
    assert_eq!(report.technical_score.value(), 92);
    assert_eq!(report.content_risk.value(), 50);
    assert_eq!(report.risk_justification, PARSE_FALLBACK_JUSTIFICATION);

    // Attack degrades to the source text; no risk jump, defense not credited
    let attack = session.run_attack(None).await.unwrap();
    assert_eq!(attack.attack_text, attack.source_text);
    assert_eq!(attack.original_risk.value(), attack.attack_risk.value());
    assert!(!attack.defended);

    // Briefing degrades to fallback strings and the neutral triple
    let briefing = session.run_briefing().await.unwrap();
    assert_eq!(briefing.virality_score, 50);
    assert_eq!(briefing.emotion_score, 50);
    assert_eq!(briefing.readability_score, 50);
}

#[tokio::test]
async fn test_audio_artifact_is_released_after_success() {
    init_tracing();

    let extractor = Arc::new(RecordingExtractor::new());
    let services = services_with_extractor(
        Arc::new(MockProvider::smart()),
        extractor.clone(),
        SimulatedSpeechBackend::default(),
    );
    let mut session = Session::new(services);

    session.run_baseline(Path::new("clip.mp4")).await.unwrap();

    let path = extractor.last_path().expect("extractor was invoked");
    assert!(!path.exists(), "audio artifact leaked at {}", path.display());
}

#[tokio::test]
async fn test_audio_artifact_is_released_after_detector_failure() {
    init_tracing();

    let extractor = Arc::new(RecordingExtractor::new());
    let services = services_with_extractor(
        Arc::new(MockProvider::smart()),
        extractor.clone(),
        SimulatedSpeechBackend::unavailable(),
    );
    let mut session = Session::new(services);

    let report = session.run_baseline(Path::new("clip.mp4")).await.unwrap();
    // Transcription failed: sync fell back to its neutral default
    assert!(report.transcript.is_empty());

    let path = extractor.last_path().expect("extractor was invoked");
    assert!(!path.exists(), "audio artifact leaked at {}", path.display());
}

#[tokio::test]
async fn test_precondition_chain_is_enforced() {
    init_tracing();

    let mut session = Session::new(SessionServices::simulated(Arc::new(MockProvider::smart())));

    assert!(matches!(
        session.run_attack(None).await,
        Err(SessionError::Precondition { .. })
    ));
    assert!(matches!(
        session.run_briefing().await,
        Err(SessionError::Precondition { .. })
    ));

    session.run_baseline(Path::new("clip.mp4")).await.unwrap();
    assert!(session.run_attack(None).await.is_ok());
    assert!(session.run_briefing().await.is_ok());
}
