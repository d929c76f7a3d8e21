//! Session state machine: Empty → BaselineReady → AttackReady → BriefingReady
//!
//! The session owns the three artifacts and enforces the dependency chain.
//! Every transition replaces its artifact wholesale and invalidates
//! everything downstream; an operation invoked without its predecessor is
//! rejected with a precondition error. A failed baseline run leaves the
//! session `Empty`, never half-transitioned.

use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use veriscope_adversarial::{AdversarialTransform, EscalationVerdict};
use veriscope_core::{AttackArtifact, Briefing, Report};
use veriscope_detect::{ContentRiskAnalyzer, Interrogator, ViralityPredictor};
use veriscope_llm::CompletionProvider;

use crate::pipeline::BaselinePipeline;

/// Errors surfaced by session operations.
///
/// Only precondition violations are control-flow-fatal for the requested
/// operation; detector and provider failures degrade inside the acts and
/// never appear here.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("precondition not met: {operation} requires {required}")]
    Precondition {
        operation: &'static str,
        required: &'static str,
    },
    #[error("audio extraction failed: {0}")]
    AudioExtraction(String),
}

/// Where the session currently stands in the three-act flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    Empty,
    BaselineReady,
    AttackReady,
    BriefingReady,
}

/// The service handles a session runs on.
///
/// Constructed once at process start and injected; the session holds no
/// implicit globals.
#[derive(Debug)]
pub struct SessionServices {
    pub pipeline: BaselinePipeline,
    pub risk: Arc<ContentRiskAnalyzer>,
    pub transform: AdversarialTransform,
    pub interrogator: Interrogator,
    pub virality: ViralityPredictor,
}

impl SessionServices {
    /// Wire every service against the simulated media backends and the given
    /// completion provider.
    pub fn simulated(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            pipeline: BaselinePipeline::simulated(provider.clone()),
            risk: Arc::new(ContentRiskAnalyzer::new(provider.clone())),
            transform: AdversarialTransform::new(provider.clone()),
            interrogator: Interrogator::new(provider.clone()),
            virality: ViralityPredictor::new(provider),
        }
    }
}

/// One user session: the artifact set plus the services that produce it.
#[derive(Debug)]
pub struct Session {
    /// Unique session ID
    pub id: Uuid,
    services: SessionServices,
    report: Option<Report>,
    attack: Option<AttackArtifact>,
    briefing: Option<Briefing>,
}

impl Session {
    pub fn new(services: SessionServices) -> Self {
        Self {
            id: Uuid::new_v4(),
            services,
            report: None,
            attack: None,
            briefing: None,
        }
    }

    /// Current stage, derived from which artifacts exist.
    pub fn stage(&self) -> SessionStage {
        if self.briefing.is_some() {
            SessionStage::BriefingReady
        } else if self.attack.is_some() {
            SessionStage::AttackReady
        } else if self.report.is_some() {
            SessionStage::BaselineReady
        } else {
            SessionStage::Empty
        }
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn attack(&self) -> Option<&AttackArtifact> {
        self.attack.as_ref()
    }

    pub fn briefing(&self) -> Option<&Briefing> {
        self.briefing.as_ref()
    }

    /// Drop all artifacts and return to `Empty`.
    pub fn reset(&mut self) {
        self.report = None;
        self.attack = None;
        self.briefing = None;
    }

    /// Act 1: analyze a video and establish the baseline report.
    ///
    /// Starting a new baseline invalidates every existing artifact first, so
    /// a failed run leaves the session `Empty` rather than straddling two
    /// states.
    pub async fn run_baseline(&mut self, video: &Path) -> Result<&Report, SessionError> {
        self.reset();
        let report = self.services.pipeline.run(video).await?;
        tracing::info!(session = %self.id, report = %report.id, "baseline established");
        Ok(self.report.insert(report))
    }

    /// Act 2: weaponize a text seeded from the baseline transcript and judge
    /// the defense.
    ///
    /// `text` overrides the seed (the user may edit the transcript); `None`
    /// uses the report's transcript as-is. Requires a baseline report.
    pub async fn run_attack(&mut self, text: Option<&str>) -> Result<&AttackArtifact, SessionError> {
        let seed = {
            let report = self.report.as_ref().ok_or(SessionError::Precondition {
                operation: "attack generation",
                required: "a baseline report",
            })?;
            match text {
                Some(edited) => edited.to_string(),
                None => report.transcript.clone(),
            }
        };

        let weaponized = self.services.transform.weaponize(&seed).await;

        // Both risk calls complete before the escalation verdict.
        let (original, attacked) = tokio::join!(
            self.services.risk.analyze(&weaponized.source_text),
            self.services.risk.analyze(&weaponized.attack_text),
        );
        let verdict = EscalationVerdict::evaluate(original.score, attacked.score);

        tracing::info!(
            session = %self.id,
            original_risk = %verdict.original_risk,
            attack_risk = %verdict.attack_risk,
            defended = verdict.defended,
            "attack evaluated"
        );

        // Re-entering AttackReady invalidates any existing briefing.
        self.briefing = None;
        let artifact = AttackArtifact::new(
            weaponized.source_text,
            weaponized.attack_text,
            verdict.original_risk,
            verdict.attack_risk,
            verdict.defended,
        );
        Ok(self.attack.insert(artifact))
    }

    /// Act 3: profile the attacker and forecast the script's spread.
    ///
    /// Requires an attack artifact.
    pub async fn run_briefing(&mut self) -> Result<&Briefing, SessionError> {
        let attack_text = self
            .attack
            .as_ref()
            .ok_or(SessionError::Precondition {
                operation: "intelligence briefing",
                required: "an attack artifact",
            })?
            .attack_text
            .clone();

        let (profile, forecast) = tokio::join!(
            self.services.interrogator.interrogate(&attack_text),
            self.services.virality.predict(&attack_text),
        );

        let briefing = Briefing::new(
            profile.intent_analysis,
            profile.style_probe,
            forecast.virality,
            forecast.emotion,
            forecast.readability,
        );
        tracing::info!(session = %self.id, "briefing complete");
        Ok(self.briefing.insert(briefing))
    }
}
