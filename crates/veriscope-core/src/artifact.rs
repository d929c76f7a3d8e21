//! Session artifacts: the three-act dependency chain
//!
//! `Report` (baseline) → `AttackArtifact` (red-team rewrite) → `Briefing`
//! (intelligence). An artifact cannot exist without its predecessor, every
//! write is a wholesale replace, and re-running an earlier act invalidates
//! everything downstream. The session owner in `veriscope-runtime` enforces
//! the chain; these types just hold the data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fusion::FusionOutcome;
use crate::score::{RiskScore, TrustScore};

/// Act-1 artifact: the baseline analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Unique ID
    pub id: Uuid,
    /// Fused technical trust score
    pub technical_score: TrustScore,
    /// Dispersion confidence, clamped to [0,100]
    pub confidence: f64,
    /// Content risk of the transcript
    pub content_risk: RiskScore,
    /// Transcript extracted from the asset's audio
    pub transcript: String,
    /// Analyst justification for the content risk score
    pub risk_justification: String,
    /// When the baseline run completed
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Assemble a report from a completed fusion pass and risk analysis.
    pub fn new(
        fusion: FusionOutcome,
        content_risk: RiskScore,
        transcript: String,
        risk_justification: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            technical_score: fusion.technical_score,
            confidence: fusion.display_confidence(),
            content_risk,
            transcript,
            risk_justification,
            created_at: Utc::now(),
        }
    }
}

/// Act-2 artifact: the red-team rewrite and its defense verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackArtifact {
    /// Unique ID
    pub id: Uuid,
    /// The text the attack started from (transcript, possibly user-edited)
    pub source_text: String,
    /// The attacker-crafted rewrite, stored verbatim
    pub attack_text: String,
    /// Risk of the source text
    pub original_risk: RiskScore,
    /// Risk of the attacked text
    pub attack_risk: RiskScore,
    /// Whether the risk jump cleared the escalation margin
    pub defended: bool,
    /// When the attack run completed
    pub created_at: DateTime<Utc>,
}

impl AttackArtifact {
    pub fn new(
        source_text: String,
        attack_text: String,
        original_risk: RiskScore,
        attack_risk: RiskScore,
        defended: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_text,
            attack_text,
            original_risk,
            attack_risk,
            defended,
            created_at: Utc::now(),
        }
    }
}

/// Act-3 artifact: the intelligence briefing on the attacker's script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Briefing {
    /// Unique ID
    pub id: Uuid,
    /// Predicted attacker intent and methodology
    pub intent_analysis: String,
    /// Style-probe rephrasing used as a generated-text fluency tell
    pub style_probe: String,
    /// Predicted spread potential, 0-100
    pub virality_score: u8,
    /// Emotional intensity of the script, 0-100
    pub emotion_score: u8,
    /// Reading ease of the script, 0-100
    pub readability_score: u8,
    /// When the briefing completed
    pub created_at: DateTime<Utc>,
}

impl Briefing {
    pub fn new(
        intent_analysis: String,
        style_probe: String,
        virality_score: u8,
        emotion_score: u8,
        readability_score: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            intent_analysis,
            style_probe,
            virality_score: virality_score.min(100),
            emotion_score: emotion_score.min(100),
            readability_score: readability_score.min(100),
            created_at: Utc::now(),
        }
    }
}
