//! Score fusion: four technical detector scores into one trust/confidence pair
//!
//! The fused technical score is the floor of the plain mean (integer
//! truncation, not rounding). Confidence is derived from score dispersion:
//! each score is normalized to [0,1] and the population standard deviation σ
//! of the four values sets `confidence = (1 − σ) × 100`. Four identical
//! scores give confidence 100; disagreement drives it down.

use serde::{Deserialize, Serialize};

use crate::score::TrustScore;

/// The four technical detector scores consumed by fusion.
///
/// These are already-defaulted values: a failed detector has been replaced
/// by its neutral default upstream, so fusion itself has no failure mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TechnicalScores {
    /// Facial consistency across sampled frames
    pub facial: TrustScore,
    /// Audio/content sync
    pub sync: TrustScore,
    /// Zero-shot audio anomaly
    pub anomaly: TrustScore,
    /// Gaze and blink pattern
    pub gaze: TrustScore,
}

impl TechnicalScores {
    fn as_array(&self) -> [TrustScore; 4] {
        [self.facial, self.sync, self.anomaly, self.gaze]
    }
}

/// Result of fusing the technical scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FusionOutcome {
    /// Floor-mean of the four technical scores
    pub technical_score: TrustScore,
    /// Raw dispersion confidence; can dip slightly below 0 on pathological
    /// inputs, use [`FusionOutcome::display_confidence`] for presentation
    pub confidence: f64,
}

impl FusionOutcome {
    /// Confidence clamped to [0,100] for display. This is a derived metric,
    /// not a probability.
    pub fn display_confidence(&self) -> f64 {
        self.confidence.clamp(0.0, 100.0)
    }
}

/// Fuse the four technical scores into a single trust/confidence pair.
pub fn fuse(scores: &TechnicalScores) -> FusionOutcome {
    let values = scores.as_array();

    // Integer truncation of the mean, not rounding.
    let sum: u32 = values.iter().map(|s| u32::from(s.value())).sum();
    let technical_score = TrustScore::new(i64::from(sum / 4));

    let normalized: Vec<f64> = values.iter().map(|s| s.normalized()).collect();
    let mean = normalized.iter().sum::<f64>() / normalized.len() as f64;
    let variance = normalized
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / normalized.len() as f64;
    let sigma = variance.sqrt();

    FusionOutcome {
        technical_score,
        confidence: (1.0 - sigma) * 100.0,
    }
}
