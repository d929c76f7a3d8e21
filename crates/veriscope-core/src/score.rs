//! The two score families: technical trust and content risk
//!
//! Both are integers clamped to [0,100], but they point in opposite
//! directions: trust goes up as a video looks more authentic, risk goes up
//! as a text reads more manipulative. Keeping them as distinct types stops
//! anyone averaging a trust score into a risk comparison (or vice versa).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Technical trust score. Higher = more authentic.
///
/// Produced by the non-textual detectors (facial consistency, gaze/blink,
/// audio anomaly, sync) and by the fusion engine. Construction clamps to
/// [0,100], so an out-of-range backend value can never leak downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustScore(u8);

impl TrustScore {
    /// Create a trust score, clamping the input to [0,100].
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// The raw integer value in [0,100].
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The score normalized to [0.0, 1.0], as used by the fusion engine.
    pub fn normalized(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Content risk score. Higher = more manipulative/dangerous.
///
/// Produced by the content-risk analyzer over text. Never fused with trust
/// scores; the only comparison defined over risk scores is the escalation
/// margin rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Create a risk score, clamping the input to [0,100].
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// The raw integer value in [0,100].
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_score_clamps() {
        assert_eq!(TrustScore::new(-5).value(), 0);
        assert_eq!(TrustScore::new(0).value(), 0);
        assert_eq!(TrustScore::new(100).value(), 100);
        assert_eq!(TrustScore::new(250).value(), 100);
    }

    #[test]
    fn test_risk_score_clamps() {
        assert_eq!(RiskScore::new(-1).value(), 0);
        assert_eq!(RiskScore::new(150).value(), 100);
        assert_eq!(RiskScore::new(50).value(), 50);
    }

    #[test]
    fn test_normalized() {
        assert!((TrustScore::new(85).normalized() - 0.85).abs() < f64::EPSILON);
        assert_eq!(TrustScore::new(0).normalized(), 0.0);
        assert_eq!(TrustScore::new(100).normalized(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(TrustScore::new(88).to_string(), "88/100");
        assert_eq!(RiskScore::new(12).to_string(), "12/100");
    }
}
