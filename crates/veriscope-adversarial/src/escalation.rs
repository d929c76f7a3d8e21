//! Escalation evaluation: did the defense catch the attack?
//!
//! The defense counts as successful only when the attacked text's risk
//! exceeds the original's by more than the fixed margin: a jump large
//! enough to be attributable to the attack rather than noise. The rule is a
//! strict inequality on the margin, not on raw magnitude, so an
//! already-high-risk original cannot pass just because the attack's absolute
//! risk is high.

use serde::{Deserialize, Serialize};

use veriscope_core::RiskScore;

/// Risk-jump margin the attack must exceed to count as detected.
pub const ESCALATION_MARGIN: u8 = 20;

/// `true` when the risk jump from original to attack clears the margin.
pub fn evaluate_escalation(original_risk: RiskScore, attack_risk: RiskScore) -> bool {
    i64::from(attack_risk.value()) > i64::from(original_risk.value()) + i64::from(ESCALATION_MARGIN)
}

/// The full escalation comparison, kept alongside the artifact it judged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EscalationVerdict {
    pub original_risk: RiskScore,
    pub attack_risk: RiskScore,
    /// Whether the content filter caught the manipulation
    pub defended: bool,
}

impl EscalationVerdict {
    /// Compare both risk scores under the margin rule.
    pub fn evaluate(original_risk: RiskScore, attack_risk: RiskScore) -> Self {
        Self {
            original_risk,
            attack_risk,
            defended: evaluate_escalation(original_risk, attack_risk),
        }
    }

    /// The signed risk jump the attack produced.
    pub fn risk_jump(&self) -> i64 {
        i64::from(self.attack_risk.value()) - i64::from(self.original_risk.value())
    }
}
