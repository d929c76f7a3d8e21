//! # Veriscope Adversarial
//!
//! The red-team half of the engine: crafting the attack and judging whether
//! the defense caught it.
//!
//! ## Key Types
//!
//! - [`AdversarialTransform`] — rewrites a neutral text into an
//!   urgency/panic version via the completion provider
//! - [`EscalationVerdict`] — compares pre- and post-attack risk under the
//!   fixed margin rule
//!
//! ## Quick Start
//!
//! ```rust
//! use veriscope_adversarial::{evaluate_escalation, ESCALATION_MARGIN};
//! use veriscope_core::RiskScore;
//!
//! // A jump of 21 clears the margin of 20; a jump of exactly 20 does not.
//! assert!(evaluate_escalation(RiskScore::new(30), RiskScore::new(51)));
//! assert!(!evaluate_escalation(RiskScore::new(30), RiskScore::new(50)));
//! assert_eq!(ESCALATION_MARGIN, 20);
//! ```

pub mod escalation;
pub mod transform;

pub use escalation::{evaluate_escalation, EscalationVerdict, ESCALATION_MARGIN};
pub use transform::{AdversarialTransform, WeaponizedText, FALLBACK_SEED, MIN_SEED_WORDS};
