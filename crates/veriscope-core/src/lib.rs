//! # Veriscope Core
//!
//! Core types for the Veriscope authenticity engine:
//! - [`TrustScore`] / [`RiskScore`] — the two non-interchangeable score families
//! - [`fuse`] — floor-mean fusion of technical scores plus dispersion confidence
//! - [`Report`], [`AttackArtifact`], [`Briefing`] — the three session artifacts
//!
//! ## Score families
//!
//! Technical detectors speak *trust* (higher = more authentic); the content
//! analyzer speaks *risk* (higher = more manipulative). The two scales are
//! deliberately separate types: fusion only accepts trust scores, escalation
//! only compares risk scores, and there is no arithmetic between them.
//!
//! ## Quick Start
//!
//! ```rust
//! use veriscope_core::{fuse, TechnicalScores, TrustScore};
//!
//! let scores = TechnicalScores {
//!     facial: TrustScore::new(88),
//!     sync: TrustScore::new(95),
//!     anomaly: TrustScore::new(92),
//!     gaze: TrustScore::new(85),
//! };
//!
//! let outcome = fuse(&scores);
//! assert_eq!(outcome.technical_score.value(), 90);
//! assert!(outcome.confidence > 90.0);
//! ```

pub mod artifact;
pub mod fusion;
pub mod score;

pub use artifact::{AttackArtifact, Briefing, Report};
pub use fusion::{fuse, FusionOutcome, TechnicalScores};
pub use score::{RiskScore, TrustScore};
