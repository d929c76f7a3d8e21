//! # Veriscope Detect
//!
//! The detector abstraction and the concrete detectors of the Veriscope
//! engine.
//!
//! ## Key Types
//!
//! - [`Detector`] — one `run(input) -> DetectorResult` contract over video,
//!   audio, or text inputs
//! - [`run_isolated`] — failure isolation: a failing detector yields its
//!   documented neutral default, never an abort
//! - [`FacialConsistencyDetector`], [`GazeBlinkDetector`],
//!   [`AudioAnomalyDetector`], [`SyncContentDetector`] — the four technical
//!   detectors (trust scale)
//! - [`ContentRiskAnalyzer`] — text risk scoring through the completion
//!   provider (risk scale)
//! - [`Interrogator`], [`ViralityPredictor`] — the briefing-stage text
//!   analyzers
//!
//! Signal extraction itself (face embeddings, blink counting, audio
//! features, transcription) lives behind the backend traits in
//! [`backend`]; the simulated implementations there are what tests and
//! local development run against.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use std::sync::Arc;
//! use veriscope_detect::{run_isolated, FacialConsistencyDetector};
//! use veriscope_detect::backend::SimulatedFaceBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let detector = FacialConsistencyDetector::new(Arc::new(SimulatedFaceBackend::default()));
//!     let result = run_isolated(&detector, Path::new("clip.mp4")).await;
//!     assert_eq!(result.score.value(), 88);
//! }
//! ```

pub mod audio;
pub mod backend;
pub mod detector;
pub mod face;
pub mod gaze;
pub mod interrogate;
pub mod parse;
pub mod risk;
pub mod translate;
pub mod virality;

pub use audio::{AudioAnomalyDetector, SyncContentDetector, MIN_TRANSCRIPT_WORDS};
pub use detector::{run_isolated, DetectError, Detector, DetectorDetail, DetectorResult};
pub use face::FacialConsistencyDetector;
pub use gaze::GazeBlinkDetector;
pub use interrogate::{InterrogationProfile, Interrogator, INTERROGATION_FALLBACK};
pub use parse::{ReplyExtractor, RiskReply, ViralityReply};
pub use risk::{
    ContentRiskAnalyzer, RiskAssessment, EMPTY_INPUT_JUSTIFICATION, PARSE_FALLBACK_JUSTIFICATION,
};
pub use translate::{translate_or_original, IdentityTranslator, Translator};
pub use virality::{flesch_reading_ease, ViralityForecast, ViralityPredictor};
