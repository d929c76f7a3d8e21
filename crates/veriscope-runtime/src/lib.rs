//! # Veriscope Runtime
//!
//! Tokio-based session orchestration for the Veriscope engine: the baseline
//! analysis pipeline and the three-act state machine.
//!
//! ## Key Types
//!
//! - [`Session`] — owns the `Report → AttackArtifact → Briefing` chain and
//!   gates which act is legal when
//! - [`BaselinePipeline`] — concurrent detector execution, score fusion,
//!   transcript risk analysis
//! - [`AudioArtifact`] — scoped temp-audio handle, released exactly once
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use std::sync::Arc;
//! use veriscope_llm::MockProvider;
//! use veriscope_runtime::{Session, SessionServices, SessionStage};
//!
//! #[tokio::main]
//! async fn main() {
//!     let services = SessionServices::simulated(Arc::new(MockProvider::smart()));
//!     let mut session = Session::new(services);
//!
//!     let report = session.run_baseline(Path::new("clip.mp4")).await.unwrap();
//!     assert!(report.technical_score.value() > 0);
//!
//!     let attack = session.run_attack(None).await.unwrap();
//!     assert!(attack.defended);
//!
//!     session.run_briefing().await.unwrap();
//!     assert_eq!(session.stage(), SessionStage::BriefingReady);
//! }
//! ```

pub mod audio;
pub mod pipeline;
pub mod session;

pub use audio::{AudioArtifact, AudioExtractor, SimulatedAudioExtractor};
pub use pipeline::BaselinePipeline;
pub use session::{Session, SessionError, SessionServices, SessionStage};
