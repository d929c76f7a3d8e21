//! Collaborator backends for the media detectors
//!
//! The concrete signal-extraction logic (face embeddings, eye-aspect-ratio,
//! audio features, anomaly models, transcription) lives behind these traits.
//! The engine only depends on the input/output contracts; the simulated
//! implementations stand in for the real extractors and are what local
//! development and tests run against.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::detector::DetectError;

/// Options for facial-consistency sampling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceOptions {
    /// Check every Nth frame
    pub sample_rate: u32,
    /// Stop after this many sampled frames
    pub max_frames: u32,
    /// Cosine-distance threshold for an embedding match
    pub match_threshold: f64,
}

impl Default for FaceOptions {
    fn default() -> Self {
        Self {
            sample_rate: 30,
            max_frames: 30,
            match_threshold: 0.4,
        }
    }
}

/// Faces found across sampled frames and how many match the first one
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FaceSample {
    pub faces_found: u32,
    pub matching_faces: u32,
}

/// Frame-embedding extraction contract
#[async_trait]
pub trait FaceBackend: Send + Sync + fmt::Debug {
    async fn sample_faces(
        &self,
        video: &Path,
        options: &FaceOptions,
    ) -> Result<FaceSample, DetectError>;
}

/// Options for gaze/blink analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazeOptions {
    /// Eye-aspect-ratio threshold below which a frame counts as a blink
    pub ear_threshold: f64,
    /// Frame rate assumed when the container does not report one
    pub assumed_fps: u32,
}

impl Default for GazeOptions {
    fn default() -> Self {
        Self {
            ear_threshold: 0.20,
            assumed_fps: 30,
        }
    }
}

/// Blink events counted over the analyzed footage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlinkSample {
    pub blink_count: u32,
    pub duration_secs: f64,
}

/// Eye-aspect-ratio blink counting contract
#[async_trait]
pub trait GazeBackend: Send + Sync + fmt::Debug {
    async fn sample_blinks(
        &self,
        video: &Path,
        options: &GazeOptions,
    ) -> Result<BlinkSample, DetectError>;
}

/// Verdict of the zero-shot anomaly model over extracted audio features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyDecision {
    /// Features fit the trained "normal speech" profile
    Inlier,
    /// Features fall outside it
    Outlier,
}

/// Audio feature extraction + anomaly model contract
#[async_trait]
pub trait AudioBackend: Send + Sync + fmt::Debug {
    async fn classify_anomaly(&self, audio: &Path) -> Result<AnomalyDecision, DetectError>;
}

/// Transcription output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcript text
    pub text: String,
    /// Detected language (ISO 639-1)
    pub language: String,
}

/// Speech-to-text contract
#[async_trait]
pub trait SpeechBackend: Send + Sync + fmt::Debug {
    async fn transcribe(&self, audio: &Path) -> Result<Transcription, DetectError>;
}

// ---------------------------------------------------------------------------
// Simulated implementations
// ---------------------------------------------------------------------------

/// Simulated face backend returning a fixed sample.
#[derive(Debug, Clone)]
pub struct SimulatedFaceBackend {
    pub sample: FaceSample,
    unavailable: bool,
}

impl Default for SimulatedFaceBackend {
    fn default() -> Self {
        // 22 of 25 sampled frames match the first face: consistency 88
        Self {
            sample: FaceSample {
                faces_found: 25,
                matching_faces: 22,
            },
            unavailable: false,
        }
    }
}

impl SimulatedFaceBackend {
    pub fn with_sample(faces_found: u32, matching_faces: u32) -> Self {
        Self {
            sample: FaceSample {
                faces_found,
                matching_faces,
            },
            unavailable: false,
        }
    }

    /// A backend whose every call fails, for isolation tests
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl FaceBackend for SimulatedFaceBackend {
    async fn sample_faces(
        &self,
        _video: &Path,
        _options: &FaceOptions,
    ) -> Result<FaceSample, DetectError> {
        if self.unavailable {
            return Err(DetectError::Unavailable("face model not loaded".to_string()));
        }
        Ok(self.sample)
    }
}

/// Simulated gaze backend returning a fixed blink sample.
#[derive(Debug, Clone)]
pub struct SimulatedGazeBackend {
    pub sample: BlinkSample,
    unavailable: bool,
}

impl Default for SimulatedGazeBackend {
    fn default() -> Self {
        // 17 blinks over a minute of footage: inside the normal human band
        Self {
            sample: BlinkSample {
                blink_count: 17,
                duration_secs: 60.0,
            },
            unavailable: false,
        }
    }
}

impl SimulatedGazeBackend {
    pub fn with_sample(blink_count: u32, duration_secs: f64) -> Self {
        Self {
            sample: BlinkSample {
                blink_count,
                duration_secs,
            },
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl GazeBackend for SimulatedGazeBackend {
    async fn sample_blinks(
        &self,
        _video: &Path,
        _options: &GazeOptions,
    ) -> Result<BlinkSample, DetectError> {
        if self.unavailable {
            return Err(DetectError::Unavailable("face mesh not loaded".to_string()));
        }
        Ok(self.sample)
    }
}

/// Simulated audio anomaly backend.
#[derive(Debug, Clone)]
pub struct SimulatedAudioBackend {
    pub decision: AnomalyDecision,
    unavailable: bool,
}

impl Default for SimulatedAudioBackend {
    fn default() -> Self {
        Self {
            decision: AnomalyDecision::Inlier,
            unavailable: false,
        }
    }
}

impl SimulatedAudioBackend {
    pub fn outlier() -> Self {
        Self {
            decision: AnomalyDecision::Outlier,
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl AudioBackend for SimulatedAudioBackend {
    async fn classify_anomaly(&self, _audio: &Path) -> Result<AnomalyDecision, DetectError> {
        if self.unavailable {
            return Err(DetectError::Extraction(
                "could not extract audio features".to_string(),
            ));
        }
        Ok(self.decision)
    }
}

/// Simulated speech backend returning a fixed transcript.
#[derive(Debug, Clone)]
pub struct SimulatedSpeechBackend {
    pub transcription: Transcription,
    unavailable: bool,
}

impl Default for SimulatedSpeechBackend {
    fn default() -> Self {
        Self {
            transcription: Transcription {
                text: "The new server migration is scheduled for this weekend. \
                       All systems will be offline temporarily."
                    .to_string(),
                language: "en".to_string(),
            },
            unavailable: false,
        }
    }
}

impl SimulatedSpeechBackend {
    pub fn with_transcript(text: &str, language: &str) -> Self {
        Self {
            transcription: Transcription {
                text: text.to_string(),
                language: language.to_string(),
            },
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl SpeechBackend for SimulatedSpeechBackend {
    async fn transcribe(&self, _audio: &Path) -> Result<Transcription, DetectError> {
        if self.unavailable {
            return Err(DetectError::Unavailable(
                "speech model not loaded".to_string(),
            ));
        }
        Ok(self.transcription.clone())
    }
}
