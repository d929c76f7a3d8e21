//! Temporary audio artifact: scoped acquisition, guaranteed single release
//!
//! The audio track extracted from an uploaded video is owned exclusively by
//! the pipeline invocation that created it. [`AudioArtifact::release`]
//! deletes the file at most once; `Drop` backs it up so an early return on
//! any failure path cannot leak the file. Calling `release` twice is a
//! no-op, never a double delete.

use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use veriscope_detect::DetectError;

/// Owned handle to the extracted audio file.
#[derive(Debug)]
pub struct AudioArtifact {
    path: PathBuf,
    released: bool,
}

impl AudioArtifact {
    /// Take ownership of an extracted audio file.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    /// Where the audio lives. Valid until [`release`](Self::release).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the underlying file. Idempotent.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove audio artifact");
        } else {
            tracing::debug!(path = %self.path.display(), "audio artifact released");
        }
    }
}

impl Drop for AudioArtifact {
    fn drop(&mut self) {
        self.release();
    }
}

/// Video → temporary audio extraction contract.
#[async_trait]
pub trait AudioExtractor: Send + Sync + fmt::Debug {
    async fn extract(&self, video: &Path) -> Result<AudioArtifact, DetectError>;
}

/// Simulated extractor: writes a placeholder WAV into the temp directory.
///
/// Stands in for the real demux/transcode step; silent or audio-less input
/// still produces a file, matching the contract that downstream detectors
/// always receive a path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAudioExtractor;

#[async_trait]
impl AudioExtractor for SimulatedAudioExtractor {
    async fn extract(&self, video: &Path) -> Result<AudioArtifact, DetectError> {
        let path = std::env::temp_dir().join(format!("veriscope-audio-{}.wav", Uuid::new_v4()));

        // Minimal RIFF/WAVE header followed by a silent data chunk.
        let mut bytes = Vec::with_capacity(64);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&36u32.to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 0, 1, 0]);
        bytes.extend_from_slice(&16000u32.to_le_bytes());
        bytes.extend_from_slice(&32000u32.to_le_bytes());
        bytes.extend_from_slice(&[2, 0, 16, 0]);
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&0u32.to_le_bytes());

        tokio::fs::write(&path, &bytes).await.map_err(|e| {
            DetectError::Extraction(format!(
                "could not write audio for {}: {e}",
                video.display()
            ))
        })?;

        Ok(AudioArtifact::new(path))
    }
}
