//! Audio cue port interface

use async_trait::async_trait;
use thiserror::Error;

/// Audio cue errors
#[derive(Debug, Clone, Error)]
pub enum AudioCueError {
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("Cue playback failed: {0}")]
    PlaybackFailed(String),
}

/// Cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCueType {
    /// A listening session was requested
    ListeningStart,
    /// A transcript matched a launch command
    CommandAccepted,
}

/// Port for short audio feedback tones
#[async_trait]
pub trait AudioCue: Send + Sync {
    /// Play a cue. Playback failures never interrupt the flow.
    async fn play(&self, cue_type: AudioCueType) -> Result<(), AudioCueError>;
}

/// Blanket implementation for boxed cue types
#[async_trait]
impl AudioCue for Box<dyn AudioCue> {
    async fn play(&self, cue_type: AudioCueType) -> Result<(), AudioCueError> {
        self.as_ref().play(cue_type).await
    }
}
