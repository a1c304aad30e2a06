//! Speech synthesis port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::VoiceSettings;

/// Synthesis errors
#[derive(Debug, Clone, Error)]
pub enum SynthesizerError {
    #[error("Speech engine not found")]
    EngineNotFound,

    #[error("Engine initialization failed: {0}")]
    InitFailed(String),

    #[error("Speak request failed: {0}")]
    SpeakFailed(String),
}

/// Port for the text-to-speech engine
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Apply voice settings (locale, pitch, rate).
    ///
    /// Called once during engine initialization.
    async fn configure(&self, settings: &VoiceSettings) -> Result<(), SynthesizerError>;

    /// Speak text with flush-queue semantics: any utterance currently
    /// queued or playing is discarded before the new one starts, so at
    /// most one utterance is audible at a time.
    async fn speak(&self, text: &str) -> Result<(), SynthesizerError>;
}

/// Blanket implementation for boxed synthesizer types
#[async_trait]
impl SpeechSynthesizer for Box<dyn SpeechSynthesizer> {
    async fn configure(&self, settings: &VoiceSettings) -> Result<(), SynthesizerError> {
        self.as_ref().configure(settings).await
    }

    async fn speak(&self, text: &str) -> Result<(), SynthesizerError> {
        self.as_ref().speak(text).await
    }
}
