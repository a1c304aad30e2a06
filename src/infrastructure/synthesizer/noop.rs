//! No-op synthesizer adapter for label-only mode

use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesizerError};
use crate::domain::session::VoiceSettings;

/// Synthesizer that accepts every request and produces no sound.
/// Used with `--no-speech`: the engine reports ready, speak calls
/// succeed silently, and the label remains the only output.
pub struct NoOpSynthesizer;

impl NoOpSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for NoOpSynthesizer {
    async fn configure(&self, _settings: &VoiceSettings) -> Result<(), SynthesizerError> {
        Ok(())
    }

    async fn speak(&self, _text: &str) -> Result<(), SynthesizerError> {
        Ok(())
    }
}
