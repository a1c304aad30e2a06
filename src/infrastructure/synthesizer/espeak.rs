//! espeak-ng synthesizer adapter
//!
//! Shells out to the espeak-ng speech engine. Flush-queue semantics:
//! a new speak request kills the previous espeak process before
//! spawning the next one, so at most one utterance is audible.

use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::process::{Child, Command};

use crate::application::ports::{SpeechSynthesizer, SynthesizerError};
use crate::domain::session::VoiceSettings;

/// espeak-ng pitch is 0-99 with 50 as the neutral value
const ESPEAK_BASE_PITCH: f32 = 50.0;
/// espeak-ng speed is words per minute with 175 as the default
const ESPEAK_BASE_RATE: f32 = 175.0;

/// Text-to-speech via the espeak-ng command line tool
pub struct EspeakSynthesizer {
    /// Arguments derived from the configured voice settings
    voice_args: Mutex<Vec<String>>,
    /// Currently playing utterance, killed on the next speak call
    current: Mutex<Option<Child>>,
}

impl EspeakSynthesizer {
    /// Create a new espeak-ng synthesizer
    pub fn new() -> Self {
        Self {
            voice_args: Mutex::new(voice_args(&VoiceSettings::default())),
            current: Mutex::new(None),
        }
    }
}

impl Default for EspeakSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map voice settings onto espeak-ng flags.
///
/// The locale's language part selects the voice ("tr-TR" -> "tr");
/// pitch and rate multipliers scale espeak's neutral values.
fn voice_args(settings: &VoiceSettings) -> Vec<String> {
    let voice = settings
        .locale
        .split(['-', '_'])
        .next()
        .unwrap_or("tr")
        .to_lowercase();
    let pitch = (settings.pitch * ESPEAK_BASE_PITCH).round().clamp(0.0, 99.0) as u32;
    let rate = (settings.rate * ESPEAK_BASE_RATE).round().max(80.0) as u32;

    vec![
        "-v".to_string(),
        voice,
        "-p".to_string(),
        pitch.to_string(),
        "-s".to_string(),
        rate.to_string(),
    ]
}

fn map_spawn_error(e: std::io::Error) -> SynthesizerError {
    if e.kind() == std::io::ErrorKind::NotFound {
        SynthesizerError::EngineNotFound
    } else {
        SynthesizerError::SpeakFailed(e.to_string())
    }
}

#[async_trait]
impl SpeechSynthesizer for EspeakSynthesizer {
    async fn configure(&self, settings: &VoiceSettings) -> Result<(), SynthesizerError> {
        // Probe the engine so a missing binary fails initialization
        // instead of every later speak call
        let output = Command::new("espeak-ng")
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SynthesizerError::EngineNotFound
                } else {
                    SynthesizerError::InitFailed(e.to_string())
                }
            })?;

        if !output.success() {
            return Err(SynthesizerError::InitFailed(format!(
                "espeak-ng probe exited with status: {}",
                output
            )));
        }

        *self.voice_args.lock().unwrap_or_else(|e| e.into_inner()) = voice_args(settings);
        Ok(())
    }

    async fn speak(&self, text: &str) -> Result<(), SynthesizerError> {
        let args = self
            .voice_args
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());

        // Flush: pre-empt whatever is still playing
        if let Some(mut child) = current.take() {
            let _ = child.start_kill();
        }

        let child = Command::new("espeak-ng")
            .args(&args)
            .arg("--")
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(map_spawn_error)?;

        *current = Some(child);
        Ok(())
    }
}
