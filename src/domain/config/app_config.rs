//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::session::VoiceSettings;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recognition and speech locale, e.g. "tr-TR"
    pub locale: Option<String>,
    /// Speech engine pitch
    pub pitch: Option<f32>,
    /// Speech engine rate
    pub rate: Option<f32>,
    /// Delay before the speech engine is initialized, in milliseconds
    pub engine_init_delay_ms: Option<u64>,
    /// Whether spoken output is enabled at all
    pub speech: Option<bool>,
    /// Whether to play audio cues on listening events
    pub cue: Option<bool>,
    /// Whether to mirror the label to desktop notifications
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            locale: Some("tr-TR".to_string()),
            pitch: Some(0.9),
            rate: Some(1.0),
            engine_init_delay_ms: Some(1000),
            speech: Some(true),
            cue: Some(false),
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            locale: other.locale.or(self.locale),
            pitch: other.pitch.or(self.pitch),
            rate: other.rate.or(self.rate),
            engine_init_delay_ms: other.engine_init_delay_ms.or(self.engine_init_delay_ms),
            speech: other.speech.or(self.speech),
            cue: other.cue.or(self.cue),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get locale, or "tr-TR" if not set
    pub fn locale_or_default(&self) -> &str {
        self.locale.as_deref().unwrap_or("tr-TR")
    }

    /// Get pitch, or 0.9 if not set
    pub fn pitch_or_default(&self) -> f32 {
        self.pitch.unwrap_or(0.9)
    }

    /// Get rate, or 1.0 if not set
    pub fn rate_or_default(&self) -> f32 {
        self.rate.unwrap_or(1.0)
    }

    /// Get engine init delay in milliseconds, or 1000 if not set
    pub fn engine_init_delay_ms_or_default(&self) -> u64 {
        self.engine_init_delay_ms.unwrap_or(1000)
    }

    /// Get speech setting, or true if not set
    pub fn speech_or_default(&self) -> bool {
        self.speech.unwrap_or(true)
    }

    /// Get cue setting, or false if not set
    pub fn cue_or_default(&self) -> bool {
        self.cue.unwrap_or(false)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Build the voice settings applied at engine initialization
    pub fn voice_settings(&self) -> VoiceSettings {
        VoiceSettings {
            locale: self.locale_or_default().to_string(),
            pitch: self.pitch_or_default(),
            rate: self.rate_or_default(),
        }
    }
}
