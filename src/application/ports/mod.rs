//! Port interfaces (traits) for host platform services
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_cue;
pub mod config;
pub mod display;
pub mod launcher;
pub mod recognizer;
pub mod synthesizer;

// Re-export common types
pub use audio_cue::{AudioCue, AudioCueError, AudioCueType};
pub use config::ConfigStore;
pub use display::{DisplayError, LabelDisplay};
pub use launcher::{AppLauncher, LaunchError, LaunchIntent};
pub use recognizer::{LanguageModel, RecognitionRequest, RecognizerError, SpeechRecognizer};
pub use synthesizer::{SpeechSynthesizer, SynthesizerError};
