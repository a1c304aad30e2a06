//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with host services (espeak-ng, gtk-launch, the
//! desktop notification daemon, the audio device, the XDG config
//! directory).

pub mod audio_cue;
pub mod config;
pub mod display;
pub mod launcher;
pub mod recognizer;
pub mod synthesizer;

// Re-export adapters
pub use audio_cue::{create_audio_cue, NoOpAudioCue, RodioAudioCue};
pub use config::XdgConfigStore;
pub use display::{create_display, NotifyRustDisplay, TerminalDisplay};
pub use launcher::DesktopLauncher;
pub use recognizer::ConsoleRecognizer;
pub use synthesizer::{create_synthesizer, EspeakSynthesizer, NoOpSynthesizer};
