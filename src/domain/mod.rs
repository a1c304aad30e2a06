//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod transcript;

// Re-export common types
pub use command::{CommandTable, Interpretation, LaunchTarget};
pub use config::AppConfig;
pub use error::*;
pub use session::{EngineLifecycle, EngineState, ListeningSession, VoiceSettings};
pub use transcript::{RecognitionEvent, RecognitionStatus, RequestToken};
