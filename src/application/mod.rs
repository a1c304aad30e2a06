//! Application layer - Use cases and port interfaces
//!
//! Contains the core interaction flow and trait definitions
//! for host platform interactions.

pub mod assistant;
pub mod ports;

// Re-export use case
pub use assistant::VoiceAssistant;
