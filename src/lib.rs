//! VoiceLaunch - touch-to-talk voice app launcher
//!
//! This crate provides the core functionality for a touch-triggered voice
//! session: listen for an utterance, match it against a fixed command table,
//! and either launch the requested application or speak a fallback message.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Command table, session tracking, engine lifecycle, and config
//! - **Application**: The assistant use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (espeak-ng, desktop launcher, etc.)
//! - **CLI**: Command-line interface, argument parsing, and the interactive loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
