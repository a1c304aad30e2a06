//! Listening session and speech engine lifecycle entities

use std::fmt;
use thiserror::Error;

use super::transcript::RequestToken;

/// Tracks the most recently issued recognition request.
///
/// Tokens are generated fresh per request from a monotonic counter.
/// A new request supersedes any pending one: only the latest token is
/// current, so a late result from an overlapped session is dropped by
/// the caller instead of being misattributed.
#[derive(Debug, Default)]
pub struct ListeningSession {
    counter: u64,
    current: Option<RequestToken>,
}

impl ListeningSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for a new recognition request
    pub fn issue(&mut self) -> RequestToken {
        self.counter += 1;
        let token = RequestToken::new(self.counter);
        self.current = Some(token);
        token
    }

    /// Whether a request is outstanding
    pub fn has_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the token belongs to the latest issued request
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token)
    }

    /// Consume the pending request if the token is current.
    /// Returns false for stale or unknown tokens.
    pub fn complete(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Voice parameters applied to the speech engine at initialization
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    pub locale: String,
    pub pitch: f32,
    pub rate: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            locale: "tr-TR".to_string(),
            pitch: 0.9,
            rate: 1.0,
        }
    }
}

/// Speech engine lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

impl EngineState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid engine state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid engine transition: cannot {action} while {current_state}")]
pub struct InvalidEngineTransition {
    pub current_state: EngineState,
    pub action: String,
}

/// Speech engine lifecycle entity.
///
/// State machine:
///   UNINITIALIZED -> INITIALIZING (begin_init)
///   INITIALIZING -> READY (mark_ready)
///   INITIALIZING -> FAILED (mark_failed)
///
/// FAILED and UNINITIALIZED are behaviorally identical to callers:
/// speaking only checks for READY.
#[derive(Debug, Default)]
pub struct EngineLifecycle {
    state: EngineState,
}

impl EngineLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether spoken output is available
    pub fn is_ready(&self) -> bool {
        self.state == EngineState::Ready
    }

    /// Transition from UNINITIALIZED to INITIALIZING.
    /// Initialization happens at most once per process.
    pub fn begin_init(&mut self) -> Result<(), InvalidEngineTransition> {
        if self.state != EngineState::Uninitialized {
            return Err(InvalidEngineTransition {
                current_state: self.state,
                action: "begin initialization".to_string(),
            });
        }
        self.state = EngineState::Initializing;
        Ok(())
    }

    /// Transition from INITIALIZING to READY
    pub fn mark_ready(&mut self) -> Result<(), InvalidEngineTransition> {
        if self.state != EngineState::Initializing {
            return Err(InvalidEngineTransition {
                current_state: self.state,
                action: "mark ready".to_string(),
            });
        }
        self.state = EngineState::Ready;
        Ok(())
    }

    /// Transition from INITIALIZING to FAILED
    pub fn mark_failed(&mut self) -> Result<(), InvalidEngineTransition> {
        if self.state != EngineState::Initializing {
            return Err(InvalidEngineTransition {
                current_state: self.state,
                action: "mark failed".to_string(),
            });
        }
        self.state = EngineState::Failed;
        Ok(())
    }
}
