//! Speech recognition port interface
//!
//! Recognition is a fire-and-forget host service: requesting a session
//! returns immediately, and the eventual result arrives through a
//! separate host-delivered `RecognitionEvent` (see
//! `VoiceAssistant::on_recognition_result`), or never.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcript::RequestToken;

/// Recognition errors
#[derive(Debug, Clone, Error)]
pub enum RecognizerError {
    #[error("Microphone permission denied: {0}")]
    PermissionDenied(String),

    #[error("Recognition host unreachable: {0}")]
    HostUnreachable(String),

    #[error("Recognition request failed: {0}")]
    RequestFailed(String),
}

/// Language model hint passed to the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageModel {
    /// Free-form dictation, the only model this flow uses
    #[default]
    FreeForm,
}

/// Parameters of one recognition session request
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    /// Correlation token for the eventual result
    pub token: RequestToken,
    /// Recognition locale, e.g. "tr-TR"
    pub locale: String,
    /// Language model hint
    pub language_model: LanguageModel,
}

/// Port for the host speech recognizer
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Request microphone-capture permission.
    ///
    /// Called once at startup. Denial is not handled beyond the
    /// implicit effect that later recognition requests fail.
    async fn request_permission(&self) -> Result<(), RecognizerError>;

    /// Request a single recognition session.
    ///
    /// Returns as soon as the request is issued; no result is
    /// consumed synchronously.
    async fn request_recognition(&self, request: RecognitionRequest)
        -> Result<(), RecognizerError>;
}

/// Blanket implementation for boxed recognizer types
#[async_trait]
impl SpeechRecognizer for Box<dyn SpeechRecognizer> {
    async fn request_permission(&self) -> Result<(), RecognizerError> {
        self.as_ref().request_permission().await
    }

    async fn request_recognition(
        &self,
        request: RecognitionRequest,
    ) -> Result<(), RecognizerError> {
        self.as_ref().request_recognition(request).await
    }
}

/// Blanket implementation for shared recognizer types. The host
/// adapter side of a recognizer often stays with the event source
/// while the assistant holds its own handle.
#[async_trait]
impl<T: SpeechRecognizer + ?Sized> SpeechRecognizer for std::sync::Arc<T> {
    async fn request_permission(&self) -> Result<(), RecognizerError> {
        self.as_ref().request_permission().await
    }

    async fn request_recognition(
        &self,
        request: RecognitionRequest,
    ) -> Result<(), RecognizerError> {
        self.as_ref().request_recognition(request).await
    }
}
