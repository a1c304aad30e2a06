//! Console recognizer adapter
//!
//! A desktop host bridge for the recognition port: a recognition
//! request parks the token, and an utterance typed into the terminal
//! is delivered as a `RecognitionEvent` on the adapter's channel, the
//! same way an Android host would deliver an activity result. The
//! application never sees the difference; results always arrive
//! asynchronously through the event channel.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::ports::{RecognitionRequest, RecognizerError, SpeechRecognizer};
use crate::domain::transcript::{RecognitionEvent, RecognitionStatus, RequestToken};

/// Console-backed recognizer for desktop use
pub struct ConsoleRecognizer {
    pending: std::sync::Mutex<Option<RequestToken>>,
    events: mpsc::UnboundedSender<RecognitionEvent>,
}

impl ConsoleRecognizer {
    /// Create a recognizer and the receiver for its result events
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RecognitionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                pending: std::sync::Mutex::new(None),
                events: tx,
            },
            rx,
        )
    }

    /// Whether a recognition session is waiting for an utterance
    pub fn is_listening(&self) -> bool {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }

    /// Deliver a typed utterance as the result of the pending session.
    /// Returns false when no session is pending (the input is dropped).
    pub fn submit_utterance(&self, text: &str) -> bool {
        let token = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        match token {
            Some(token) => {
                let event = RecognitionEvent::success(token, vec![text.to_string()]);
                self.events.send(event).is_ok()
            }
            None => false,
        }
    }

    /// Cancel the pending session, delivering a cancelled event
    pub fn cancel_pending(&self) {
        let token = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        if let Some(token) = token {
            let _ = self
                .events
                .send(RecognitionEvent::failure(token, RecognitionStatus::Cancelled));
        }
    }
}

#[async_trait]
impl SpeechRecognizer for ConsoleRecognizer {
    async fn request_permission(&self) -> Result<(), RecognizerError> {
        // Desktop terminals need no runtime microphone grant
        log::debug!("microphone permission implicitly granted");
        Ok(())
    }

    async fn request_recognition(
        &self,
        request: RecognitionRequest,
    ) -> Result<(), RecognizerError> {
        log::debug!(
            "recognition session {} requested (locale {})",
            request.token,
            request.locale
        );
        // A newer request supersedes the parked token; the superseded
        // session never produces an event, which the application
        // already tolerates (stale tokens are dropped anyway).
        *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(request.token);
        Ok(())
    }
}
