//! Desktop-notification label adapter
//!
//! Prints the label like the terminal adapter and mirrors it to the
//! desktop notification daemon.

use async_trait::async_trait;
use colored::Colorize;

use crate::application::ports::{DisplayError, LabelDisplay};

/// Label display that mirrors updates to desktop notifications
pub struct NotifyRustDisplay {
    app_name: String,
}

impl NotifyRustDisplay {
    pub fn new() -> Self {
        Self {
            app_name: "voicelaunch".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LabelDisplay for NotifyRustDisplay {
    async fn set_label(&self, text: &str) -> Result<(), DisplayError> {
        eprintln!("{} {}", "»".magenta(), text.bold());

        let app_name = self.app_name.clone();
        let body = text.to_owned();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&app_name)
                .body(&body)
                .icon("audio-input-microphone")
                .show()
                .map_err(|e| DisplayError::UpdateFailed(e.to_string()))?;
            Ok(())
        })
        .await
        .map_err(|e| DisplayError::UpdateFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_custom_app_name() {
        let display = NotifyRustDisplay::with_app_name("TestApp");
        assert_eq!(display.app_name, "TestApp");
    }

    #[test]
    fn display_default_app_name() {
        let display = NotifyRustDisplay::default();
        assert_eq!(display.app_name, "voicelaunch");
    }
}
