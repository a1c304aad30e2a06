//! Terminal label adapter

use async_trait::async_trait;
use colored::Colorize;

use crate::application::ports::{DisplayError, LabelDisplay};

/// Renders the status label as a colored line on stderr
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LabelDisplay for TerminalDisplay {
    async fn set_label(&self, text: &str) -> Result<(), DisplayError> {
        eprintln!("{} {}", "»".magenta(), text.bold());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_label_succeeds() {
        let display = TerminalDisplay::new();
        assert!(display.set_label("Dokun ve konuş").await.is_ok());
    }
}
