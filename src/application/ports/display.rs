//! Label display port interface

use async_trait::async_trait;
use thiserror::Error;

/// Display errors
#[derive(Debug, Clone, Error)]
pub enum DisplayError {
    #[error("Failed to update label: {0}")]
    UpdateFailed(String),
}

/// Port for the on-screen status label.
///
/// Every spoken phrase is mirrored here; the label updates even when
/// no speech engine is available.
#[async_trait]
pub trait LabelDisplay: Send + Sync {
    /// Replace the displayed label text
    async fn set_label(&self, text: &str) -> Result<(), DisplayError>;
}

/// Blanket implementation for boxed display types
#[async_trait]
impl LabelDisplay for Box<dyn LabelDisplay> {
    async fn set_label(&self, text: &str) -> Result<(), DisplayError> {
        self.as_ref().set_label(text).await
    }
}
