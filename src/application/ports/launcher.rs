//! App launch port interface

use async_trait::async_trait;
use thiserror::Error;

/// Launch errors
#[derive(Debug, Clone, Error)]
pub enum LaunchError {
    #[error("Launcher tool not found")]
    LauncherNotFound,

    #[error("Launch intent query failed: {0}")]
    QueryFailed(String),

    #[error("Failed to start application: {0}")]
    StartFailed(String),
}

/// Opaque launchable handle returned by a successful intent query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchIntent {
    id: String,
}

impl LaunchIntent {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Host-side identifier of the launchable application
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Port for querying and starting installed applications
#[async_trait]
pub trait AppLauncher: Send + Sync {
    /// Query the host for a launch intent for the package.
    ///
    /// # Returns
    /// `Ok(Some(intent))` when the package is installed and launchable,
    /// `Ok(None)` when it is not installed.
    async fn find_launch_intent(&self, package: &str) -> Result<Option<LaunchIntent>, LaunchError>;

    /// Start a previously found intent. Fire-and-forget: the launched
    /// application's lifetime is not tracked.
    async fn start(&self, intent: &LaunchIntent) -> Result<(), LaunchError>;
}

/// Blanket implementation for boxed launcher types
#[async_trait]
impl AppLauncher for Box<dyn AppLauncher> {
    async fn find_launch_intent(&self, package: &str) -> Result<Option<LaunchIntent>, LaunchError> {
        self.as_ref().find_launch_intent(package).await
    }

    async fn start(&self, intent: &LaunchIntent) -> Result<(), LaunchError> {
        self.as_ref().start(intent).await
    }
}
