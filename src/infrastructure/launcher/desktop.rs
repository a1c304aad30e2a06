//! XDG desktop-entry launcher adapter
//!
//! The launch-intent query resolves `applications/{package}.desktop`
//! across the XDG data directories (reverse-DNS desktop-file ids map
//! directly onto the package identifiers in the command table).
//! Starting an intent spawns `gtk-launch` and does not wait for it.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AppLauncher, LaunchError, LaunchIntent};

/// Launcher backed by XDG desktop entries and gtk-launch
pub struct DesktopLauncher {
    data_dirs: Vec<PathBuf>,
}

impl DesktopLauncher {
    /// Create a launcher over the standard XDG data directories
    pub fn new() -> Self {
        let mut data_dirs = Vec::new();

        if let Some(home) = dirs::data_dir() {
            data_dirs.push(home);
        }

        match std::env::var("XDG_DATA_DIRS") {
            Ok(value) if !value.is_empty() => {
                data_dirs.extend(value.split(':').map(PathBuf::from));
            }
            _ => {
                data_dirs.push(PathBuf::from("/usr/local/share"));
                data_dirs.push(PathBuf::from("/usr/share"));
            }
        }

        Self { data_dirs }
    }

    /// Create a launcher over explicit data directories
    pub fn with_data_dirs(data_dirs: Vec<PathBuf>) -> Self {
        Self { data_dirs }
    }
}

impl Default for DesktopLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppLauncher for DesktopLauncher {
    async fn find_launch_intent(&self, package: &str) -> Result<Option<LaunchIntent>, LaunchError> {
        let file_name = format!("{package}.desktop");

        for dir in &self.data_dirs {
            let candidate = dir.join("applications").join(&file_name);
            match tokio::fs::try_exists(&candidate).await {
                Ok(true) => {
                    log::debug!("launch intent for {package}: {}", candidate.display());
                    return Ok(Some(LaunchIntent::new(package)));
                }
                Ok(false) => {}
                Err(e) => {
                    return Err(LaunchError::QueryFailed(format!(
                        "{}: {e}",
                        candidate.display()
                    )))
                }
            }
        }

        Ok(None)
    }

    async fn start(&self, intent: &LaunchIntent) -> Result<(), LaunchError> {
        Command::new("gtk-launch")
            .arg(intent.id())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    LaunchError::LauncherNotFound
                } else {
                    LaunchError::StartFailed(e.to_string())
                }
            })?;

        Ok(())
    }
}
