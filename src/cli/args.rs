//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::session::VoiceSettings;

/// voicelaunch - touch-to-talk voice app launcher
#[derive(Parser, Debug)]
#[command(name = "voicelaunch")]
#[command(version)]
#[command(about = "Touch-to-talk voice app launcher")]
#[command(long_about = None)]
pub struct Cli {
    /// Recognition and speech locale (e.g. tr-TR)
    #[arg(short = 'l', long, value_name = "LOCALE", env = "VOICELAUNCH_LOCALE")]
    pub locale: Option<String>,

    /// Speech engine pitch multiplier
    #[arg(long, value_name = "PITCH")]
    pub pitch: Option<f32>,

    /// Speech engine rate multiplier
    #[arg(long, value_name = "RATE")]
    pub rate: Option<f32>,

    /// Delay before the speech engine is initialized, in milliseconds
    #[arg(long, value_name = "MS")]
    pub engine_init_delay_ms: Option<u64>,

    /// Disable spoken output (label only)
    #[arg(long)]
    pub no_speech: bool,

    /// Play audio cues on listening events
    #[arg(short = 'c', long, conflicts_with = "no_cue")]
    pub cue: bool,

    /// Disable audio cues (overrides the config file)
    #[arg(long)]
    pub no_cue: bool,

    /// Mirror the label to desktop notifications
    #[arg(short = 'n', long, conflicts_with = "no_notify")]
    pub notify: bool,

    /// Disable the desktop notification mirror (overrides the config file)
    #[arg(long)]
    pub no_notify: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Audio cue override from the flags, if either was given
    pub fn cue_override(&self) -> Option<bool> {
        if self.no_cue {
            Some(false)
        } else if self.cue {
            Some(true)
        } else {
            None
        }
    }

    /// Notification override from the flags, if either was given
    pub fn notify_override(&self) -> Option<bool> {
        if self.no_notify {
            Some(false)
        } else if self.notify {
            Some(true)
        } else {
            None
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpret a transcript once and run the matching action
    Dispatch {
        /// The transcript text, e.g. "YouTube'u aç"
        text: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Resolved options for the interactive and dispatch runners
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub settings: VoiceSettings,
    pub engine_init_delay: std::time::Duration,
    pub speech: bool,
    pub cue: bool,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "locale",
    "pitch",
    "rate",
    "engine_init_delay_ms",
    "speech",
    "cue",
    "notify",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
