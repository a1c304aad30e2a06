//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the application
//! runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run_dispatch, run_interactive, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction, RunOptions};
pub use presenter::Presenter;
