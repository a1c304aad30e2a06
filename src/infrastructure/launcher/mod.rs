//! App launcher infrastructure adapters

mod desktop;

pub use desktop::DesktopLauncher;
