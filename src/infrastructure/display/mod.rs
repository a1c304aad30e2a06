//! Label display infrastructure adapters

mod notify_rust;
mod terminal;

pub use notify_rust::NotifyRustDisplay;
pub use terminal::TerminalDisplay;

use crate::application::ports::LabelDisplay;

/// Create a display adapter; with notifications enabled the label is
/// mirrored to the desktop notification daemon as well
pub fn create_display(notify: bool) -> Box<dyn LabelDisplay> {
    if notify {
        Box::new(NotifyRustDisplay::new())
    } else {
        Box::new(TerminalDisplay::new())
    }
}
