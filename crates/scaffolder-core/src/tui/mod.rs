//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
mod terminal;

#[cfg(feature = "tui")]
pub use prompts::{report_error, run, ClackUi};
#[cfg(feature = "tui")]
pub use terminal::{install_terminal_guards, restore_cursor};
