//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use rigging::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.success("Profile resolved");
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, RiggingTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including per-field detail.
    Verbose,
    /// Show the resolved output and status messages.
    #[default]
    Normal,
    /// Show only the resolved output.
    Quiet,
}

impl OutputMode {
    /// Whether status messages (success, warnings) are shown.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether per-field detail is shown.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
