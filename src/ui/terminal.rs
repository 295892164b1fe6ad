//! Terminal UI implementation.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, RiggingTheme, UserInterface};

/// Terminal UI writing to stdout, errors to stderr.
pub struct TerminalUI {
    stdout: Term,
    stderr: Term,
    theme: RiggingTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            RiggingTheme::new()
        } else {
            RiggingTheme::plain()
        };

        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.stdout, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stderr, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for the current process.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
