//! Command-line interface.
//!
//! Argument definitions live in [`args`], command implementations and the
//! dispatcher in [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, EmitArgs, InitArgs, LintArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
