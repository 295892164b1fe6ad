//! Command implementations.

pub mod completions;
pub mod dispatcher;
pub mod emit;
pub mod init;
pub mod lint;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use emit::{PROFILE_FILE, ROBOTS_FILE};
