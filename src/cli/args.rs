//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::mode::DeployMode;

/// Rigging - Deployment-aware build configuration resolver.
#[derive(Debug, Parser)]
#[command(name = "rigging")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .rigging/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved build profile (default if no command specified)
    Show(ShowArgs),

    /// Write resolved artifacts (robots.txt, profile.json) to a directory
    Emit(EmitArgs),

    /// Validate the project configuration
    Lint(LintArgs),

    /// Initialize Rigging configuration for a project
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Deployment mode (overrides RIGGING_MODE)
    #[arg(long, value_enum)]
    pub mode: Option<DeployMode>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `emit` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EmitArgs {
    /// Deployment mode (overrides RIGGING_MODE)
    #[arg(long, value_enum)]
    pub mode: Option<DeployMode>,

    /// Directory to write artifacts into
    #[arg(long, value_name = "DIR", default_value = "dist", env = "RIGGING_OUT_DIR")]
    pub out_dir: PathBuf,
}

impl Default for EmitArgs {
    fn default() -> Self {
        Self {
            mode: None,
            out_dir: PathBuf::from("dist"),
        }
    }
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Output findings as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
