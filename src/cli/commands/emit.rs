//! Emit command implementation.
//!
//! The `rigging emit` command resolves the build profile and writes its
//! artifacts into an output directory: `robots.txt` when a crawler policy
//! applies, and `profile.json` always.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::EmitArgs;
use crate::config::load_config;
use crate::error::{Result, RiggingError};
use crate::mode::ResolvedMode;
use crate::profile::BuildProfile;
use crate::tls::TlsMaterial;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Name of the crawler policy artifact.
pub const ROBOTS_FILE: &str = "robots.txt";

/// Name of the machine-readable profile artifact.
pub const PROFILE_FILE: &str = "profile.json";

/// The emit command implementation.
pub struct EmitCommand {
    project_root: PathBuf,
    args: EmitArgs,
    config_override: Option<PathBuf>,
}

impl EmitCommand {
    /// Create a new emit command.
    pub fn new(project_root: &Path, args: EmitArgs, config_override: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config_override,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The output directory, resolved against the project root when relative.
    fn out_dir(&self) -> PathBuf {
        if self.args.out_dir.is_absolute() {
            self.args.out_dir.clone()
        } else {
            self.project_root.join(&self.args.out_dir)
        }
    }

    fn write_artifact(&self, path: &Path, content: &[u8]) -> Result<()> {
        fs::write(path, content).map_err(|e| RiggingError::EmitError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl Command for EmitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_override.as_deref()) {
            Ok(c) => c,
            Err(RiggingError::ConfigNotFound { .. }) => {
                ui.error("No configuration found. Run 'rigging init' first.");
                return Ok(CommandResult::failure(2));
            }
            Err(RiggingError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let mode = ResolvedMode::resolve(self.args.mode);
        let tls = TlsMaterial::load(&self.project_root);
        let profile = BuildProfile::resolve(mode, tls, config);

        let out_dir = self.out_dir();
        fs::create_dir_all(&out_dir).map_err(|e| RiggingError::EmitError {
            path: out_dir.clone(),
            message: e.to_string(),
        })?;

        if let Some(robots) = &profile.robots {
            let robots_path = out_dir.join(ROBOTS_FILE);
            self.write_artifact(&robots_path, robots.render().as_bytes())?;
            ui.success(&format!("Wrote {}", robots_path.display()));
        }

        let profile_path = out_dir.join(PROFILE_FILE);
        let json =
            serde_json::to_vec_pretty(&profile).map_err(|e| RiggingError::Other(e.into()))?;
        self.write_artifact(&profile_path, &json)?;
        ui.success(&format!("Wrote {}", profile_path.display()));

        Ok(CommandResult::success())
    }
}
