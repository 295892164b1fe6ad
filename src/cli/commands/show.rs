//! Show command implementation.
//!
//! The `rigging show` command resolves the build profile and prints it,
//! either as a human-readable summary or as JSON/YAML for tooling.

use std::path::{Path, PathBuf};

use crate::cli::args::ShowArgs;
use crate::config::load_config;
use crate::error::{Result, RiggingError};
use crate::mode::ResolvedMode;
use crate::profile::BuildProfile;
use crate::tls::TlsMaterial;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    project_root: PathBuf,
    args: ShowArgs,
    config_override: Option<PathBuf>,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(project_root: &Path, args: ShowArgs, config_override: Option<PathBuf>) -> Self {
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

    /// Render the human-readable summary.
    fn render_human(&self, profile: &BuildProfile, ui: &mut dyn UserInterface) {
        ui.message(&format!(
            "Mode: {} ({})",
            profile.mode.mode, profile.mode.source
        ));

        match &profile.robots {
            Some(_) => ui.message("Robots: disallow all crawlers"),
            None => ui.message("Robots: allow all crawlers"),
        }

        match &profile.analyzer {
            Some(analyzer) => {
                ui.message(&format!("Analyzer: enabled ({} passes)", analyzer.passes.len()));
                if ui.output_mode().shows_detail() {
                    for pass in &analyzer.passes {
                        ui.message(&format!("  - {}", pass.report_filename));
                    }
                }
            }
            None => ui.message("Analyzer: disabled"),
        }

        ui.message(&format!("HTTPS: {}", profile.dev_server.https.summary()));

        if ui.output_mode().shows_detail() {
            ui.message(&format!("Dev server open: {}", profile.dev_server.open));
            if let Some(name) = &profile.app.app_name {
                ui.message(&format!("App: {}", name));
            }
        }
    }
}

impl Command for ShowCommand {
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

        if self.args.json {
            let json = serde_json::to_string_pretty(&profile)
                .map_err(|e| RiggingError::Other(e.into()))?;
            ui.message(&json);
        } else if self.args.yaml {
            let yaml =
                serde_yaml::to_string(&profile).map_err(|e| RiggingError::Other(e.into()))?;
            ui.message(&yaml);
        } else {
            self.render_human(&profile, ui);
        }

        Ok(CommandResult::success())
    }
}
