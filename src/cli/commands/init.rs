//! Init command implementation.
//!
//! The `rigging init` command writes a starter configuration into
//! `.rigging/config.yml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::CONFIG_DIR;
use crate::error::{Result, RiggingError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const CONFIG_TEMPLATE: &str = r##"# Rigging configuration
#
# Deployment mode comes from `--mode` or the RIGGING_MODE environment
# variable (local | staging | production). Local overrides go in
# .rigging/config.local.yml, which should be gitignored.

app_name: "{app_name}"

pwa:
  theme_color: "#cb0000"
  ms_tile_color: "#cb0000"
  workbox:
    skip_waiting: true
    exclude:
      - ^_redirects$

# sitemap:
#   base_url: https://www.example.com
#   paths: ["/"]

dev_server:
  open: true

build:
  inline_asset_limit: 10
  lint_autofix: true
"##;

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn config_path(&self) -> PathBuf {
        self.project_root.join(CONFIG_DIR).join("config.yml")
    }

    fn render_template(&self) -> String {
        let app_name = self
            .project_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("MyApp");

        CONFIG_TEMPLATE.replace("{app_name}", app_name)
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config_path = self.config_path();

        if config_path.exists() && !self.args.force {
            ui.error("Configuration already exists. Use --force to overwrite.");
            return Ok(CommandResult::failure(1));
        }

        fs::create_dir_all(self.project_root.join(CONFIG_DIR)).map_err(RiggingError::Io)?;
        fs::write(&config_path, self.render_template()).map_err(RiggingError::Io)?;

        ui.success("Created .rigging/config.yml");
        ui.message("Edit it to describe your app, then run 'rigging show'.");

        Ok(CommandResult::success())
    }
}
