//! Lint command implementation.
//!
//! The `rigging lint` command validates the project configuration and
//! reports every finding.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::config::{load_config, validate};
use crate::error::{Result, RiggingError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    args: LintArgs,
    config_override: Option<PathBuf>,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, args: LintArgs, config_override: Option<PathBuf>) -> Self {
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
}

impl Command for LintCommand {
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

        let findings = validate(&config);

        if self.args.json {
            let json = serde_json::to_string_pretty(&findings)
                .map_err(|e| RiggingError::Other(e.into()))?;
            ui.message(&json);
            return if findings.is_empty() {
                Ok(CommandResult::success())
            } else {
                Ok(CommandResult::failure(1))
            };
        }

        if findings.is_empty() {
            ui.success("Configuration is valid!");
            return Ok(CommandResult::success());
        }

        for finding in &findings {
            ui.warning(&finding.to_string());
        }
        ui.error(&format!(
            "Found {} problem{}",
            findings.len(),
            if findings.len() == 1 { "" } else { "s" }
        ));

        Ok(CommandResult::failure(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_DIR;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn lint_passes_valid_config() {
        let temp = setup_project("app_name: TestApp\n");
        let mut ui = MockUI::new();

        let cmd = LintCommand::new(temp.path(), LintArgs::default(), None);
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Configuration is valid"));
    }

    #[test]
    fn lint_reports_findings_and_fails() {
        let temp = setup_project(
            r#"
pwa:
  theme_color: "red"
sitemap:
  base_url: example.com
"#,
        );
        let mut ui = MockUI::new();

        let cmd = LintCommand::new(temp.path(), LintArgs::default(), None);
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("pwa.theme_color"));
        assert!(ui.has_warning("sitemap.base_url"));
        assert!(ui.has_error("Found 2 problems"));
    }

    #[test]
    fn lint_json_outputs_findings() {
        let temp = setup_project(
            r#"
pwa:
  workbox:
    exclude: ["[unclosed"]
"#,
        );
        let mut ui = MockUI::new();

        let args = LintArgs { json: true };
        let cmd = LintCommand::new(temp.path(), args, None);
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        let json = ui.messages().join("\n");
        assert!(json.contains("pwa.workbox.exclude[0]"));
    }

    #[test]
    fn lint_fails_without_config() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let cmd = LintCommand::new(temp.path(), LintArgs::default(), None);
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }
}
