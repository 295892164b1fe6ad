//! Configuration file discovery and loading.
//!
//! This module handles finding and loading the project config files in the
//! correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::RiggingConfig;
use crate::error::{Result, RiggingError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the project configuration.
pub const CONFIG_DIR: &str = ".rigging";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.rigging/config.yml`)
/// 2. Local overrides (`.rigging/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .rigging/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .rigging/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: Self::existing(project_root, "config.yml"),
            project_local: Self::existing(project_root, "config.local.yml"),
        }
    }

    fn existing(project_root: &Path, name: &str) -> Option<PathBuf> {
        let path = project_root.join(CONFIG_DIR).join(name);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project
            .iter()
            .chain(self.project_local.iter())
            .collect()
    }

    /// Check if the project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

/// Find the project root by walking up from a starting directory.
///
/// Looks for a `.rigging` directory first, then a `.git` directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into [`RiggingConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RiggingConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into [`RiggingConfig`].
pub fn parse_config(content: &str, source_path: &Path) -> Result<RiggingConfig> {
    serde_yaml::from_str(content).map_err(|e| RiggingError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    serde_yaml::from_str(&content).map_err(|e| RiggingError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RiggingError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RiggingError::Io(e)
        }
    })
}

/// Load and merge all config files for a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<RiggingConfig> {
    let paths = ConfigPaths::discover(project_root);

    if !paths.has_project_config() {
        return Err(RiggingError::ConfigNotFound {
            path: project_root.join(CONFIG_DIR).join("config.yml"),
        });
    }

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| RiggingError::ConfigParseError {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<RiggingConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
