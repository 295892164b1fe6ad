//! Deployment-mode resolution.
//!
//! Resolves the active deployment mode using the priority chain:
//! 1. Explicit `--mode` flag
//! 2. `RIGGING_MODE` environment variable
//! 3. Fallback to `local`
//!
//! Resolution is total: every signal, recognized or not, maps to a defined
//! mode. An unrecognized environment value falls back rather than erroring.

use super::{DeployMode, MODE_ENV_VAR};
use serde::Serialize;

/// How the deployment mode was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSource {
    /// Explicitly set via `--mode` flag.
    Flag,
    /// Set via the `RIGGING_MODE` environment variable.
    EnvVar,
    /// Fallback to `local` (signal absent or unrecognized).
    Fallback,
}

impl std::fmt::Display for ModeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--mode flag"),
            Self::EnvVar => write!(f, "{}", MODE_ENV_VAR),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved deployment mode with a record of how it was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedMode {
    /// The active mode.
    pub mode: DeployMode,
    /// How the mode was determined.
    pub source: ModeSource,
}

impl ResolvedMode {
    /// Resolve the deployment mode from the process environment.
    ///
    /// # Arguments
    ///
    /// * `flag` - Explicit `--mode` flag value, if any
    pub fn resolve(flag: Option<DeployMode>) -> Self {
        Self::resolve_with_env(flag, |key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(flag: Option<DeployMode>, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        // 1. Explicit --mode flag
        if let Some(mode) = flag {
            return Self {
                mode,
                source: ModeSource::Flag,
            };
        }

        // 2. RIGGING_MODE environment variable
        if let Ok(signal) = env_fn(MODE_ENV_VAR) {
            if let Some(mode) = DeployMode::parse(&signal) {
                return Self {
                    mode,
                    source: ModeSource::EnvVar,
                };
            }
            tracing::warn!(
                "Unrecognized {} value {:?}, using '{}'",
                MODE_ENV_VAR,
                signal,
                DeployMode::default(),
            );
        }

        // 3. Fallback
        Self {
            mode: DeployMode::default(),
            source: ModeSource::Fallback,
        }
    }
}
