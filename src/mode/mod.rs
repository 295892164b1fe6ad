//! Deployment mode resolution.
//!
//! A deployment mode is selected exactly once per process and drives every
//! environment-dependent piece of the build profile: crawler policy,
//! analyzer reporting, and nothing else. The mode is immutable after
//! resolution.

pub mod resolve;

pub use resolve::{ModeSource, ResolvedMode};

use serde::{Deserialize, Serialize};

/// Environment variable carrying the deployment mode signal.
pub const MODE_ENV_VAR: &str = "RIGGING_MODE";

/// A deployment mode.
///
/// Exactly one mode is active per process lifetime. Unrecognized or absent
/// signals resolve to [`DeployMode::Local`] via the fallback path in
/// [`ResolvedMode::resolve`]; parsing itself is strict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeployMode {
    /// Local development.
    #[default]
    Local,
    /// Pre-production deployment.
    Staging,
    /// Production deployment.
    Production,
}

impl DeployMode {
    /// Parse a mode signal. Only the exact literals are recognized.
    pub fn parse(signal: &str) -> Option<Self> {
        match signal {
            "local" => Some(Self::Local),
            "staging" => Some(Self::Staging),
            "production" => Some(Self::Production),
            _ => None,
        }
    }

    /// The canonical string form of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Whether this mode serves a public-facing deployment.
    ///
    /// Deployed modes get a disallow-all crawler policy and bundle-analysis
    /// reporting; local development gets neither.
    pub fn is_deployed(&self) -> bool {
        matches!(self, Self::Staging | Self::Production)
    }
}

impl std::fmt::Display for DeployMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeployMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown deployment mode: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_literals() {
        assert_eq!(DeployMode::parse("local"), Some(DeployMode::Local));
        assert_eq!(DeployMode::parse("staging"), Some(DeployMode::Staging));
        assert_eq!(DeployMode::parse("production"), Some(DeployMode::Production));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(DeployMode::parse("prod"), None);
        assert_eq!(DeployMode::parse("PRODUCTION"), None);
        assert_eq!(DeployMode::parse(""), None);
        assert_eq!(DeployMode::parse(" staging"), None);
    }

    #[test]
    fn only_deployed_modes_flagged() {
        assert!(!DeployMode::Local.is_deployed());
        assert!(DeployMode::Staging.is_deployed());
        assert!(DeployMode::Production.is_deployed());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in [DeployMode::Local, DeployMode::Staging, DeployMode::Production] {
            assert_eq!(DeployMode::parse(&mode.to_string()), Some(mode));
        }
    }

    #[test]
    fn from_str_error_names_value() {
        let err = "demo".parse::<DeployMode>().unwrap_err();
        assert!(err.contains("demo"));
    }

    #[test]
    fn default_is_local() {
        assert_eq!(DeployMode::default(), DeployMode::Local);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DeployMode::Staging).unwrap(),
            "\"staging\""
        );
    }
}
