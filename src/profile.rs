//! The resolved build profile.
//!
//! A [`BuildProfile`] is the complete, immutable output of resolution: the
//! deployment mode plus every option record derived from it, ready for the
//! external build tools. Resolution is total: every mode, config, and TLS
//! state maps to a defined profile with no fault path.

use serde::Serialize;

use crate::config::RiggingConfig;
use crate::mode::{DeployMode, ResolvedMode};
use crate::report::{AnalyzerSettings, ReportNaming};
use crate::robots::RobotsPolicy;
use crate::tls::TlsMaterial;

/// Analyzer configuration for a deployed build: one settings record per
/// bundler pass, legacy first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerConfig {
    pub passes: Vec<AnalyzerSettings>,
}

impl AnalyzerConfig {
    /// Build the two-pass analyzer configuration.
    fn two_pass() -> Self {
        let mut naming = ReportNaming::new();
        Self {
            passes: vec![
                AnalyzerSettings::for_pass(&mut naming),
                AnalyzerSettings::for_pass(&mut naming),
            ],
        }
    }
}

/// Dev server options with resolved HTTPS material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerProfile {
    /// Open the browser when the server starts.
    pub open: bool,
    /// HTTPS material, provided from disk or self-signed.
    pub https: TlsMaterial,
}

/// The complete resolved build profile.
#[derive(Debug, Clone, Serialize)]
pub struct BuildProfile {
    /// The active deployment mode and how it was determined.
    pub mode: ResolvedMode,

    /// Crawler policy; present only for deployed modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<RobotsPolicy>,

    /// Bundle-analysis configuration; present only for deployed modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<AnalyzerConfig>,

    /// Dev server options with resolved HTTPS material.
    pub dev_server: DevServerProfile,

    /// The validated project config carried through unchanged.
    pub app: RiggingConfig,
}

impl BuildProfile {
    /// Resolve the build profile from its three inputs.
    ///
    /// Deployed modes (staging, production) get a disallow-all crawler
    /// policy and two-pass analyzer reporting; local and fallback modes get
    /// neither. The TLS material and project config are carried through
    /// unchanged.
    pub fn resolve(mode: ResolvedMode, tls: TlsMaterial, config: RiggingConfig) -> Self {
        let deployed = mode.mode.is_deployed();

        Self {
            mode,
            robots: deployed.then(RobotsPolicy::disallow_all),
            analyzer: deployed.then(AnalyzerConfig::two_pass),
            dev_server: DevServerProfile {
                open: config.dev_server.open,
                https: tls,
            },
            app: config,
        }
    }

    /// The active deployment mode.
    pub fn deploy_mode(&self) -> DeployMode {
        self.mode.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ModeSource;

    fn resolved(mode: DeployMode) -> ResolvedMode {
        ResolvedMode {
            mode,
            source: ModeSource::Flag,
        }
    }

    fn resolve(mode: DeployMode) -> BuildProfile {
        BuildProfile::resolve(resolved(mode), TlsMaterial::SelfSigned, RiggingConfig::default())
    }

    #[test]
    fn local_mode_gets_no_robots_policy_or_analyzer() {
        let profile = resolve(DeployMode::Local);
        assert!(profile.robots.is_none());
        assert!(profile.analyzer.is_none());
    }

    #[test]
    fn staging_mode_gets_robots_policy_and_analyzer() {
        let profile = resolve(DeployMode::Staging);
        assert_eq!(profile.robots, Some(RobotsPolicy::disallow_all()));
        assert!(profile.analyzer.is_some());
    }

    #[test]
    fn production_mode_gets_robots_policy_and_analyzer() {
        let profile = resolve(DeployMode::Production);
        assert_eq!(profile.robots, Some(RobotsPolicy::disallow_all()));
        assert!(profile.analyzer.is_some());
    }

    #[test]
    fn analyzer_passes_are_legacy_then_modern() {
        let profile = resolve(DeployMode::Production);
        let analyzer = profile.analyzer.unwrap();

        assert_eq!(analyzer.passes.len(), 2);
        assert_eq!(analyzer.passes[0].report_filename, "report-legacy.html");
        assert_eq!(analyzer.passes[1].report_filename, "report-modern.html");
    }

    #[test]
    fn tls_material_carried_through() {
        let provided = TlsMaterial::Provided {
            key: vec![1, 2, 3],
            cert: vec![4, 5, 6],
        };
        let profile = BuildProfile::resolve(
            resolved(DeployMode::Local),
            provided.clone(),
            RiggingConfig::default(),
        );

        assert_eq!(profile.dev_server.https, provided);
    }

    #[test]
    fn dev_server_open_comes_from_config() {
        let mut config = RiggingConfig::default();
        config.dev_server.open = false;

        let profile =
            BuildProfile::resolve(resolved(DeployMode::Local), TlsMaterial::SelfSigned, config);

        assert!(!profile.dev_server.open);
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve(DeployMode::Staging);
        let b = resolve(DeployMode::Staging);

        assert_eq!(a.robots, b.robots);
        assert_eq!(a.analyzer, b.analyzer);
        assert_eq!(a.dev_server, b.dev_server);
    }

    #[test]
    fn profile_serializes_without_absent_sections() {
        let json = serde_json::to_string(&resolve(DeployMode::Local)).unwrap();
        assert!(!json.contains("robots"));
        assert!(!json.contains("analyzer"));
        assert!(json.contains("\"mode\":\"local\""));
    }

    #[test]
    fn profile_serializes_deployed_sections() {
        let json = serde_json::to_string(&resolve(DeployMode::Staging)).unwrap();
        assert!(json.contains("report-legacy.html"));
        assert!(json.contains("report-modern.html"));
        assert!(json.contains("\"disallow\":\"/\""));
    }
}
