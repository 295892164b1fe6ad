//! Integration tests for profile resolution through the library API.

use std::fs;

use rigging::config::RiggingConfig;
use rigging::mode::{DeployMode, ModeSource, ResolvedMode, MODE_ENV_VAR};
use rigging::profile::BuildProfile;
use rigging::robots::RobotsPolicy;
use rigging::tls::TlsMaterial;
use tempfile::TempDir;

fn no_env(_: &str) -> Result<String, std::env::VarError> {
    Err(std::env::VarError::NotPresent)
}

fn resolve(mode: DeployMode) -> BuildProfile {
    let resolved = ResolvedMode::resolve_with_env(Some(mode), no_env);
    BuildProfile::resolve(resolved, TlsMaterial::SelfSigned, RiggingConfig::default())
}

#[test]
fn local_profile_has_no_deployed_sections() {
    let profile = resolve(DeployMode::Local);
    assert!(profile.robots.is_none());
    assert!(profile.analyzer.is_none());
}

#[test]
fn deployed_profiles_disallow_all_crawlers() {
    for mode in [DeployMode::Staging, DeployMode::Production] {
        let profile = resolve(mode);
        assert_eq!(profile.robots, Some(RobotsPolicy::disallow_all()));
        assert_eq!(
            profile.robots.unwrap().render(),
            "User-agent: *\nDisallow: /\n"
        );
    }
}

#[test]
fn analyzer_passes_run_legacy_then_modern() {
    let profile = resolve(DeployMode::Staging);
    let analyzer = profile.analyzer.expect("staging enables the analyzer");

    let names: Vec<&str> = analyzer
        .passes
        .iter()
        .map(|p| p.report_filename.as_str())
        .collect();
    assert_eq!(names, ["report-legacy.html", "report-modern.html"]);
}

#[test]
fn unrecognized_env_signal_behaves_like_local() {
    let env_fn = |key: &str| {
        if key == MODE_ENV_VAR {
            Ok("qa".to_string())
        } else {
            Err(std::env::VarError::NotPresent)
        }
    };
    let resolved = ResolvedMode::resolve_with_env(None, env_fn);
    assert_eq!(resolved.mode, DeployMode::Local);
    assert_eq!(resolved.source, ModeSource::Fallback);

    let profile = BuildProfile::resolve(resolved, TlsMaterial::SelfSigned, RiggingConfig::default());
    assert!(profile.robots.is_none());
    assert!(profile.analyzer.is_none());
}

#[test]
fn tls_pair_bytes_are_carried_exactly() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("key.pem"), b"----key bytes----").unwrap();
    fs::write(temp.path().join("cert.pem"), b"----cert bytes----").unwrap();

    let material = TlsMaterial::load(temp.path());
    let resolved = ResolvedMode::resolve_with_env(Some(DeployMode::Local), no_env);
    let profile = BuildProfile::resolve(resolved, material, RiggingConfig::default());

    assert_eq!(
        profile.dev_server.https,
        TlsMaterial::Provided {
            key: b"----key bytes----".to_vec(),
            cert: b"----cert bytes----".to_vec(),
        }
    );
}

#[test]
fn missing_tls_pair_self_signs() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("key.pem"), b"only the key").unwrap();

    assert_eq!(TlsMaterial::load(temp.path()), TlsMaterial::SelfSigned);
}

#[test]
fn resolution_is_idempotent_across_calls() {
    let env_fn = |key: &str| {
        if key == MODE_ENV_VAR {
            Ok("staging".to_string())
        } else {
            Err(std::env::VarError::NotPresent)
        }
    };

    let first = ResolvedMode::resolve_with_env(None, env_fn);
    let second = ResolvedMode::resolve_with_env(None, env_fn);
    assert_eq!(first, second);

    let a = BuildProfile::resolve(first, TlsMaterial::SelfSigned, RiggingConfig::default());
    let b = BuildProfile::resolve(second, TlsMaterial::SelfSigned, RiggingConfig::default());
    assert_eq!(a.robots, b.robots);
    assert_eq!(a.analyzer, b.analyzer);
}

#[test]
fn profile_json_shape_matches_machine_consumers() {
    let profile = resolve(DeployMode::Production);
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&profile).unwrap())
        .unwrap();

    assert_eq!(json["mode"]["mode"], "production");
    assert_eq!(json["mode"]["source"], "flag");
    assert_eq!(json["robots"]["rules"][0]["user_agent"], "*");
    assert_eq!(json["analyzer"]["passes"][1]["report_filename"], "report-modern.html");
    assert_eq!(json["dev_server"]["https"]["source"], "self-signed");
}

#[test]
fn local_profile_json_omits_deployed_sections() {
    let profile = resolve(DeployMode::Local);
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&profile).unwrap()).unwrap();

    assert!(json.get("robots").is_none());
    assert!(json.get("analyzer").is_none());
}
