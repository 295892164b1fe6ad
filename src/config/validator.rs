//! Project configuration validation.
//!
//! Catches the mistakes the original inline build config would only surface
//! deep inside a bundler run: exclude patterns that are not valid regular
//! expressions, sitemap routes that are not absolute, malformed colors, and
//! sitemap base URLs that are not http(s).

use crate::config::schema::RiggingConfig;
use regex::Regex;
use serde::Serialize;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Dotted path of the offending field.
    pub field: String,
    /// Actionable description of the problem.
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a project config, returning all findings.
///
/// An empty result means the config is valid.
pub fn validate(config: &RiggingConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (index, pattern) in config.pwa.workbox.exclude.iter().enumerate() {
        if let Err(e) = Regex::new(pattern) {
            findings.push(Finding {
                field: format!("pwa.workbox.exclude[{}]", index),
                message: format!("not a valid regular expression: {}", e),
            });
        }
    }

    check_color(&mut findings, "pwa.theme_color", config.pwa.theme_color.as_deref());
    check_color(
        &mut findings,
        "pwa.ms_tile_color",
        config.pwa.ms_tile_color.as_deref(),
    );

    if let Some(sitemap) = &config.sitemap {
        if !sitemap.base_url.starts_with("http://") && !sitemap.base_url.starts_with("https://") {
            findings.push(Finding {
                field: "sitemap.base_url".to_string(),
                message: format!("must be an http(s) URL, got {:?}", sitemap.base_url),
            });
        }

        for (index, path) in sitemap.paths.iter().enumerate() {
            if !path.starts_with('/') {
                findings.push(Finding {
                    field: format!("sitemap.paths[{}]", index),
                    message: format!("route must start with '/', got {:?}", path),
                });
            }
        }
    }

    findings
}

fn check_color(findings: &mut Vec<Finding>, field: &str, value: Option<&str>) {
    let Some(color) = value else { return };

    let hex = color.strip_prefix('#').unwrap_or("");
    let valid_len = matches!(hex.len(), 3 | 4 | 6 | 8);
    if !valid_len || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        findings.push(Finding {
            field: field.to_string(),
            message: format!("must be a hex color like #cb0000, got {:?}", color),
        });
    }
}
