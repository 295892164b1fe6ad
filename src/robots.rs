//! Crawler policy records.
//!
//! Staging and production deployments carry a disallow-all policy so
//! crawlers never index a pre-release site. The record renders directly to
//! `robots.txt` text.

use serde::{Deserialize, Serialize};

/// A single robots.txt rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsRule {
    /// Crawler the rule addresses (`*` for all).
    pub user_agent: String,
    /// Path prefix the crawler must not index.
    pub disallow: String,
}

/// An ordered set of crawler rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
}

impl RobotsPolicy {
    /// Policy instructing every crawler to index nothing.
    pub fn disallow_all() -> Self {
        Self {
            rules: vec![RobotsRule {
                user_agent: "*".to_string(),
                disallow: "/".to_string(),
            }],
        }
    }

    /// Render the policy as robots.txt content.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            out.push_str("User-agent: ");
            out.push_str(&rule.user_agent);
            out.push('\n');
            out.push_str("Disallow: ");
            out.push_str(&rule.disallow);
            out.push('\n');
        }
        out
    }
}
