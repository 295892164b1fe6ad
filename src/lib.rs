//! Rigging - Deployment-aware build configuration resolver for web front-ends.
//!
//! Rigging replaces the conditional logic scattered through front-end build
//! config files with a single resolved profile: given a deployment mode
//! (`local`, `staging`, `production`), a project config file, and local TLS
//! material, it produces the option records a build pipeline consumes:
//! crawler policy, bundle-analyzer report settings, dev-server HTTPS
//! options, and the PWA/sitemap literals.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`mode`] - Deployment mode resolution
//! - [`profile`] - The resolved build profile
//! - [`report`] - Bundle-analyzer report naming
//! - [`robots`] - Crawler policy records
//! - [`tls`] - Local HTTPS material discovery
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use rigging::mode::{DeployMode, ResolvedMode};
//! use rigging::profile::BuildProfile;
//! use rigging::tls::TlsMaterial;
//!
//! let mode = ResolvedMode::resolve_with_env(None, |_| Ok("staging".to_string()));
//! assert_eq!(mode.mode, DeployMode::Staging);
//!
//! let profile = BuildProfile::resolve(mode, TlsMaterial::SelfSigned, Default::default());
//! assert!(profile.robots.is_some());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mode;
pub mod profile;
pub mod report;
pub mod robots;
pub mod tls;
pub mod ui;

pub use error::{Result, RiggingError};
