//! Configuration schema definitions for Rigging.
//!
//! This module contains the struct definitions that map to the YAML
//! project config (`.rigging/config.yml`). These are the inert option
//! literals the resolved profile carries through to the external tools:
//! PWA manifest generation, sitemap generation, the dev server, and the
//! bundler tweaks. Rigging validates and forwards them; it never acts on
//! them itself.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration structure for `.rigging/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiggingConfig {
    /// Application name (for display and the PWA manifest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// PWA manifest options
    pub pwa: PwaOptions,

    /// Sitemap options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<SitemapOptions>,

    /// Dev server options
    pub dev_server: DevServerOptions,

    /// Bundler tweaks
    pub build: BuildOptions,
}

/// PWA manifest options forwarded to the manifest/service-worker generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PwaOptions {
    /// Manifest display name (falls back to `app_name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Theme color, hex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,

    /// Windows tile color, hex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ms_tile_color: Option<String>,

    /// `apple-mobile-web-app-capable` meta value (e.g. "yes")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_mobile_web_app_capable: Option<String>,

    /// `apple-mobile-web-app-status-bar-style` meta value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_mobile_web_app_status_bar_style: Option<String>,

    /// Icon asset paths, relative to the public root
    pub icon_paths: IconPaths,

    /// Workbox service-worker options
    pub workbox: WorkboxOptions,
}

/// Icon asset paths for the PWA manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconPaths {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon32: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon16: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ms_tile_image: Option<String>,
}

/// Workbox service-worker generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkboxOptions {
    /// Activate a new service worker without waiting for old clients
    #[serde(skip_serializing_if = "is_false")]
    pub skip_waiting: bool,

    /// Extra scripts imported into the generated service worker
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub import_scripts: Vec<String>,

    /// Regular expressions for assets excluded from precaching
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Default for WorkboxOptions {
    fn default() -> Self {
        Self {
            skip_waiting: true,
            import_scripts: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

/// Sitemap generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapOptions {
    /// Canonical site URL the routes hang off
    pub base_url: String,

    /// Route paths to list, absolute
    pub paths: Vec<String>,

    /// Skip the gzipped sitemap variant
    #[serde(skip_serializing_if = "is_false")]
    pub skip_gzip: bool,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            paths: vec!["/".to_string()],
            skip_gzip: true,
        }
    }
}

/// Dev server options (HTTPS material is resolved separately at startup).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerOptions {
    /// Open the browser when the server starts
    pub open: bool,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self { open: true }
    }
}

/// Bundler tweaks forwarded into the build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Include the template runtime compiler in the bundle
    #[serde(skip_serializing_if = "is_false")]
    pub runtime_compiler: bool,

    /// Emit bundler performance hints
    #[serde(skip_serializing_if = "is_false")]
    pub performance_hints: bool,

    /// Prefetch lazily-loaded chunks
    #[serde(skip_serializing_if = "is_false")]
    pub prefetch: bool,

    /// Inline assets up to this many bytes as data URLs
    #[serde(
        default = "default_inline_asset_limit",
        skip_serializing_if = "is_default_inline_asset_limit"
    )]
    pub inline_asset_limit: u32,

    /// Auto-fix lint findings during the build
    pub lint_autofix: bool,

    /// Module resolution aliases
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub aliases: HashMap<String, String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            runtime_compiler: false,
            performance_hints: false,
            prefetch: false,
            inline_asset_limit: default_inline_asset_limit(),
            lint_autofix: true,
            aliases: HashMap::new(),
        }
    }
}

fn default_inline_asset_limit() -> u32 {
    10
}

fn is_default_inline_asset_limit(v: &u32) -> bool {
    *v == default_inline_asset_limit()
}

fn is_false(v: &bool) -> bool {
    !v
}
