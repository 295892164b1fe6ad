//! Project configuration loading, merging, and validation.
//!
//! # Architecture
//!
//! - [`schema`] - Struct definitions mapping to `.rigging/config.yml`
//! - [`loader`] - Discovery and loading of config files
//! - [`merger`] - Deep merge of layered configs
//! - [`validator`] - Validation of the parsed config

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_merged_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{
    BuildOptions, DevServerOptions, IconPaths, PwaOptions, RiggingConfig, SitemapOptions,
    WorkboxOptions,
};
pub use validator::{validate, Finding};
