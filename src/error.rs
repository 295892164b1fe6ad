//! Error types for Rigging operations.
//!
//! This module defines [`RiggingError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RiggingError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RiggingError::Other`) for unexpected errors
//! - Mode and TLS resolution are total and never error; failures exist only
//!   at the config and filesystem-output boundaries

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Rigging operations.
#[derive(Debug, Error)]
pub enum RiggingError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Failed to write an emitted artifact.
    #[error("Failed to write {path}: {message}")]
    EmitError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Rigging operations.
pub type Result<T> = std::result::Result<T, RiggingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = RiggingError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = RiggingError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = RiggingError::ConfigValidationError {
            message: "sitemap.paths[1] must start with '/'".into(),
        };
        assert!(err.to_string().contains("sitemap.paths[1]"));
    }

    #[test]
    fn emit_error_displays_path_and_message() {
        let err = RiggingError::EmitError {
            path: PathBuf::from("dist/robots.txt"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("robots.txt"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RiggingError = io_err.into();
        assert!(matches!(err, RiggingError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RiggingError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
