//! Error types for Toolshed operations.
//!
//! This module defines [`ToolshedError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! Note that a tool being absent from PATH is never an error: the
//! availability cache folds "not found" (and probe-level I/O failures)
//! into an ordinary `false`. The variants here cover everything else.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Toolshed operations.
#[derive(Debug, Error)]
pub enum ToolshedError {
    /// An embedded catalog entry failed to parse.
    #[error("Failed to parse catalog entry {path}: {message}")]
    CatalogParse { path: PathBuf, message: String },

    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid configuration values (bad TTL string, unknown tool reference).
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// No registered wrapper with this name.
    #[error("Unknown wrapper: {name}")]
    UnknownWrapper { name: String },

    /// A wrapper's underlying binary could not be launched.
    #[error("Failed to launch '{command}': {source}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Toolshed operations.
pub type Result<T> = std::result::Result<T, ToolshedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parse_displays_path_and_message() {
        let err = ToolshedError::CatalogParse {
            path: PathBuf::from("tools/vcs/git.yml"),
            message: "missing field `name`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git.yml"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = ToolshedError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_validation_displays_message() {
        let err = ToolshedError::ConfigValidation {
            message: "invalid TTL '5x'".into(),
        };
        assert!(err.to_string().contains("5x"));
    }

    #[test]
    fn unknown_wrapper_displays_name() {
        let err = ToolshedError::UnknownWrapper {
            name: "dkps".into(),
        };
        assert!(err.to_string().contains("dkps"));
    }

    #[test]
    fn launch_failed_displays_command() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ToolshedError::LaunchFailed {
            command: "docker ps".into(),
            source: io,
        };
        assert!(err.to_string().contains("docker ps"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ToolshedError = io_err.into();
        assert!(matches!(err, ToolshedError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ToolshedError::ConfigValidation {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
