//! Configuration errors.

use super::error_code::{self, CipherscopeErrorCode};

/// Loading or validating a `CipherscopeConfig` failed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}")]
    FileNotFound { path: String },

    #[error("Invalid TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    /// `field` is the dotted TOML path, e.g. `search.timeout_seconds`.
    #[error("Invalid config value {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl CipherscopeErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
