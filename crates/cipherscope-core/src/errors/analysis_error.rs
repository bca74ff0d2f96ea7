//! Top-level error returned across the analysis boundary.

use super::error_code::CipherscopeErrorCode;
use super::{ConfigError, EngineError, InputError, RegistryError};

/// Aggregates every subsystem error a caller of the analysis core can see.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CipherscopeErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Engine(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
