//! Startup-time registry configuration errors.

use super::error_code::{self, CipherscopeErrorCode};
use crate::types::CipherType;

/// Errors raised while wiring engines together at startup.
/// None of these can occur while a request is being served.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Cipher type {cipher_type} registered twice")]
    DuplicateRegistration { cipher_type: CipherType },

    #[error("Cipher type {cipher_type} is required but not registered")]
    MissingRegistration { cipher_type: CipherType },

    #[error("Failed to build the recovery worker pool: {message}")]
    WorkerPool { message: String },
}

impl CipherscopeErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_CONFIGURATION
    }
}
