//! Cipher engine errors.

use super::error_code::{self, CipherscopeErrorCode};
use crate::types::CipherType;

/// Errors raised by cipher engines and the engine registry lookup.
///
/// Both variants are validation failures: they are detected before any
/// transformation or search starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid key for {cipher_type}: {reason}")]
    InvalidKey {
        cipher_type: CipherType,
        reason: String,
    },

    #[error("Unknown cipher type: {cipher_type}")]
    UnknownCipherType { cipher_type: String },
}

impl EngineError {
    pub fn invalid_key(cipher_type: CipherType, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            cipher_type,
            reason: reason.into(),
        }
    }
}

impl CipherscopeErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => error_code::INVALID_KEY,
            Self::UnknownCipherType { .. } => error_code::UNKNOWN_CIPHER_TYPE,
        }
    }
}
