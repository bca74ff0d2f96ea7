//! Request input errors.

use super::error_code::{self, CipherscopeErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Ciphertext length {length} exceeds the maximum of {max_length}")]
    TooLarge { length: usize, max_length: usize },

    #[error("Invalid option {option}: {message}")]
    InvalidOption { option: String, message: String },
}

impl CipherscopeErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => error_code::INPUT_TOO_LARGE,
            Self::InvalidOption { .. } => error_code::INVALID_OPTION,
        }
    }
}
