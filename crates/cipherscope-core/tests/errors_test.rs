//! Tests for the cipherscope error types and their boundary codes.

use std::collections::HashSet;

use cipherscope_core::errors::error_code;
use cipherscope_core::errors::*;
use cipherscope_core::CipherType;

/// Each validation error maps to its own stable tag.
#[test]
fn test_error_codes_are_stable() {
    let invalid = EngineError::invalid_key(CipherType::Caesar, "shift must be in 0..=25");
    assert_eq!(invalid.error_code(), error_code::INVALID_KEY);

    let unknown = EngineError::UnknownCipherType {
        cipher_type: "enigma".into(),
    };
    assert_eq!(unknown.error_code(), error_code::UNKNOWN_CIPHER_TYPE);

    let too_large = InputError::TooLarge {
        length: 200_001,
        max_length: 100_000,
    };
    assert_eq!(too_large.error_code(), error_code::INPUT_TOO_LARGE);

    let duplicate = RegistryError::DuplicateRegistration {
        cipher_type: CipherType::Hill,
    };
    assert_eq!(duplicate.error_code(), error_code::REGISTRY_CONFIGURATION);
}

/// The aggregate error delegates its tag to the wrapped error.
#[test]
fn test_analysis_error_delegates_code() {
    let err: AnalysisError = EngineError::UnknownCipherType {
        cipher_type: "enigma".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::UNKNOWN_CIPHER_TYPE);
    assert_eq!(err.to_string(), "Unknown cipher type: enigma");

    let err: AnalysisError = ConfigError::ValidationFailed {
        field: "search.restarts".into(),
        message: "must be greater than 0".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
    assert_eq!(
        err.to_string(),
        "Invalid config value search.restarts: must be greater than 0"
    );
}

/// Tagged messages are `[CODE] message`.
#[test]
fn test_tagged_message_format() {
    let err = EngineError::invalid_key(CipherType::Caesar, "shift 30 is outside 0..=25");
    assert_eq!(
        err.tagged_message(),
        "[INVALID_KEY] Invalid key for caesar: shift 30 is outside 0..=25"
    );
}

/// All tag constants are distinct.
#[test]
fn test_error_code_constants_unique() {
    let codes = [
        error_code::INVALID_KEY,
        error_code::UNKNOWN_CIPHER_TYPE,
        error_code::INPUT_TOO_LARGE,
        error_code::INVALID_OPTION,
        error_code::REGISTRY_CONFIGURATION,
        error_code::CONFIG_ERROR,
    ];
    let unique: HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), codes.len());
}
