//! CipherscopeErrorCode trait for the service boundary.

/// Stable error-kind tags surfaced to callers.
/// Every error enum implements this so the boundary can report a tag that
/// does not change when the message wording does.
pub trait CipherscopeErrorCode {
    /// Returns the error-kind tag (e.g., "INVALID_KEY").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn tagged_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_KEY: &str = "INVALID_KEY";
pub const UNKNOWN_CIPHER_TYPE: &str = "UNKNOWN_CIPHER_TYPE";
pub const INPUT_TOO_LARGE: &str = "INPUT_TOO_LARGE";
pub const INVALID_OPTION: &str = "INVALID_OPTION";
pub const REGISTRY_CONFIGURATION: &str = "REGISTRY_CONFIGURATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
