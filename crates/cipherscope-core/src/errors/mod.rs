//! Error handling for cipherscope.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod input_error;
pub mod registry_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::CipherscopeErrorCode;
pub use input_error::InputError;
pub use registry_error::RegistryError;
