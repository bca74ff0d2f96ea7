//! # cipherscope-core
//!
//! Foundation crate for the cipherscope cryptanalysis engine.
//! Defines the cipher taxonomy, errors, config, cancellation, tracing setup,
//! and shared constants. `cipherscope-analysis` builds on top of it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::CipherscopeConfig;
pub use errors::{AnalysisError, CipherscopeErrorCode};
pub use types::{CipherFamily, CipherType, Language};
