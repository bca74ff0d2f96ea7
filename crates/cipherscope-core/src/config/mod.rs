//! Configuration system for cipherscope.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.
//! Per-request options overlay the resolved config last.

pub mod analysis_config;
pub mod cipherscope_config;
pub mod search_config;

pub use analysis_config::{AnalysisConfig, NormalizationMode};
pub use cipherscope_config::{CipherscopeConfig, CliOverrides, RequestOverrides};
pub use search_config::SearchConfig;
