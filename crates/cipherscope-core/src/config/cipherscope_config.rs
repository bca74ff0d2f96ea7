//! Top-level cipherscope configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, NormalizationMode, SearchConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::types::language::parse_language_list;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CIPHERSCOPE_*`)
/// 3. Project config (`cipherscope.toml` in project root)
/// 4. User config (`~/.cipherscope/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CipherscopeConfig {
    pub analysis: AnalysisConfig,
    pub search: SearchConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_ciphertext_length: Option<usize>,
    pub max_parallel_engines: Option<usize>,
    pub normalization: Option<NormalizationMode>,
    pub timeout_seconds: Option<f64>,
    pub seed: Option<u64>,
}

/// Options a single request may carry. Overlaid on the resolved config
/// for that request only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOverrides {
    pub min_hypothesis_confidence: Option<f64>,
    pub max_candidates: Option<usize>,
    pub timeout_seconds: Option<f64>,
}

impl CipherscopeConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Copy of this config with per-request options applied and validated.
    pub fn with_request_overrides(&self, overrides: &RequestOverrides) -> Result<Self, ConfigError> {
        let mut config = self.clone();
        if let Some(v) = overrides.min_hypothesis_confidence {
            config.analysis.min_hypothesis_confidence = Some(v);
        }
        if let Some(v) = overrides.max_candidates {
            config.analysis.max_candidates = Some(v);
        }
        if let Some(v) = overrides.timeout_seconds {
            config.search.timeout_seconds = Some(v);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CipherscopeConfig) -> Result<(), ConfigError> {
        let analysis = &config.analysis;
        let search = &config.search;

        if analysis.effective_max_ciphertext_length() == 0 {
            return Err(invalid("analysis.max_ciphertext_length", "must be greater than 0"));
        }
        check_unit_interval(
            "analysis.min_hypothesis_confidence",
            analysis.effective_min_hypothesis_confidence(),
        )?;
        check_unit_interval(
            "analysis.early_exit_confidence",
            analysis.effective_early_exit_confidence(),
        )?;
        if analysis.effective_max_candidates() == 0 {
            return Err(invalid("analysis.max_candidates", "must be greater than 0"));
        }
        if analysis.effective_min_repeat_length() < 2 {
            return Err(invalid("analysis.min_repeat_length", "must be at least 2"));
        }
        if analysis.effective_max_repeat_length() < analysis.effective_min_repeat_length() {
            return Err(invalid(
                "analysis.max_repeat_length",
                "must not be smaller than analysis.min_repeat_length",
            ));
        }
        if analysis.effective_max_key_length() < 2 {
            return Err(invalid("analysis.max_key_length", "must be at least 2"));
        }
        if analysis.effective_max_parallel_engines() == 0 {
            return Err(invalid("analysis.max_parallel_engines", "must be greater than 0"));
        }

        let timeout = search.effective_timeout_seconds();
        if !timeout.is_finite() || timeout <= 0.0 {
            return Err(invalid("search.timeout_seconds", "must be a positive number"));
        }
        if search.effective_restarts() == 0 {
            return Err(invalid("search.restarts", "must be greater than 0"));
        }
        if search.effective_iterations_per_restart() == 0 {
            return Err(invalid("search.iterations_per_restart", "must be greater than 0"));
        }
        if search.effective_max_transposition_width() < 2 {
            return Err(invalid("search.max_transposition_width", "must be at least 2"));
        }
        if analysis.effective_languages().is_empty() {
            return Err(invalid("analysis.languages", "must name at least one language"));
        }

        if search.effective_max_rails() < 2 {
            return Err(invalid("search.max_rails", "must be at least 2"));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.cipherscope/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".cipherscope").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CipherscopeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CipherscopeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut CipherscopeConfig, other: &CipherscopeConfig) {
        macro_rules! take {
            ($section:ident . $field:ident) => {
                if other.$section.$field.is_some() {
                    base.$section.$field = other.$section.$field;
                }
            };
        }

        // Analysis
        take!(analysis.max_ciphertext_length);
        take!(analysis.min_hypothesis_confidence);
        take!(analysis.max_candidates);
        take!(analysis.min_repeat_length);
        take!(analysis.max_repeat_length);
        take!(analysis.max_repeats);
        take!(analysis.max_key_length);
        take!(analysis.repeat_index_threshold);
        take!(analysis.normalization);
        take!(analysis.max_parallel_engines);
        take!(analysis.early_exit_confidence);
        take!(analysis.filter_candidates);
        if other.analysis.languages.is_some() {
            base.analysis.languages = other.analysis.languages.clone();
        }

        // Search
        take!(search.timeout_seconds);
        take!(search.restarts);
        take!(search.iterations_per_restart);
        take!(search.stall_limit);
        take!(search.seed);
        take!(search.max_transposition_width);
        take!(search.max_rails);
    }

    /// Apply environment variable overrides.
    /// Pattern: `CIPHERSCOPE_ANALYSIS_MAX_CANDIDATES`, `CIPHERSCOPE_SEARCH_SEED`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut CipherscopeConfig) {
        fn env<T: std::str::FromStr>(name: &str) -> Option<T> {
            std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
        }

        if let Some(v) = env("CIPHERSCOPE_ANALYSIS_MAX_CIPHERTEXT_LENGTH") {
            config.analysis.max_ciphertext_length = Some(v);
        }
        if let Some(v) = env("CIPHERSCOPE_ANALYSIS_MIN_HYPOTHESIS_CONFIDENCE") {
            config.analysis.min_hypothesis_confidence = Some(v);
        }
        if let Some(v) = env("CIPHERSCOPE_ANALYSIS_MAX_CANDIDATES") {
            config.analysis.max_candidates = Some(v);
        }
        if let Some(v) = env("CIPHERSCOPE_ANALYSIS_MAX_PARALLEL_ENGINES") {
            config.analysis.max_parallel_engines = Some(v);
        }
        if let Some(v) = env("CIPHERSCOPE_ANALYSIS_NORMALIZATION") {
            config.analysis.normalization = Some(v);
        }
        if let Some(v) = std::env::var("CIPHERSCOPE_ANALYSIS_LANGUAGES")
            .ok()
            .and_then(|raw| parse_language_list(&raw).ok())
        {
            config.analysis.languages = Some(v);
        }
        if let Some(v) = env("CIPHERSCOPE_SEARCH_TIMEOUT_SECONDS") {
            config.search.timeout_seconds = Some(v);
        }
        if let Some(v) = env("CIPHERSCOPE_SEARCH_RESTARTS") {
            config.search.restarts = Some(v);
        }
        if let Some(v) = env("CIPHERSCOPE_SEARCH_ITERATIONS_PER_RESTART") {
            config.search.iterations_per_restart = Some(v);
        }
        if let Some(v) = env("CIPHERSCOPE_SEARCH_SEED") {
            config.search.seed = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CipherscopeConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_ciphertext_length {
            config.analysis.max_ciphertext_length = Some(v);
        }
        if let Some(v) = cli.max_parallel_engines {
            config.analysis.max_parallel_engines = Some(v);
        }
        if let Some(v) = cli.normalization {
            config.analysis.normalization = Some(v);
        }
        if let Some(v) = cli.timeout_seconds {
            config.search.timeout_seconds = Some(v);
        }
        if let Some(v) = cli.seed {
            config.search.seed = Some(v);
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must be between 0.0 and 1.0"))
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
