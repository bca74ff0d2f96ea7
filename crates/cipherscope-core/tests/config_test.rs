//! Tests for the cipherscope configuration system.

use std::sync::Mutex;

use cipherscope_core::config::{
    CipherscopeConfig, CliOverrides, NormalizationMode, RequestOverrides,
};
use cipherscope_core::errors::ConfigError;
use cipherscope_core::Language;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CIPHERSCOPE_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "CIPHERSCOPE_ANALYSIS_MAX_CIPHERTEXT_LENGTH",
        "CIPHERSCOPE_ANALYSIS_MIN_HYPOTHESIS_CONFIDENCE",
        "CIPHERSCOPE_ANALYSIS_MAX_CANDIDATES",
        "CIPHERSCOPE_ANALYSIS_MAX_PARALLEL_ENGINES",
        "CIPHERSCOPE_ANALYSIS_NORMALIZATION",
        "CIPHERSCOPE_ANALYSIS_LANGUAGES",
        "CIPHERSCOPE_SEARCH_TIMEOUT_SECONDS",
        "CIPHERSCOPE_SEARCH_RESTARTS",
        "CIPHERSCOPE_SEARCH_ITERATIONS_PER_RESTART",
        "CIPHERSCOPE_SEARCH_SEED",
    ] {
        std::env::remove_var(key);
    }
}

/// CLI beats env, env beats the project file.
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("cipherscope.toml"),
        r#"
[analysis]
max_candidates = 5
max_parallel_engines = 2

[search]
restarts = 3
"#,
    )
    .unwrap();

    std::env::set_var("CIPHERSCOPE_ANALYSIS_MAX_PARALLEL_ENGINES", "6");
    std::env::set_var("CIPHERSCOPE_SEARCH_RESTARTS", "9");

    let cli = CliOverrides {
        max_parallel_engines: Some(8),
        ..Default::default()
    };
    let config = CipherscopeConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.analysis.max_candidates, Some(5));
    assert_eq!(config.analysis.max_parallel_engines, Some(8));
    assert_eq!(config.search.restarts, Some(9));

    clear_env_vars();
}

/// Missing project file falls back to compiled defaults.
#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = CipherscopeConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.analysis.effective_max_ciphertext_length(), 100_000);
    assert_eq!(config.analysis.effective_max_candidates(), 10);
    assert!((config.analysis.effective_min_hypothesis_confidence() - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.analysis.effective_normalization(), NormalizationMode::Strict);
    assert_eq!(config.search.effective_restarts(), 6);
}

/// Unparseable env values are ignored rather than failing the load.
#[test]
fn test_invalid_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("CIPHERSCOPE_ANALYSIS_MAX_CANDIDATES", "lots");
    std::env::set_var("CIPHERSCOPE_ANALYSIS_NORMALIZATION", "preserve_spaces");
    let dir = tempdir();
    let config = CipherscopeConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.analysis.max_candidates, None);
    assert_eq!(
        config.analysis.effective_normalization(),
        NormalizationMode::PreserveSpaces
    );

    clear_env_vars();
}

/// A malformed project file is a parse error naming the file.
#[test]
fn test_malformed_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("cipherscope.toml"), "[analysis\nmax_candidates =").unwrap();
    let err = CipherscopeConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("cipherscope.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

/// Out-of-range values fail validation with the offending field.
#[test]
fn test_validation_rejects_out_of_range() {
    let config = CipherscopeConfig::from_toml(
        r#"
[analysis]
min_hypothesis_confidence = 1.5
"#,
    )
    .unwrap();
    let err = CipherscopeConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "analysis.min_hypothesis_confidence")
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }

    let config = CipherscopeConfig::from_toml("[search]\ntimeout_seconds = 0.0\n").unwrap();
    assert!(CipherscopeConfig::validate(&config).is_err());

    let config = CipherscopeConfig::from_toml(
        "[analysis]\nmin_repeat_length = 6\nmax_repeat_length = 4\n",
    )
    .unwrap();
    assert!(CipherscopeConfig::validate(&config).is_err());
}

/// Request options overlay the config and are validated with the same rules.
#[test]
fn test_request_overrides() {
    let base = CipherscopeConfig::default();
    let overrides = RequestOverrides {
        min_hypothesis_confidence: Some(0.5),
        max_candidates: Some(3),
        timeout_seconds: Some(1.5),
    };
    let config = base.with_request_overrides(&overrides).unwrap();
    assert_eq!(config.analysis.effective_max_candidates(), 3);
    assert!((config.search.effective_timeout_seconds() - 1.5).abs() < f64::EPSILON);
    // The base config is untouched.
    assert_eq!(base.analysis.max_candidates, None);

    let bad = RequestOverrides {
        max_candidates: Some(0),
        ..Default::default()
    };
    assert!(base.with_request_overrides(&bad).is_err());
}

/// TOML serialization survives a reload.
#[test]
fn test_to_toml_reload() {
    let config = CipherscopeConfig::from_toml(
        r#"
[analysis]
normalization = "preserve_punctuation"
filter_candidates = false

[search]
seed = 42
"#,
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    let reloaded = CipherscopeConfig::from_toml(&rendered).unwrap();
    assert_eq!(
        reloaded.analysis.normalization,
        Some(NormalizationMode::PreservePunctuation)
    );
    assert_eq!(reloaded.analysis.filter_candidates, Some(false));
    assert_eq!(reloaded.search.seed, Some(42));
}

/// Languages default to every supported one; lists are deduplicated and
/// an empty list is rejected.
#[test]
fn test_languages_option() {
    let config = CipherscopeConfig::default();
    assert_eq!(config.analysis.effective_languages(), Language::all().to_vec());

    let config = CipherscopeConfig::from_toml(
        "[analysis]\nlanguages = [\"french\", \"english\", \"french\"]\n",
    )
    .unwrap();
    assert_eq!(
        config.analysis.effective_languages(),
        vec![Language::French, Language::English]
    );

    let config = CipherscopeConfig::from_toml("[analysis]\nlanguages = []\n").unwrap();
    match CipherscopeConfig::validate(&config).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "analysis.languages"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

/// The languages env var takes names or codes.
#[test]
fn test_languages_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("CIPHERSCOPE_ANALYSIS_LANGUAGES", "de, Spanish");
    let config = CipherscopeConfig::load(dir.path(), None).unwrap();
    clear_env_vars();

    assert_eq!(
        config.analysis.effective_languages(),
        vec![Language::German, Language::Spanish]
    );
}
