//! End-to-end tests for the analysis pipeline.

mod common;

use cipherscope_analysis::engines::Key;
use cipherscope_analysis::pipeline::{AnalysisPipeline, AnalyzeOptions, PipelineStage};
use cipherscope_analysis::search::compare_candidates;
use cipherscope_analysis::RecoveryStatus;
use cipherscope_core::config::{CipherscopeConfig, NormalizationMode, RequestOverrides};
use cipherscope_core::errors::{AnalysisError, CipherscopeErrorCode, InputError};
use cipherscope_core::CipherType;

fn pipeline() -> AnalysisPipeline {
    AnalysisPipeline::with_defaults(CipherscopeConfig::default()).unwrap()
}

fn caesar_only() -> AnalyzeOptions {
    AnalyzeOptions {
        cipher_type: Some(CipherType::Caesar),
        ..AnalyzeOptions::default()
    }
}

/// KHOOR ZRUOG decrypts to HELLOWORLD under strict normalization.
#[test]
fn test_caesar_hello_world() {
    let result = pipeline().analyze("KHOOR ZRUOG", &caesar_only()).unwrap();
    assert_eq!(result.stage, PipelineStage::Done);
    assert_eq!(result.statistics.length, 10);
    assert_eq!(result.suspected_ciphers.len(), 13);

    let best = &result.plaintext_candidates[0];
    assert_eq!(best.plaintext, "HELLOWORLD");
    assert_eq!(best.key, Key::Shift { shift: 3 });
    assert!(best.confidence > 0.8);
    assert_eq!(result.recovery.len(), 1);
    assert_eq!(result.recovery[0].status, RecoveryStatus::Exhaustive);
    assert!(!result.explanations.is_empty());
}

/// Word boundaries survive when the configuration keeps spaces.
#[test]
fn test_preserve_spaces_mode() {
    let mut config = CipherscopeConfig::default();
    config.analysis.normalization = Some(NormalizationMode::PreserveSpaces);
    let pipeline = AnalysisPipeline::with_defaults(config).unwrap();
    let result = pipeline.analyze("khoor   zruog", &caesar_only()).unwrap();
    assert_eq!(result.plaintext_candidates[0].plaintext, "HELLO WORLD");
}

/// Candidates are sorted, unique and capped.
#[test]
fn test_candidates_sorted_and_capped() {
    let options = AnalyzeOptions {
        cipher_type: Some(CipherType::Affine),
        overrides: RequestOverrides {
            max_candidates: Some(4),
            ..RequestOverrides::default()
        },
        ..AnalyzeOptions::default()
    };
    let ciphertext = common::encrypt(CipherType::Affine, "5,8", common::SAMPLE);
    let result = pipeline().analyze(&ciphertext, &options).unwrap();
    let candidates = &result.plaintext_candidates;
    assert!(!candidates.is_empty() && candidates.len() <= 4);
    assert_eq!(candidates[0].plaintext, common::sample_letters());
    for pair in candidates.windows(2) {
        assert_ne!(compare_candidates(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
        assert_ne!(pair[0].plaintext, pair[1].plaintext);
    }
}

/// A confident tier-1 result skips the costlier tiers.
#[test]
fn test_early_exit_skips_later_tiers() {
    let mut config = CipherscopeConfig::default();
    config.analysis.early_exit_confidence = Some(0.9);
    let pipeline = AnalysisPipeline::with_defaults(config).unwrap();
    let ciphertext = common::encrypt(CipherType::Caesar, "7", common::SAMPLE);
    let result = pipeline.analyze(&ciphertext, &AnalyzeOptions::default()).unwrap();

    assert_eq!(result.suspected_ciphers[0].cipher_type, CipherType::Caesar);
    assert_eq!(result.plaintext_candidates[0].plaintext, common::sample_letters());
    let substitution = result
        .recovery
        .iter()
        .find(|o| o.cipher_type == CipherType::SimpleSubstitution)
        .unwrap();
    assert_eq!(substitution.status, RecoveryStatus::Skipped);
    let caesar = result
        .recovery
        .iter()
        .find(|o| o.cipher_type == CipherType::Caesar)
        .unwrap();
    assert_eq!(caesar.status, RecoveryStatus::Exhaustive);
}

/// Input without letters still produces a well-formed result.
#[test]
fn test_empty_input() {
    let result = pipeline().analyze("  123 ?! ", &AnalyzeOptions::default()).unwrap();
    assert!(result.statistics.is_empty());
    assert!(result.suspected_ciphers.is_empty());
    assert!(result.plaintext_candidates.is_empty());
    assert_eq!(
        result.explanations,
        vec![
            "The ciphertext contains no letters to analyze.".to_string(),
            "Could not determine the cipher type from the available statistics.".to_string(),
            "No viable plaintext candidates found.".to_string(),
        ]
    );
}

/// A threshold nothing reaches reports the skipped recovery.
#[test]
fn test_threshold_not_reached() {
    let options = AnalyzeOptions {
        overrides: RequestOverrides {
            min_hypothesis_confidence: Some(1.0),
            ..RequestOverrides::default()
        },
        ..AnalyzeOptions::default()
    };
    let result = pipeline().analyze("KHOOR ZRUOG", &options).unwrap();
    assert!(result.plaintext_candidates.is_empty());
    assert_eq!(result.recovery.len(), 1);
    assert_eq!(result.recovery[0].status, RecoveryStatus::NotAttempted);
    let not_attempted: Vec<&String> = result
        .explanations
        .iter()
        .filter(|l| l.contains("not attempted"))
        .collect();
    assert_eq!(not_attempted.len(), 1, "{:?}", result.explanations);
    assert_eq!(
        not_attempted[0],
        &format!(
            "{}: not attempted, no hypothesis reached the minimum confidence.",
            result.recovery[0].cipher_type
        )
    );
    assert_eq!(result.explanations.last(), Some(not_attempted[0]));
}

/// Oversized input is rejected before any work.
#[test]
fn test_input_too_large() {
    let mut config = CipherscopeConfig::default();
    config.analysis.max_ciphertext_length = Some(5);
    let pipeline = AnalysisPipeline::with_defaults(config).unwrap();
    let err = pipeline.analyze("KHOOR ZRUOG", &AnalyzeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Input(InputError::TooLarge {
            length: 11,
            max_length: 5
        })
    ));
    assert_eq!(err.error_code(), "INPUT_TOO_LARGE");
}

/// Request validation: keys need a type and must be valid for it.
#[test]
fn test_request_validation() {
    let pipeline = pipeline();
    let key_without_type = AnalyzeOptions {
        key: Some(Key::Shift { shift: 3 }),
        ..AnalyzeOptions::default()
    };
    let err = pipeline.analyze("KHOOR", &key_without_type).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_OPTION");

    let bad_key = AnalyzeOptions {
        cipher_type: Some(CipherType::Caesar),
        key: Some(Key::Shift { shift: 30 }),
        ..AnalyzeOptions::default()
    };
    let err = pipeline.analyze("KHOOR", &bad_key).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_KEY");

    let bad_override = AnalyzeOptions {
        overrides: RequestOverrides {
            max_candidates: Some(0),
            ..RequestOverrides::default()
        },
        ..AnalyzeOptions::default()
    };
    let err = pipeline.analyze("KHOOR", &bad_override).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_OPTION");
}

/// A known key decrypts directly.
#[test]
fn test_known_key() {
    let options = AnalyzeOptions {
        cipher_type: Some(CipherType::Vigenere),
        key: Some(Key::Keyword {
            keyword: "LEMON".into(),
        }),
        ..AnalyzeOptions::default()
    };
    let result = pipeline().analyze("LXFOPVEFRNHR", &options).unwrap();
    assert_eq!(result.plaintext_candidates.len(), 1);
    assert_eq!(result.plaintext_candidates[0].plaintext, "ATTACKATDAWN");
    assert_eq!(result.recovery[0].status, RecoveryStatus::SingleCandidate);
}

/// Explanations can be rebuilt from a stored result.
#[test]
fn test_reexplain_round_trip() {
    let pipeline = pipeline();
    let result = pipeline.analyze("KHOOR ZRUOG", &caesar_only()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let stored: cipherscope_analysis::AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(pipeline.reexplain(&stored), result.explanations);
}
