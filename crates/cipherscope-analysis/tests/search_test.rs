//! Tests for key search and candidate scoring.

mod common;

use std::sync::Arc;
use std::time::Duration;

use cipherscope_analysis::engines::Key;
use cipherscope_analysis::search::{
    KeySearchOptimizer, RecoveryStatus, SearchMethod, SearchSettings,
};
use cipherscope_analysis::Scorer;
use cipherscope_core::errors::EngineError;
use cipherscope_core::traits::Deadline;
use cipherscope_core::CipherType;

fn optimizer() -> KeySearchOptimizer {
    KeySearchOptimizer::new(Arc::new(common::registry()), SearchSettings::default())
}

/// The classic Caesar example: shift 3 ranks first.
#[test]
fn test_caesar_hello_world() {
    let outcome = optimizer()
        .recover("KHOOR ZRUOG", CipherType::Caesar, None, &Deadline::unbounded())
        .unwrap();
    assert_eq!(outcome.status, RecoveryStatus::Exhaustive);
    assert_eq!(outcome.keys_tried, 26);
    assert_eq!(outcome.candidates.len(), 26);

    let best = outcome.best().unwrap();
    assert_eq!(best.plaintext, "HELLO WORLD");
    assert_eq!(best.key, Key::Shift { shift: 3 });
    assert_eq!(best.method, SearchMethod::Exhaustive);
    assert!(best.confidence > 0.8, "{}", best.confidence);
    assert!(outcome.candidates[1].score > best.score + 0.2);
}

/// English scores better (lower) than its shifted forms.
#[test]
fn test_correct_shift_has_lowest_chi_squared() {
    let scorer = Scorer::default();
    let letters = common::sample_letters();
    let correct = scorer.chi_squared(&letters);
    let beaten = (1..26)
        .map(|s| common::encrypt(CipherType::Caesar, &s.to_string(), &letters))
        .filter(|wrong| scorer.chi_squared(wrong) > correct)
        .count();
    assert!(beaten >= 20, "beaten {beaten}");
}

/// Confidence is monotone in the score and stays in [0, 1].
#[test]
fn test_confidence_monotone() {
    let scorer = Scorer::default();
    let mut previous = 1.0;
    for cost in [1.5, 2.0, 2.5, 2.95, 3.5, 4.0, 6.0] {
        let confidence = scorer.confidence(cost);
        assert!((0.0..=1.0).contains(&confidence));
        assert!(confidence <= previous);
        previous = confidence;
    }
    assert!((scorer.confidence(2.95) - 0.5).abs() < 1e-12);
    assert_eq!(scorer.confidence(f64::NAN), 0.0);
}

/// An invalid known key fails before any search.
#[test]
fn test_invalid_known_key_rejected() {
    let err = optimizer()
        .recover(
            "KHOOR",
            CipherType::Caesar,
            Some(&Key::Shift { shift: 30 }),
            &Deadline::unbounded(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidKey {
            cipher_type: CipherType::Caesar,
            ..
        }
    ));
}

/// A known key yields exactly one candidate.
#[test]
fn test_known_key_single_candidate() {
    let outcome = optimizer()
        .recover(
            "KHOOR ZRUOG",
            CipherType::Caesar,
            Some(&Key::Shift { shift: 3 }),
            &Deadline::unbounded(),
        )
        .unwrap();
    assert_eq!(outcome.status, RecoveryStatus::SingleCandidate);
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].method, SearchMethod::KnownKey);
    assert_eq!(outcome.candidates[0].plaintext, "HELLO WORLD");
}

/// Text without letters is skipped, not searched.
#[test]
fn test_empty_text_skipped() {
    let outcome = optimizer()
        .recover("123 !!", CipherType::Vigenere, None, &Deadline::unbounded())
        .unwrap();
    assert_eq!(outcome.status, RecoveryStatus::Skipped);
    assert!(outcome.candidates.is_empty());
    assert_eq!(outcome.keys_tried, 0);
}

/// An expired deadline stops the search and marks the outcome.
#[test]
fn test_expired_deadline_times_out() {
    let deadline = Deadline::after(Duration::ZERO);
    let outcome = optimizer()
        .recover("KHOOR ZRUOG", CipherType::Caesar, None, &deadline)
        .unwrap();
    assert_eq!(outcome.status, RecoveryStatus::TimedOut);
    assert!(outcome.status.is_partial());
    assert!(outcome.candidates.is_empty());
}

/// Unknown identifiers are rejected by the string entry point.
#[test]
fn test_unknown_cipher_identifier() {
    let err = optimizer()
        .recover_id("KHOOR", "enigma", None, &Deadline::unbounded())
        .unwrap_err();
    assert!(matches!(err, EngineError::UnknownCipherType { .. }));
}

/// Rail fence keys are enumerated and the right rail count wins.
#[test]
fn test_rail_fence_recovery() {
    let ciphertext = common::encrypt(CipherType::RailFence, "3", common::SAMPLE);
    let outcome = optimizer()
        .recover(&ciphertext, CipherType::RailFence, None, &Deadline::unbounded())
        .unwrap();
    let best = outcome.best().unwrap();
    assert_eq!(best.key, Key::Rails { rails: 3 });
    assert_eq!(best.plaintext, common::sample_letters());
}

/// Vigenère keys come from per-column frequency analysis plus climbing.
#[test]
fn test_vigenere_recovery() {
    let ciphertext = common::encrypt(CipherType::Vigenere, "LEMON", common::SAMPLE);
    let outcome = optimizer()
        .recover(&ciphertext, CipherType::Vigenere, None, &Deadline::unbounded())
        .unwrap();
    assert_eq!(outcome.status, RecoveryStatus::BestEffort);
    let best = outcome.best().unwrap();
    assert_eq!(best.plaintext, common::SAMPLE.to_ascii_uppercase());
    assert_eq!(best.method, SearchMethod::HillClimbing);
    assert!(best.confidence > 0.9, "{}", best.confidence);
}

/// The same seed gives the same candidates.
#[test]
fn test_search_is_deterministic() {
    let ciphertext = common::encrypt(CipherType::Autokey, "KEY", "ATTACK AT DAWN ON THE NORTHERN BRIDGE");
    let run = || {
        optimizer()
            .recover(&ciphertext, CipherType::Autokey, None, &Deadline::unbounded())
            .unwrap()
            .candidates
    };
    assert_eq!(run(), run());
}
