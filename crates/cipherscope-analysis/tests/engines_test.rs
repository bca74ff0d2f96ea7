//! Tests for the cipher engines through the registry.

mod common;

use cipherscope_analysis::engines::{CipherEngine, Key, KeySpace};
use cipherscope_core::errors::{CipherscopeErrorCode, EngineError};
use cipherscope_core::CipherType;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Known textbook pairs for every cipher type.
#[test]
fn test_known_vectors() {
    let cases = [
        (CipherType::Caesar, "3", "HELLO WORLD", "KHOOR ZRUOG"),
        (CipherType::Rot13, "13", "Hello", "URYYB"),
        (CipherType::Atbash, "", "HELLO", "SVOOL"),
        (CipherType::Affine, "5,8", "AFFINE CIPHER", "IHHWVC SWFRCP"),
        (CipherType::Vigenere, "LEMON", "ATTACK AT DAWN", "LXFOPV EF RNHR"),
        (CipherType::Autokey, "QUEENLY", "ATTACK AT DAWN", "QNXEPV YT WTWP"),
        (CipherType::Columnar, "ZEBRAS", "WE ARE DISCOVERED FLEE AT ONCE", "EVLNACDTESEAROFODEECWIREE"),
        (CipherType::RailFence, "3", "WE ARE DISCOVERED FLEE AT ONCE", "WECRLTEERDSOEEFEAOCAIVDEN"),
        (CipherType::Hill, "GYBNQKURP", "ACT", "POH"),
    ];
    for (cipher_type, key, plaintext, ciphertext) in cases {
        assert_eq!(
            common::encrypt(cipher_type, key, plaintext),
            ciphertext,
            "{cipher_type} with key {key:?}"
        );
    }
}

/// Substitution engines keep spaces and punctuation in place.
#[test]
fn test_non_letters_preserved_by_substitution_engines() {
    let registry = common::registry();
    for engine in registry.engines() {
        if !engine.preserves_non_letters() {
            continue;
        }
        let key = engine.random_key(&mut StdRng::seed_from_u64(7));
        let ciphertext = engine.encrypt("Meet me, at noon!", &key).unwrap();
        assert_eq!(ciphertext.chars().nth(4), Some(' '), "{}", engine.cipher_type());
        assert!(ciphertext.ends_with('!'), "{}", engine.cipher_type());
        assert_eq!(ciphertext.len(), "Meet me, at noon!".len());
    }
}

/// A key of the wrong shape is rejected by every keyed engine before any output.
#[test]
fn test_wrong_key_shape_rejected() {
    let registry = common::registry();
    let foreign = Key::KeywordPair {
        first: "A".into(),
        second: "B".into(),
    };
    for engine in registry.engines() {
        if matches!(engine.cipher_type(), CipherType::FourSquare | CipherType::Atbash) {
            continue;
        }
        let err = engine.encrypt("HELLO", &foreign).unwrap_err();
        assert!(matches!(err, EngineError::InvalidKey { .. }), "{}", engine.cipher_type());
        assert_eq!(err.error_code(), "INVALID_KEY");
        assert!(engine.decrypt("HELLO", &foreign).is_err());
    }
}

/// Caesar keys must lie in 0..=25.
#[test]
fn test_caesar_shift_range() {
    let registry = common::registry();
    let caesar = registry.get(CipherType::Caesar).unwrap();
    assert!(caesar.validate_key(&Key::Shift { shift: 25 }).is_ok());
    assert!(caesar.validate_key(&Key::Shift { shift: 30 }).is_err());
    assert!(caesar.parse_key("30").is_err());
}

/// Key spaces: small ones are enumerable, the rest searched heuristically.
#[test]
fn test_key_space_kinds() {
    let registry = common::registry();
    let enumerable = |ct: CipherType| registry.get(ct).unwrap().describe_key_space().is_enumerable();
    for ct in [
        CipherType::Caesar,
        CipherType::Rot13,
        CipherType::Atbash,
        CipherType::Affine,
        CipherType::RailFence,
    ] {
        assert!(enumerable(ct), "{ct}");
    }
    for ct in [
        CipherType::SimpleSubstitution,
        CipherType::Vigenere,
        CipherType::Beaufort,
        CipherType::Autokey,
        CipherType::Columnar,
        CipherType::Playfair,
        CipherType::FourSquare,
        CipherType::Hill,
    ] {
        assert!(!enumerable(ct), "{ct}");
    }
    assert_eq!(
        registry.get(CipherType::Caesar).unwrap().describe_key_space(),
        KeySpace::Enumerable { size: 26 }
    );
    assert_eq!(
        registry.get(CipherType::Caesar).unwrap().enumerate_keys(100).len(),
        26
    );
}

/// The display form of a key parses back to the same key.
#[test]
fn test_key_display_parses_back() {
    let registry = common::registry();
    let mut rng = StdRng::seed_from_u64(11);
    for engine in registry.engines() {
        for _ in 0..5 {
            let key = engine.random_key(&mut rng);
            if key == Key::Fixed {
                continue;
            }
            let parsed = engine.parse_key(&key.to_string()).unwrap();
            let text = "THEQUICKBROWNFOXLEAPSOVERTHELAZYDOG";
            assert_eq!(
                engine.encrypt(text, &parsed).unwrap(),
                engine.encrypt(text, &key).unwrap(),
                "{} key {key}",
                engine.cipher_type()
            );
        }
    }
}

fn round_trip(engine: &dyn CipherEngine, letters: &[usize], seed: u64) -> Result<(), TestCaseError> {
    let alphabet = engine.alphabet().as_bytes();
    let text: String = letters
        .iter()
        .map(|&i| alphabet[i % alphabet.len()] as char)
        .collect();
    let key = engine.random_key(&mut StdRng::seed_from_u64(seed));
    let ciphertext = engine.encrypt(&text, &key).unwrap();
    prop_assert_eq!(engine.decrypt(&ciphertext, &key).unwrap(), text);
    Ok(())
}

proptest! {
    /// Text over an engine's alphabet survives encrypt then decrypt.
    #[test]
    fn prop_round_trip_every_engine(
        letters in proptest::collection::vec(0usize..26, 1..80),
        seed in any::<u64>(),
    ) {
        let registry = common::registry();
        for engine in registry.engines() {
            round_trip(engine, &letters, seed)?;
        }
    }

    /// Transposition only reorders letters.
    #[test]
    fn prop_transposition_keeps_letter_multiset(
        letters in proptest::collection::vec(0usize..26, 1..80),
        seed in any::<u64>(),
    ) {
        let registry = common::registry();
        for ct in [CipherType::Columnar, CipherType::RailFence] {
            let engine = registry.get(ct).unwrap();
            let text: String = letters.iter().map(|&i| (b'A' + i as u8) as char).collect();
            let key = engine.random_key(&mut StdRng::seed_from_u64(seed));
            let mut a: Vec<char> = engine.encrypt(&text, &key).unwrap().chars().collect();
            let mut b: Vec<char> = text.chars().collect();
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }
}
