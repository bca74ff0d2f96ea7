//! Shared fixtures for the analysis integration tests.

#![allow(dead_code)]

use cipherscope_analysis::engines::{CipherRegistry, Key};
use cipherscope_core::CipherType;

/// 592 letters of ordinary English prose.
pub const SAMPLE: &str = "The history of secret writing is as old as writing itself. Generals sent orders that only their own officers \
could read, merchants guarded the prices they paid for spice and silk, and lovers hid their letters from curious \
families. For most of that history the methods were simple. A letter was replaced by another letter a fixed number \
of places further along the alphabet, or the words were written in a grid and read out in a different order. \
Such methods resist a casual reader but fall quickly to anyone who counts how often each letter appears. In \
ordinary English the letter E is the most common, followed by T, A and O, and a patient analyst can match these \
counts against the ciphertext to rebuild the key one letter at a time.";

pub fn sample_letters() -> String {
    SAMPLE
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn registry() -> CipherRegistry {
    CipherRegistry::with_defaults().unwrap()
}

/// Encrypt `plaintext` with `cipher_type` under a key in its string form.
pub fn encrypt(cipher_type: CipherType, key: &str, plaintext: &str) -> String {
    let registry = registry();
    let engine = registry.get(cipher_type).unwrap();
    let key: Key = engine.parse_key(key).unwrap();
    engine.encrypt(plaintext, &key).unwrap()
}
