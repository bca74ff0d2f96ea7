//! Atbash: the alphabet reversed.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::RngCore;

use crate::alphabet::map_letters;
use crate::engines::key::Key;
use crate::engines::traits::{CipherEngine, KeySpace};

pub struct AtbashEngine;

fn mirror(text: &str) -> String {
    map_letters(text, |i| 25 - i)
}

impl CipherEngine for AtbashEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Atbash
    }

    fn name(&self) -> &'static str {
        "Atbash"
    }

    fn description(&self) -> &'static str {
        "Maps A to Z, B to Y, and so on; keyless and self-inverse."
    }

    /// Atbash has no key; any key is accepted and ignored.
    fn validate_key(&self, _key: &Key) -> Result<(), EngineError> {
        Ok(())
    }

    fn parse_key(&self, _raw: &str) -> Result<Key, EngineError> {
        Ok(Key::Fixed)
    }

    fn encrypt(&self, plaintext: &str, _key: &Key) -> Result<String, EngineError> {
        Ok(mirror(plaintext))
    }

    fn decrypt(&self, ciphertext: &str, _key: &Key) -> Result<String, EngineError> {
        Ok(mirror(ciphertext))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Enumerable { size: 1 }
    }

    fn enumerate_keys(&self, _text_len: usize) -> Vec<Key> {
        vec![Key::Fixed]
    }

    fn random_key(&self, _rng: &mut dyn RngCore) -> Key {
        Key::Fixed
    }
}
