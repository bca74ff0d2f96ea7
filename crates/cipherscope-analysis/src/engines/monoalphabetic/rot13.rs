//! ROT13: the Caesar shift of 13, its own inverse.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::RngCore;

use super::shift_letters;
use crate::engines::key::Key;
use crate::engines::traits::{wrong_shape, CipherEngine, KeySpace};

const SHIFT: u32 = 13;

pub struct Rot13Engine;

impl CipherEngine for Rot13Engine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Rot13
    }

    fn name(&self) -> &'static str {
        "ROT13"
    }

    fn description(&self) -> &'static str {
        "Caesar shift of 13; applying it twice restores the text."
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        match key {
            Key::Shift { shift: SHIFT } => Ok(()),
            Key::Shift { shift } => Err(EngineError::invalid_key(
                CipherType::Rot13,
                format!("ROT13 only accepts shift 13, got {shift}"),
            )),
            other => Err(wrong_shape(CipherType::Rot13, "shift", other)),
        }
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Key::Shift { shift: SHIFT });
        }
        let key = trimmed
            .parse::<u32>()
            .map(|shift| Key::Shift { shift })
            .map_err(|_| {
                EngineError::invalid_key(CipherType::Rot13, "ROT13 only accepts shift 13")
            })?;
        self.validate_key(&key)?;
        Ok(key)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        self.validate_key(key)?;
        Ok(shift_letters(plaintext, SHIFT))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        self.encrypt(ciphertext, key)
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Enumerable { size: 1 }
    }

    fn enumerate_keys(&self, _text_len: usize) -> Vec<Key> {
        vec![Key::Shift { shift: SHIFT }]
    }

    fn random_key(&self, _rng: &mut dyn RngCore) -> Key {
        Key::Shift { shift: SHIFT }
    }
}
