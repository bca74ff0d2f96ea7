//! Caesar shift cipher.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::{Rng, RngCore};

use super::shift_letters;
use crate::alphabet::index_of;
use crate::engines::key::Key;
use crate::engines::traits::{wrong_shape, CipherEngine, KeySpace};

pub struct CaesarEngine;

impl CaesarEngine {
    fn shift(&self, key: &Key) -> Result<u32, EngineError> {
        match key {
            Key::Shift { shift } if *shift < 26 => Ok(*shift),
            Key::Shift { shift } => Err(EngineError::invalid_key(
                CipherType::Caesar,
                format!("shift {shift} is outside 0..=25"),
            )),
            other => Err(wrong_shape(CipherType::Caesar, "shift", other)),
        }
    }
}

impl CipherEngine for CaesarEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Caesar
    }

    fn name(&self) -> &'static str {
        "Caesar"
    }

    fn description(&self) -> &'static str {
        "Shifts every letter a fixed number of places along the alphabet."
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        self.shift(key).map(|_| ())
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        let trimmed = raw.trim();
        let key = match trimmed.parse::<u32>() {
            Ok(shift) => Key::Shift { shift },
            Err(_) => {
                let mut chars = trimmed.chars();
                match (chars.next().and_then(index_of), chars.next()) {
                    (Some(i), None) => Key::Shift { shift: i as u32 },
                    _ => {
                        return Err(EngineError::invalid_key(
                            CipherType::Caesar,
                            format!("'{trimmed}' is not a shift in 0..=25 or a single letter"),
                        ))
                    }
                }
            }
        };
        self.validate_key(&key)?;
        Ok(key)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let shift = self.shift(key)?;
        Ok(shift_letters(plaintext, shift))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let shift = self.shift(key)?;
        Ok(shift_letters(ciphertext, 26 - shift))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Enumerable { size: 26 }
    }

    fn enumerate_keys(&self, _text_len: usize) -> Vec<Key> {
        (0..26).map(|shift| Key::Shift { shift }).collect()
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        Key::Shift {
            shift: rng.gen_range(1..26),
        }
    }

    fn neighbor(&self, key: &Key, rng: &mut dyn RngCore) -> Key {
        match key {
            Key::Shift { shift } => Key::Shift {
                shift: (shift + rng.gen_range(1..26)) % 26,
            },
            _ => self.random_key(rng),
        }
    }
}
