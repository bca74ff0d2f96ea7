//! Affine cipher: `E(x) = a*x + b mod 26`.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::alphabet::{gcd, map_letters, mod_inverse};
use crate::engines::key::{parse_numbers, Key};
use crate::engines::traits::{wrong_shape, CipherEngine, KeySpace};

/// Multipliers coprime with 26.
pub const VALID_MULTIPLIERS: [u32; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

pub struct AffineEngine;

impl AffineEngine {
    fn params(&self, key: &Key) -> Result<(u32, u32), EngineError> {
        match key {
            Key::Affine { a, b } => {
                if *a >= 26 || gcd(*a, 26) != 1 {
                    Err(EngineError::invalid_key(
                        CipherType::Affine,
                        format!("multiplier {a} must be in 1..=25 and coprime with 26"),
                    ))
                } else if *b >= 26 {
                    Err(EngineError::invalid_key(
                        CipherType::Affine,
                        format!("offset {b} is outside 0..=25"),
                    ))
                } else {
                    Ok((*a, *b))
                }
            }
            other => Err(wrong_shape(CipherType::Affine, "affine pair", other)),
        }
    }
}

impl CipherEngine for AffineEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Affine
    }

    fn name(&self) -> &'static str {
        "Affine"
    }

    fn description(&self) -> &'static str {
        "Multiplies each letter index by a unit mod 26 and adds an offset."
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        self.params(key).map(|_| ())
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        let key = match parse_numbers(raw).as_deref() {
            Some(&[a, b]) => Key::Affine { a, b },
            _ => {
                return Err(EngineError::invalid_key(
                    CipherType::Affine,
                    format!("'{}' is not an 'a,b' pair", raw.trim()),
                ))
            }
        };
        self.validate_key(&key)?;
        Ok(key)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let (a, b) = self.params(key)?;
        Ok(map_letters(plaintext, |x| ((a * x as u32 + b) % 26) as u8))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let (a, b) = self.params(key)?;
        let a_inv = mod_inverse(a as i64, 26).ok_or_else(|| {
            EngineError::invalid_key(CipherType::Affine, format!("{a} has no inverse mod 26"))
        })? as u32;
        Ok(map_letters(ciphertext, |y| {
            ((a_inv * (y as u32 + 26 - b)) % 26) as u8
        }))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Enumerable {
            size: VALID_MULTIPLIERS.len() * 26,
        }
    }

    fn enumerate_keys(&self, _text_len: usize) -> Vec<Key> {
        VALID_MULTIPLIERS
            .iter()
            .flat_map(|&a| (0..26).map(move |b| Key::Affine { a, b }))
            .collect()
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        let a = *VALID_MULTIPLIERS[1..].choose(rng).unwrap_or(&5);
        Key::Affine {
            a,
            b: rng.gen_range(0..26),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_example() {
        let key = Key::Affine { a: 5, b: 8 };
        assert_eq!(AffineEngine.encrypt("AFFINE CIPHER", &key).unwrap(), "IHHWVC SWFRCP");
        assert_eq!(AffineEngine.decrypt("IHHWVC SWFRCP", &key).unwrap(), "AFFINE CIPHER");
    }

    #[test]
    fn even_multiplier_is_rejected() {
        assert!(AffineEngine.validate_key(&Key::Affine { a: 2, b: 1 }).is_err());
        assert!(AffineEngine.validate_key(&Key::Affine { a: 13, b: 1 }).is_err());
        assert!(AffineEngine.parse_key("5,8").is_ok());
        assert!(AffineEngine.parse_key("5").is_err());
    }

    #[test]
    fn enumerates_312_keys() {
        assert_eq!(AffineEngine.enumerate_keys(0).len(), 312);
    }
}
