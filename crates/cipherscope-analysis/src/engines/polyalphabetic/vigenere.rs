//! Vigenère cipher: Caesar shifts cycling through a keyword.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::RngCore;

use super::{keyword_indices, log10_keywords, parse_keyword, perturb_keyword, random_keyword};
use crate::alphabet::map_letters;
use crate::engines::key::Key;
use crate::engines::traits::{CipherEngine, KeySpace, Neighborhood};

pub struct VigenereEngine;

/// Shift each letter by the keyword letter at its position, backwards when
/// `decrypt`. The keyword advances on letters only.
pub(crate) fn vigenere_apply(text: &str, shifts: &[u8], decrypt: bool) -> String {
    let mut pos = 0;
    map_letters(text, |x| {
        let k = shifts[pos % shifts.len()];
        pos += 1;
        if decrypt {
            (x + 26 - k) % 26
        } else {
            (x + k) % 26
        }
    })
}

impl CipherEngine for VigenereEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Vigenere
    }

    fn name(&self) -> &'static str {
        "Vigenère"
    }

    fn description(&self) -> &'static str {
        "Adds a repeating keyword to the plaintext letter by letter."
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        keyword_indices(CipherType::Vigenere, key).map(|_| ())
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        parse_keyword(CipherType::Vigenere, raw)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let shifts = keyword_indices(CipherType::Vigenere, key)?;
        Ok(vigenere_apply(plaintext, &shifts, false))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let shifts = keyword_indices(CipherType::Vigenere, key)?;
        Ok(vigenere_apply(ciphertext, &shifts, true))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Heuristic {
            log10_size: log10_keywords(20),
            neighborhood: Neighborhood::PerturbPosition,
        }
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        random_keyword(rng, 4, 10)
    }

    fn neighbor(&self, key: &Key, rng: &mut dyn RngCore) -> Key {
        perturb_keyword(key, rng).unwrap_or_else(|| self.random_key(rng))
    }
}
