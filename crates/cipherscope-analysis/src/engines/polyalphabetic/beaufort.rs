//! Beaufort cipher: `c = k - p mod 26`, self-reciprocal.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::RngCore;

use super::{keyword_indices, log10_keywords, parse_keyword, perturb_keyword, random_keyword};
use crate::alphabet::map_letters;
use crate::engines::key::Key;
use crate::engines::traits::{CipherEngine, KeySpace, Neighborhood};

pub struct BeaufortEngine;

pub(crate) fn beaufort_apply(text: &str, shifts: &[u8]) -> String {
    let mut pos = 0;
    map_letters(text, |x| {
        let k = shifts[pos % shifts.len()];
        pos += 1;
        (k + 26 - x) % 26
    })
}

impl CipherEngine for BeaufortEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Beaufort
    }

    fn name(&self) -> &'static str {
        "Beaufort"
    }

    fn description(&self) -> &'static str {
        "Subtracts each plaintext letter from a repeating keyword; encryption and decryption coincide."
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        keyword_indices(CipherType::Beaufort, key).map(|_| ())
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        parse_keyword(CipherType::Beaufort, raw)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let shifts = keyword_indices(CipherType::Beaufort, key)?;
        Ok(beaufort_apply(plaintext, &shifts))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        self.encrypt(ciphertext, key)
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
