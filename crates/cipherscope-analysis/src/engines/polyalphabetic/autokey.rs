//! Autokey cipher: a primer keyword followed by the plaintext itself.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::RngCore;

use super::{keyword_indices, log10_keywords, parse_keyword, perturb_keyword, random_keyword};
use crate::alphabet::map_letters;
use crate::engines::key::Key;
use crate::engines::traits::{CipherEngine, KeySpace, Neighborhood};

pub struct AutokeyEngine;

/// Encrypt with key stream `primer ++ plaintext`.
pub(crate) fn autokey_encrypt(text: &str, primer: &[u8]) -> String {
    let mut stream: Vec<u8> = primer.to_vec();
    let mut pos = 0;
    map_letters(text, |p| {
        let k = stream[pos];
        stream.push(p);
        pos += 1;
        (p + k) % 26
    })
}

/// Decrypt, feeding each recovered plaintext letter back into the key stream.
pub(crate) fn autokey_decrypt(text: &str, primer: &[u8]) -> String {
    let mut stream: Vec<u8> = primer.to_vec();
    let mut pos = 0;
    map_letters(text, |c| {
        let p = (c + 26 - stream[pos]) % 26;
        stream.push(p);
        pos += 1;
        p
    })
}

impl CipherEngine for AutokeyEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Autokey
    }

    fn name(&self) -> &'static str {
        "Autokey"
    }

    fn description(&self) -> &'static str {
        "Vigenère variant whose key continues with the plaintext after a short primer."
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        keyword_indices(CipherType::Autokey, key).map(|_| ())
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        parse_keyword(CipherType::Autokey, raw)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let primer = keyword_indices(CipherType::Autokey, key)?;
        Ok(autokey_encrypt(plaintext, &primer))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let primer = keyword_indices(CipherType::Autokey, key)?;
        Ok(autokey_decrypt(ciphertext, &primer))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Heuristic {
            log10_size: log10_keywords(8),
            neighborhood: Neighborhood::PerturbPosition,
        }
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        random_keyword(rng, 1, 5)
    }

    fn neighbor(&self, key: &Key, rng: &mut dyn RngCore) -> Key {
        perturb_keyword(key, rng).unwrap_or_else(|| self.random_key(rng))
    }
}
