//! General monoalphabetic substitution over a full permuted alphabet.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::alphabet::{from_indices, map_letters, ALPHABET_SIZE};
use crate::engines::key::{parse_letters, Key};
use crate::engines::traits::{wrong_shape, CipherEngine, KeySpace, Neighborhood};

/// log10(26!)
const LOG10_KEY_SPACE: f64 = 26.6056;

pub struct SubstitutionEngine;

impl SubstitutionEngine {
    /// Forward table: plaintext index -> ciphertext index.
    fn table(&self, key: &Key) -> Result<[u8; ALPHABET_SIZE], EngineError> {
        let alphabet = match key {
            Key::Alphabet { alphabet } => alphabet,
            other => return Err(wrong_shape(CipherType::SimpleSubstitution, "substitution alphabet", other)),
        };
        let invalid = |reason: String| EngineError::invalid_key(CipherType::SimpleSubstitution, reason);
        if alphabet.len() != ALPHABET_SIZE || !alphabet.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(invalid(format!(
                "alphabet must be 26 uppercase letters, got '{alphabet}'"
            )));
        }
        let mut table = [0u8; ALPHABET_SIZE];
        let mut seen = [false; ALPHABET_SIZE];
        for (slot, b) in table.iter_mut().zip(alphabet.bytes()) {
            let idx = b - b'A';
            if seen[idx as usize] {
                return Err(invalid(format!("letter {} appears twice", b as char)));
            }
            seen[idx as usize] = true;
            *slot = idx;
        }
        Ok(table)
    }
}

/// Random permutation of the alphabet indices.
pub(crate) fn shuffled_alphabet(rng: &mut dyn RngCore) -> Vec<u8> {
    let mut letters: Vec<u8> = (0..ALPHABET_SIZE as u8).collect();
    letters.shuffle(rng);
    letters
}

impl CipherEngine for SubstitutionEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::SimpleSubstitution
    }

    fn name(&self) -> &'static str {
        "Simple substitution"
    }

    fn description(&self) -> &'static str {
        "Replaces each letter through an arbitrary permutation of the alphabet."
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        self.table(key).map(|_| ())
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        let alphabet = parse_letters(raw).ok_or_else(|| {
            EngineError::invalid_key(
                CipherType::SimpleSubstitution,
                "alphabet must contain letters only",
            )
        })?;
        let key = Key::Alphabet { alphabet };
        self.validate_key(&key)?;
        Ok(key)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let table = self.table(key)?;
        Ok(map_letters(plaintext, |i| table[i as usize]))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let table = self.table(key)?;
        let mut inverse = [0u8; ALPHABET_SIZE];
        for (plain, &cipher) in table.iter().enumerate() {
            inverse[cipher as usize] = plain as u8;
        }
        Ok(map_letters(ciphertext, |i| inverse[i as usize]))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Heuristic {
            log10_size: LOG10_KEY_SPACE,
            neighborhood: Neighborhood::SwapPair,
        }
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        Key::Alphabet {
            alphabet: from_indices(&shuffled_alphabet(rng)),
        }
    }

    fn neighbor(&self, key: &Key, rng: &mut dyn RngCore) -> Key {
        let Key::Alphabet { alphabet } = key else {
            return self.random_key(rng);
        };
        let mut bytes = alphabet.as_bytes().to_vec();
        if bytes.len() < 2 {
            return self.random_key(rng);
        }
        let i = rng.gen_range(0..bytes.len());
        let mut j = rng.gen_range(0..bytes.len() - 1);
        if j >= i {
            j += 1;
        }
        bytes.swap(i, j);
        Key::Alphabet {
            alphabet: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
