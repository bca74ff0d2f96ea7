//! Playfair digraph cipher.
//!
//! Letters are taken in aligned pairs. A doubled pair is enciphered with the
//! same-row rule and a trailing single letter is shifted along its row, so
//! every text over the 25-letter square alphabet round-trips exactly.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::RngCore;

use super::square::{square_letters, KeySquare, LOG10_SQUARES};
use crate::alphabet::from_indices;
use crate::engines::key::Key;
use crate::engines::polyalphabetic::{keyword_indices, parse_keyword};
use crate::engines::traits::{CipherEngine, KeySpace, Neighborhood, SQUARE_ALPHABET};

pub struct PlayfairEngine;

/// Encipher (`step` = 1) or decipher (`step` = 4, one step back mod 5).
fn apply(square: &KeySquare, letters: &[u8], step: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(letters.len());
    for pair in letters.chunks(2) {
        match *pair {
            [a, b] => {
                let (r1, c1) = square.locate(a);
                let (r2, c2) = square.locate(b);
                if r1 == r2 {
                    out.push(square.at(r1, c1 + step));
                    out.push(square.at(r2, c2 + step));
                } else if c1 == c2 {
                    out.push(square.at(r1 + step, c1));
                    out.push(square.at(r2 + step, c2));
                } else {
                    out.push(square.at(r1, c2));
                    out.push(square.at(r2, c1));
                }
            }
            [a] => {
                let (r, c) = square.locate(a);
                out.push(square.at(r, c + step));
            }
            _ => {}
        }
    }
    out
}

impl PlayfairEngine {
    fn square(&self, key: &Key) -> Result<KeySquare, EngineError> {
        keyword_indices(CipherType::Playfair, key)?;
        match key {
            Key::Keyword { keyword } => Ok(KeySquare::from_keyword(keyword)),
            _ => Err(EngineError::invalid_key(CipherType::Playfair, "expected a keyword")),
        }
    }
}

impl CipherEngine for PlayfairEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Playfair
    }

    fn name(&self) -> &'static str {
        "Playfair"
    }

    fn description(&self) -> &'static str {
        "Enciphers letter pairs by their positions in a 5x5 keyword square."
    }

    fn alphabet(&self) -> &'static str {
        SQUARE_ALPHABET
    }

    fn preserves_non_letters(&self) -> bool {
        false
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        self.square(key).map(|_| ())
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        parse_keyword(CipherType::Playfair, raw)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let square = self.square(key)?;
        Ok(from_indices(&apply(&square, &square_letters(plaintext), 1)))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let square = self.square(key)?;
        Ok(from_indices(&apply(&square, &square_letters(ciphertext), 4)))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Heuristic {
            log10_size: LOG10_SQUARES,
            neighborhood: Neighborhood::SquareSwap,
        }
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        Key::Keyword {
            keyword: KeySquare::random(rng).to_keyword(),
        }
    }

    fn neighbor(&self, key: &Key, rng: &mut dyn RngCore) -> Key {
        match self.square(key) {
            Ok(square) => Key::Keyword {
                keyword: square.perturbed(rng).to_keyword(),
            },
            Err(_) => self.random_key(rng),
        }
    }
}
