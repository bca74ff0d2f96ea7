//! Four-square digraph cipher.
//!
//! Two plain squares (top-left, bottom-right) and two keyed squares
//! (top-right from the first keyword, bottom-left from the second). A
//! trailing single letter maps through the top row of squares.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::{Rng, RngCore};

use super::square::{square_letters, KeySquare, LOG10_SQUARES};
use crate::alphabet::from_indices;
use crate::engines::key::{parse_letters, Key};
use crate::engines::traits::{wrong_shape, CipherEngine, KeySpace, Neighborhood, SQUARE_ALPHABET};

pub struct FourSquareEngine;

struct Squares {
    plain: KeySquare,
    upper: KeySquare,
    lower: KeySquare,
}

impl Squares {
    fn encrypt(&self, letters: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(letters.len());
        for pair in letters.chunks(2) {
            match *pair {
                [a, b] => {
                    let (r1, c1) = self.plain.locate(a);
                    let (r2, c2) = self.plain.locate(b);
                    out.push(self.upper.at(r1, c2));
                    out.push(self.lower.at(r2, c1));
                }
                [a] => {
                    let (r, c) = self.plain.locate(a);
                    out.push(self.upper.at(r, c));
                }
                _ => {}
            }
        }
        out
    }

    fn decrypt(&self, letters: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(letters.len());
        for pair in letters.chunks(2) {
            match *pair {
                [x, y] => {
                    let (r1, c2) = self.upper.locate(x);
                    let (r2, c1) = self.lower.locate(y);
                    out.push(self.plain.at(r1, c1));
                    out.push(self.plain.at(r2, c2));
                }
                [x] => {
                    let (r, c) = self.upper.locate(x);
                    out.push(self.plain.at(r, c));
                }
                _ => {}
            }
        }
        out
    }
}

impl FourSquareEngine {
    fn squares(&self, key: &Key) -> Result<Squares, EngineError> {
        let (first, second) = match key {
            Key::KeywordPair { first, second } => (first, second),
            other => return Err(wrong_shape(CipherType::FourSquare, "keyword pair", other)),
        };
        for keyword in [first, second] {
            if keyword.is_empty() || !keyword.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(EngineError::invalid_key(
                    CipherType::FourSquare,
                    format!("keywords must be non-empty uppercase letters, got '{keyword}'"),
                ));
            }
        }
        Ok(Squares {
            plain: KeySquare::from_keyword(""),
            upper: KeySquare::from_keyword(first),
            lower: KeySquare::from_keyword(second),
        })
    }
}

impl CipherEngine for FourSquareEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::FourSquare
    }

    fn name(&self) -> &'static str {
        "Four-square"
    }

    fn description(&self) -> &'static str {
        "Enciphers letter pairs through two keyed 5x5 squares set diagonally against two plain ones."
    }

    fn alphabet(&self) -> &'static str {
        SQUARE_ALPHABET
    }

    fn preserves_non_letters(&self) -> bool {
        false
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        self.squares(key).map(|_| ())
    }

    /// Two keywords separated by a comma, semicolon or whitespace.
    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        let parts: Vec<&str> = raw
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        let key = match parts.as_slice() {
            [first, second] => match (parse_letters(first), parse_letters(second)) {
                (Some(first), Some(second)) => Key::KeywordPair { first, second },
                _ => {
                    return Err(EngineError::invalid_key(
                        CipherType::FourSquare,
                        "keywords must contain letters only",
                    ))
                }
            },
            _ => {
                return Err(EngineError::invalid_key(
                    CipherType::FourSquare,
                    format!("'{}' is not a pair of keywords", raw.trim()),
                ))
            }
        };
        self.validate_key(&key)?;
        Ok(key)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let squares = self.squares(key)?;
        Ok(from_indices(&squares.encrypt(&square_letters(plaintext))))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let squares = self.squares(key)?;
        Ok(from_indices(&squares.decrypt(&square_letters(ciphertext))))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Heuristic {
            log10_size: 2.0 * LOG10_SQUARES,
            neighborhood: Neighborhood::SquareSwap,
        }
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        Key::KeywordPair {
            first: KeySquare::random(rng).to_keyword(),
            second: KeySquare::random(rng).to_keyword(),
        }
    }

    fn neighbor(&self, key: &Key, rng: &mut dyn RngCore) -> Key {
        let Ok(squares) = self.squares(key) else {
            return self.random_key(rng);
        };
        let (mut upper, mut lower) = (squares.upper, squares.lower);
        if rng.gen_bool(0.5) {
            upper = upper.perturbed(rng);
        } else {
            lower = lower.perturbed(rng);
        }
        Key::KeywordPair {
            first: upper.to_keyword(),
            second: lower.to_keyword(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_example() {
        let key = FourSquareEngine.parse_key("EXAMPLE, KEYWORD").unwrap();
        let ct = FourSquareEngine
            .encrypt("help me obi wan kenobi", &key)
            .unwrap();
        assert_eq!(ct, "FYNFNEHWBXAFFOKHMD");
        assert_eq!(
            FourSquareEngine.decrypt(&ct, &key).unwrap(),
            "HELPMEOBIWANKENOBI"
        );
    }

    #[test]
    fn odd_length_round_trips() {
        let key = FourSquareEngine.parse_key("EXAMPLE,KEYWORD").unwrap();
        let ct = FourSquareEngine.encrypt("ATTACK", &key).unwrap();
        let ct_odd = FourSquareEngine.encrypt("ATTACKS", &key).unwrap();
        assert!(ct_odd.starts_with(&ct));
        assert_eq!(FourSquareEngine.decrypt(&ct_odd, &key).unwrap(), "ATTACKS");
    }
}
