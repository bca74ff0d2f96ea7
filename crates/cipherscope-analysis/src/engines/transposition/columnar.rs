//! Columnar transposition with irregular (unpadded) final row.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::{gather, scatter};
use crate::alphabet::{from_indices, indices};
use crate::engines::key::{parse_letters, parse_numbers, Key};
use crate::engines::traits::{wrong_shape, CipherEngine, KeySpace, Neighborhood};

/// Widest column order accepted.
pub const MAX_WIDTH: usize = 64;

pub struct ColumnarEngine;

/// Positions of the plaintext in ciphertext order for `n` letters written
/// row by row under `order.len()` columns and read column by column.
pub(crate) fn read_order(n: usize, order: &[usize]) -> Vec<usize> {
    let width = order.len();
    let mut positions = Vec::with_capacity(n);
    for &col in order {
        positions.extend((col..n).step_by(width));
    }
    positions
}

/// Column order for a keyword: columns are read in alphabetical order of
/// their keyword letter, ties left to right.
pub fn order_from_keyword(keyword: &str) -> Vec<usize> {
    let letters = indices(keyword);
    let mut order: Vec<usize> = (0..letters.len()).collect();
    order.sort_by_key(|&i| (letters[i], i));
    order
}

impl ColumnarEngine {
    fn order<'k>(&self, key: &'k Key) -> Result<&'k [usize], EngineError> {
        let order = match key {
            Key::Columns { order } => order,
            other => return Err(wrong_shape(CipherType::Columnar, "column order", other)),
        };
        let width = order.len();
        if !(2..=MAX_WIDTH).contains(&width) {
            return Err(EngineError::invalid_key(
                CipherType::Columnar,
                format!("column count {width} is outside 2..={MAX_WIDTH}"),
            ));
        }
        let mut seen = vec![false; width];
        for &col in order {
            if col >= width || std::mem::replace(&mut seen[col], true) {
                return Err(EngineError::invalid_key(
                    CipherType::Columnar,
                    format!("column order must be a permutation of 0..{width}"),
                ));
            }
        }
        Ok(order)
    }
}

impl CipherEngine for ColumnarEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Columnar
    }

    fn name(&self) -> &'static str {
        "Columnar transposition"
    }

    fn description(&self) -> &'static str {
        "Writes the text in rows under a keyword and reads the columns in keyword order."
    }

    fn preserves_non_letters(&self) -> bool {
        false
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        self.order(key).map(|_| ())
    }

    /// Accepts a keyword (`ZEBRAS`) or a 0- or 1-based column order (`2,0,1`).
    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        let order = if let Some(numbers) = parse_numbers(raw) {
            let one_based = !numbers.contains(&0);
            numbers
                .into_iter()
                .map(|n| if one_based { n as usize - 1 } else { n as usize })
                .collect()
        } else if let Some(keyword) = parse_letters(raw) {
            order_from_keyword(&keyword)
        } else {
            return Err(EngineError::invalid_key(
                CipherType::Columnar,
                format!("'{}' is neither a keyword nor a column order", raw.trim()),
            ));
        };
        let key = Key::Columns { order };
        self.validate_key(&key)?;
        Ok(key)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let order = self.order(key)?;
        let letters = indices(plaintext);
        let positions = read_order(letters.len(), order);
        Ok(from_indices(&gather(&letters, &positions)))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let order = self.order(key)?;
        let letters = indices(ciphertext);
        let positions = read_order(letters.len(), order);
        Ok(from_indices(&scatter(&letters, &positions)))
    }

    fn describe_key_space(&self) -> KeySpace {
        // Orders of width 2..=10.
        let total: f64 = (2..=10u32).map(|w| (1..=w).map(f64::from).product::<f64>()).sum();
        KeySpace::Heuristic {
            log10_size: total.log10(),
            neighborhood: Neighborhood::SwapPair,
        }
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        let width = rng.gen_range(3..=8);
        let mut order: Vec<usize> = (0..width).collect();
        order.shuffle(rng);
        Key::Columns { order }
    }

    fn neighbor(&self, key: &Key, rng: &mut dyn RngCore) -> Key {
        let Key::Columns { order } = key else {
            return self.random_key(rng);
        };
        let mut order = order.clone();
        if order.len() < 2 {
            return self.random_key(rng);
        }
        let i = rng.gen_range(0..order.len());
        let mut j = rng.gen_range(0..order.len() - 1);
        if j >= i {
            j += 1;
        }
        order.swap(i, j);
        Key::Columns { order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zebras_example() {
        let key = ColumnarEngine.parse_key("ZEBRAS").unwrap();
        assert_eq!(key, Key::Columns { order: vec![4, 2, 1, 3, 5, 0] });
        let ct = ColumnarEngine
            .encrypt("WE ARE DISCOVERED FLEE AT ONCE", &key)
            .unwrap();
        assert_eq!(ct, "EVLNACDTESEAROFODEECWIREE");
        assert_eq!(
            ColumnarEngine.decrypt(&ct, &key).unwrap(),
            "WEAREDISCOVEREDFLEEATONCE"
        );
    }

    #[test]
    fn numeric_orders() {
        assert_eq!(
            ColumnarEngine.parse_key("2,0,1").unwrap(),
            Key::Columns { order: vec![2, 0, 1] }
        );
        assert_eq!(
            ColumnarEngine.parse_key("3,1,2").unwrap(),
            Key::Columns { order: vec![2, 0, 1] }
        );
        assert!(ColumnarEngine.parse_key("0,0,1").is_err());
        assert!(ColumnarEngine.parse_key("0").is_err());
    }
}
