//! Hill cipher over 2x2 and 3x3 matrices mod 26.
//!
//! Letters are taken in blocks of `size`; each block `p` becomes `K·p`.
//! A trailing partial block is left as is.

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::{Rng, RngCore};

use crate::alphabet::{from_indices, gcd, indices, mod_inverse};
use crate::engines::key::{parse_letters, parse_numbers, Key};
use crate::engines::traits::{wrong_shape, CipherEngine, KeySpace, Neighborhood};

/// Invertible 2x2 matrices mod 26: 157248.
const LOG10_INVERTIBLE_2X2: f64 = 5.1966;

const FALLBACK_2X2: [u32; 4] = [3, 3, 2, 5];

pub struct HillEngine;

/// Square matrix mod 26, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Matrix {
    size: usize,
    entries: Vec<i64>,
}

impl Matrix {
    pub(crate) fn new(size: usize, entries: &[u32]) -> Self {
        Self {
            size,
            entries: entries.iter().map(|&e| i64::from(e % 26)).collect(),
        }
    }

    fn get(&self, row: usize, col: usize) -> i64 {
        self.entries[row * self.size + col]
    }

    pub(crate) fn determinant(&self) -> i64 {
        let m = |r, c| self.get(r, c);
        let det = match self.size {
            2 => m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
            3 => {
                m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
                    - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
                    + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
            }
            _ => 0,
        };
        det.rem_euclid(26)
    }

    pub(crate) fn is_invertible(&self) -> bool {
        gcd(self.determinant() as u32, 26) == 1
    }

    /// Inverse mod 26 via the adjugate.
    pub(crate) fn inverse(&self) -> Option<Matrix> {
        let det_inv = mod_inverse(self.determinant(), 26)?;
        let n = self.size;
        let m = |r: usize, c: usize| self.get(r % n, c % n);
        let mut entries = vec![0i64; n * n];
        for row in 0..n {
            for col in 0..n {
                // Adjugate entry (row, col) is the cofactor of (col, row).
                let cofactor = match n {
                    2 => {
                        let sign = if (row + col) % 2 == 0 { 1 } else { -1 };
                        sign * m(1 - col, 1 - row)
                    }
                    _ => {
                        m(col + 1, row + 1) * m(col + 2, row + 2)
                            - m(col + 1, row + 2) * m(col + 2, row + 1)
                    }
                };
                entries[row * n + col] = (cofactor * det_inv).rem_euclid(26);
            }
        }
        Some(Matrix { size: n, entries })
    }

    pub(crate) fn apply(&self, letters: &[u8]) -> Vec<u8> {
        let n = self.size;
        let mut out = Vec::with_capacity(letters.len());
        for block in letters.chunks(n) {
            if block.len() < n {
                out.extend_from_slice(block);
                continue;
            }
            for row in 0..n {
                let sum: i64 = (0..n).map(|col| self.get(row, col) * i64::from(block[col])).sum();
                out.push(sum.rem_euclid(26) as u8);
            }
        }
        out
    }

    pub(crate) fn to_key(&self) -> Key {
        Key::Matrix {
            size: self.size,
            entries: self.entries.iter().map(|&e| e as u32).collect(),
        }
    }
}

impl HillEngine {
    fn matrix(&self, key: &Key) -> Result<Matrix, EngineError> {
        let (size, entries) = match key {
            Key::Matrix { size, entries } => (*size, entries),
            other => return Err(wrong_shape(CipherType::Hill, "matrix", other)),
        };
        if !matches!(size, 2 | 3) {
            return Err(EngineError::invalid_key(
                CipherType::Hill,
                format!("matrix size {size} is not 2 or 3"),
            ));
        }
        if entries.len() != size * size {
            return Err(EngineError::invalid_key(
                CipherType::Hill,
                format!("a {size}x{size} matrix needs {} entries, got {}", size * size, entries.len()),
            ));
        }
        if let Some(bad) = entries.iter().find(|&&e| e >= 26) {
            return Err(EngineError::invalid_key(
                CipherType::Hill,
                format!("entry {bad} is outside 0..=25"),
            ));
        }
        let matrix = Matrix::new(size, entries);
        if !matrix.is_invertible() {
            return Err(EngineError::invalid_key(
                CipherType::Hill,
                format!("determinant {} is not coprime with 26", matrix.determinant()),
            ));
        }
        Ok(matrix)
    }
}

pub(crate) fn random_invertible(rng: &mut dyn RngCore, size: usize) -> Matrix {
    for _ in 0..64 {
        let entries: Vec<u32> = (0..size * size).map(|_| rng.gen_range(0..26)).collect();
        let matrix = Matrix::new(size, &entries);
        if matrix.is_invertible() {
            return matrix;
        }
    }
    Matrix::new(2, &FALLBACK_2X2)
}

impl CipherEngine for HillEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::Hill
    }

    fn name(&self) -> &'static str {
        "Hill"
    }

    fn description(&self) -> &'static str {
        "Multiplies blocks of letters by an invertible matrix mod 26."
    }

    fn preserves_non_letters(&self) -> bool {
        false
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        self.matrix(key).map(|_| ())
    }

    /// Four or nine numbers (row-major) or a four- or nine-letter keyword.
    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        let entries = parse_numbers(raw)
            .or_else(|| parse_letters(raw).map(|k| indices(&k).into_iter().map(u32::from).collect()))
            .ok_or_else(|| {
                EngineError::invalid_key(
                    CipherType::Hill,
                    format!("'{}' is neither a matrix nor a keyword", raw.trim()),
                )
            })?;
        let size = match entries.len() {
            4 => 2,
            9 => 3,
            n => {
                return Err(EngineError::invalid_key(
                    CipherType::Hill,
                    format!("expected 4 or 9 entries, got {n}"),
                ))
            }
        };
        let key = Key::Matrix { size, entries };
        self.validate_key(&key)?;
        Ok(key)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let matrix = self.matrix(key)?;
        Ok(from_indices(&matrix.apply(&indices(plaintext))))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let inverse = self.matrix(key)?.inverse().ok_or_else(|| {
            EngineError::invalid_key(CipherType::Hill, "matrix has no inverse mod 26")
        })?;
        Ok(from_indices(&inverse.apply(&indices(ciphertext))))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Heuristic {
            log10_size: LOG10_INVERTIBLE_2X2,
            neighborhood: Neighborhood::MatrixEntry,
        }
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        random_invertible(rng, 2).to_key()
    }

    fn neighbor(&self, key: &Key, rng: &mut dyn RngCore) -> Key {
        let Ok(matrix) = self.matrix(key) else {
            return self.random_key(rng);
        };
        for _ in 0..32 {
            let mut next = matrix.clone();
            let pos = rng.gen_range(0..next.entries.len());
            next.entries[pos] = (next.entries[pos] + rng.gen_range(1..26)) % 26;
            if next.is_invertible() {
                return next.to_key();
            }
        }
        matrix.to_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_3x3() {
        let key = HillEngine.parse_key("GYBNQKURP").unwrap();
        assert_eq!(HillEngine.encrypt("ACT", &key).unwrap(), "POH");
        assert_eq!(HillEngine.decrypt("POH", &key).unwrap(), "ACT");
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        for entries in [vec![3, 3, 2, 5], vec![6, 24, 1, 13, 16, 10, 20, 17, 15]] {
            let size = if entries.len() == 4 { 2 } else { 3 };
            let m = Matrix::new(size, &entries);
            let inv = m.inverse().unwrap();
            let probe: Vec<u8> = (0..size as u8).map(|i| i * 7 + 1).collect();
            assert_eq!(inv.apply(&m.apply(&probe)), probe);
        }
    }

    #[test]
    fn partial_block_is_kept() {
        let key = Key::Matrix { size: 2, entries: vec![3, 3, 2, 5] };
        let ct = HillEngine.encrypt("HELPX", &key).unwrap();
        assert_eq!(ct.len(), 5);
        assert!(ct.ends_with('X'));
        assert_eq!(HillEngine.decrypt(&ct, &key).unwrap(), "HELPX");
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let err = HillEngine
            .validate_key(&Key::Matrix { size: 2, entries: vec![2, 4, 1, 2] })
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidKey { .. }));
        assert!(HillEngine.parse_key("1,2,3").is_err());
    }
}
