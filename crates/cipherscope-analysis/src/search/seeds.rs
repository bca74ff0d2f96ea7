//! Starting keys for hill climbing, derived from the ciphertext.
//!
//! Seeds put a restart close to the answer; random keys fill the remaining
//! restarts.

use cipherscope_core::CipherType;

use crate::alphabet::{from_indices, ALPHABET_SIZE};
use crate::engines::polygraphic::hill::Matrix;
use crate::engines::Key;
use crate::language::LanguageModel;
use crate::scoring::Scorer;
use crate::stats::frequency::{chi_squared_of, index_of_coincidence, letter_counts};

/// Periods tried per periodic cipher.
const PERIODS_TRIED: usize = 3;
/// Longest autokey primer seeded.
const MAX_PRIMER: usize = 6;
/// Best rows kept in the Hill row attack.
const HILL_ROWS: usize = 8;
const HILL_SEEDS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SeedLimits {
    pub max_key_length: usize,
    pub max_width: usize,
}

pub(crate) fn seed_keys(
    cipher_type: CipherType,
    letters: &[u8],
    scorer: &Scorer,
    limits: SeedLimits,
) -> Vec<Key> {
    if letters.is_empty() {
        return Vec::new();
    }
    let model = scorer.model();
    match cipher_type {
        CipherType::SimpleSubstitution => vec![frequency_rank_key(letters, model)],
        CipherType::Vigenere | CipherType::Beaufort => {
            let beaufort = cipher_type == CipherType::Beaufort;
            likely_periods(letters, limits.max_key_length, model)
                .into_iter()
                .map(|period| {
                    let keyword: Vec<u8> = (0..period)
                        .map(|col| {
                            let column: Vec<u8> = letters[col..].iter().step_by(period).copied().collect();
                            best_shift(model, |k| {
                                column
                                    .iter()
                                    .map(|&c| if beaufort { (k + 26 - c) % 26 } else { (c + 26 - k) % 26 })
                                    .collect()
                            })
                        })
                        .collect();
                    Key::Keyword { keyword: from_indices(&keyword) }
                })
                .collect()
        }
        CipherType::Autokey => {
            let max_primer = MAX_PRIMER.min(letters.len() / 2).max(1);
            (1..=max_primer)
                .map(|primer_len| {
                    let primer: Vec<u8> = (0..primer_len)
                        .map(|col| {
                            let column: Vec<u8> = letters[col..].iter().step_by(primer_len).copied().collect();
                            best_shift(model, |k| autokey_chain(&column, k))
                        })
                        .collect();
                    Key::Keyword { keyword: from_indices(&primer) }
                })
                .collect()
        }
        CipherType::Columnar => {
            let max_width = limits.max_width.min(letters.len()).max(2);
            (2..=max_width)
                .map(|width| Key::Columns { order: (0..width).collect() })
                .collect()
        }
        CipherType::Hill => hill_row_attack(letters, scorer),
        _ => Vec::new(),
    }
}

/// Substitution key mapping the k-th most frequent ciphertext letter to the
/// k-th most frequent letter of the language.
fn frequency_rank_key(letters: &[u8], model: &LanguageModel) -> Key {
    let counts = letter_counts(letters);
    let mut cipher_order: Vec<u8> = (0..ALPHABET_SIZE as u8).collect();
    cipher_order.sort_by(|&a, &b| counts[b as usize].cmp(&counts[a as usize]).then(a.cmp(&b)));
    let mut alphabet = [0u8; ALPHABET_SIZE];
    for (plain, cipher) in model.frequency_order().iter().zip(&cipher_order) {
        alphabet[*plain as usize] = *cipher;
    }
    Key::Alphabet { alphabet: from_indices(&alphabet) }
}

/// Periods whose columns look most like monoalphabetic text.
fn likely_periods(letters: &[u8], max_key_length: usize, model: &LanguageModel) -> Vec<usize> {
    let target = model.unigram_coincidence();
    let max_period = max_key_length.min(letters.len() / 2).max(1);
    let mut ranked: Vec<(usize, f64)> = (1..=max_period)
        .map(|period| {
            let total: f64 = (0..period)
                .map(|col| {
                    let column: Vec<u8> = letters[col..].iter().step_by(period).copied().collect();
                    index_of_coincidence(&letter_counts(&column))
                })
                .sum();
            (period, (total / period as f64 - target).abs())
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    ranked.into_iter().take(PERIODS_TRIED).map(|(p, _)| p).collect()
}

/// Key letter whose decryption of one column has the lowest chi-squared.
fn best_shift(model: &LanguageModel, decrypt: impl Fn(u8) -> Vec<u8>) -> u8 {
    (0..26u8)
        .map(|k| (k, chi_squared_of(&decrypt(k), model)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        .map_or(0, |(k, _)| k)
}

/// Plaintext of one autokey column given its primer letter: each letter's
/// key is the previous plaintext letter of the same column.
fn autokey_chain(column: &[u8], primer: u8) -> Vec<u8> {
    let mut key = primer;
    column
        .iter()
        .map(|&c| {
            let p = (c + 26 - key) % 26;
            key = p;
            p
        })
        .collect()
}

/// Each row of a 2x2 decryption matrix yields every other plaintext letter
/// on its own, so rows are ranked independently and the best pairs combined.
fn hill_row_attack(letters: &[u8], scorer: &Scorer) -> Vec<Key> {
    if letters.len() < 4 {
        return Vec::new();
    }
    let model = scorer.model();
    let blocks: Vec<(u8, u8)> = letters.chunks_exact(2).map(|b| (b[0], b[1])).collect();

    let mut rows: Vec<((u8, u8), f64)> = (0..26u8)
        .flat_map(|a| (0..26u8).map(move |b| (a, b)))
        .filter(|&(a, b)| a % 2 == 1 || b % 2 == 1)
        .filter(|&(a, b)| a % 13 != 0 || b % 13 != 0)
        .map(|(a, b)| {
            let stream: Vec<u8> = blocks
                .iter()
                .map(|&(c0, c1)| ((a as u32 * c0 as u32 + b as u32 * c1 as u32) % 26) as u8)
                .collect();
            ((a, b), chi_squared_of(&stream, model))
        })
        .collect();
    rows.sort_by(|x, y| x.1.total_cmp(&y.1).then(x.0.cmp(&y.0)));
    rows.truncate(HILL_ROWS);

    let mut keys: Vec<(Key, f64)> = Vec::new();
    for &((a, b), _) in &rows {
        for &((c, d), _) in &rows {
            let decrypt = Matrix::new(2, &[a.into(), b.into(), c.into(), d.into()]);
            let Some(encrypt) = decrypt.inverse() else {
                continue;
            };
            if let Some(score) = scorer.score_indices(&decrypt.apply(letters)) {
                keys.push((encrypt.to_key(), score));
            }
        }
    }
    keys.sort_by(|x, y| x.1.total_cmp(&y.1).then_with(|| x.0.to_string().cmp(&y.0.to_string())));
    keys.into_iter().take(HILL_SEEDS).map(|(k, _)| k).collect()
}
