//! French reference tables.

use crate::alphabet::ALPHABET_SIZE;

/// Letter frequencies in percent, A through Z, accents folded.
pub(super) const UNIGRAM_PERCENT: [f64; ALPHABET_SIZE] = [
    7.64, 0.90, 3.18, 3.67, 14.72, 1.07, 0.87, 0.74, 7.53, 0.55, 0.05, 5.46, 2.97, // A-M
    7.10, 5.27, 2.52, 1.36, 6.55, 7.95, 7.24, 6.31, 1.83, 0.05, 0.39, 0.31, 0.14, // N-Z
];

/// Bigrams boosted above the unigram independence estimate.
pub(super) const COMMON_BIGRAMS: &[&str] = &[
    "ES", "LE", "DE", "EN", "RE", "NT", "ON", "ER", "OU", "AN", "TE", "AI", "SE", "IT", "ET", "ME",
    "IS", "QU", "LA", "NE", "LI", "EL", "UR", "EU", "CE", "TI", "EM", "PA", "RI", "NS", "SS", "LL",
    "AU", "CO", "TR", "RA",
];
