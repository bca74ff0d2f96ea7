//! German reference tables.

use crate::alphabet::ALPHABET_SIZE;

/// Letter frequencies in percent, A through Z, accents folded.
pub(super) const UNIGRAM_PERCENT: [f64; ALPHABET_SIZE] = [
    6.51, 1.89, 3.06, 5.08, 16.40, 1.66, 3.01, 4.76, 7.55, 0.27, 1.21, 3.44, 2.53, // A-M
    9.78, 2.51, 0.79, 0.02, 7.00, 7.27, 6.15, 4.35, 0.67, 1.89, 0.03, 0.04, 1.13, // N-Z
];

/// Bigrams boosted above the unigram independence estimate.
pub(super) const COMMON_BIGRAMS: &[&str] = &[
    "EN", "ER", "CH", "DE", "EI", "ND", "TE", "IN", "IE", "GE", "ES", "NE", "UN", "ST", "RE", "HE",
    "AN", "BE", "SE", "NG", "AU", "SS", "IC", "SC", "DI", "LE", "LI",
];
