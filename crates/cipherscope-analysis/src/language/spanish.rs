//! Spanish reference tables.

use crate::alphabet::ALPHABET_SIZE;

/// Letter frequencies in percent, A through Z, accents folded.
pub(super) const UNIGRAM_PERCENT: [f64; ALPHABET_SIZE] = [
    12.53, 1.42, 4.68, 5.86, 13.68, 0.69, 1.01, 0.70, 6.25, 0.44, 0.01, 4.97, 3.16, // A-M
    6.71, 8.68, 2.51, 0.88, 6.87, 7.98, 4.63, 3.93, 0.90, 0.02, 0.22, 0.90, 0.52, // N-Z
];

/// Bigrams boosted above the unigram independence estimate.
pub(super) const COMMON_BIGRAMS: &[&str] = &[
    "DE", "EN", "ES", "EL", "LA", "OS", "UE", "AS", "ER", "RA", "AN", "AL", "AD", "ON", "AR", "RE",
    "SE", "NT", "OR", "DO", "CO", "TA", "CI", "TE", "IO", "IA", "ND",
];
