//! Statistical profile types.

use cipherscope_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::alphabet::ALPHABET_SIZE;

/// A substring occurring more than once, with every start position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedSequence {
    pub sequence: String,
    pub positions: Vec<usize>,
}

impl RepeatedSequence {
    pub fn count(&self) -> usize {
        self.positions.len()
    }
}

/// A key length suggested by Kasiski examination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLengthCandidate {
    pub length: usize,
    /// Number of repeat distances divisible by `length`.
    pub support: usize,
    /// Share of distances divisible by `length`, minus the `1 / length`
    /// share expected from unrelated distances.
    pub excess: f64,
}

/// Frequency and information-theoretic metrics of one normalized text.
///
/// Field names follow the `statistics` block of the analysis response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticalProfile {
    pub length: usize,
    #[serde(rename = "unique_chars")]
    pub unique_symbols: usize,
    #[serde(rename = "character_frequencies")]
    pub unigrams: BTreeMap<char, usize>,
    #[serde(rename = "bigram_frequencies")]
    pub bigrams: BTreeMap<String, usize>,
    #[serde(rename = "trigram_frequencies")]
    pub trigrams: BTreeMap<String, usize>,
    pub index_of_coincidence: f64,
    pub entropy: f64,
    pub chi_squared: f64,
    /// Mean English bigram cost of adjacent letters; 0 below two letters.
    pub bigram_fit: f64,
    /// Coincidence index of aligned, non-overlapping letter pairs.
    pub digraph_coincidence: f64,
    pub repeated_sequences: Vec<RepeatedSequence>,
    pub kasiski_distances: Vec<usize>,
    pub key_length_candidates: Vec<KeyLengthCandidate>,
}

impl StatisticalProfile {
    /// Unigram counts as a dense A-Z array.
    pub fn letter_counts(&self) -> [usize; ALPHABET_SIZE] {
        let mut counts = [0; ALPHABET_SIZE];
        for (&c, &n) in &self.unigrams {
            if c.is_ascii_uppercase() {
                counts[(c as u8 - b'A') as usize] = n;
            }
        }
        counts
    }

    /// Most frequent letters, highest count first, ties alphabetical.
    pub fn top_letters(&self, n: usize) -> Vec<(char, usize)> {
        let mut letters: Vec<(char, usize)> = self.unigrams.iter().map(|(&c, &n)| (c, n)).collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        letters.truncate(n);
        letters
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
