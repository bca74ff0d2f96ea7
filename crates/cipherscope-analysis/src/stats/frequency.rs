//! Frequency counts and the scalar metrics derived from them.

use cipherscope_core::types::collections::BTreeMap;

use crate::alphabet::{letter, ALPHABET_SIZE};
use crate::language::LanguageModel;

pub fn letter_counts(indices: &[u8]) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for &i in indices {
        counts[i as usize] += 1;
    }
    counts
}

/// Counts of every adjacent `width`-gram, keyed by the n-gram text.
pub fn ngram_counts(indices: &[u8], width: usize) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    if width == 0 || indices.len() < width {
        return counts;
    }
    for window in indices.windows(width) {
        let gram: String = window.iter().map(|&i| letter(i)).collect();
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// `sum(f * (f - 1)) / (n * (n - 1))`, 0 when `n < 2`.
pub fn index_of_coincidence(counts: &[usize]) -> f64 {
    let n: usize = counts.iter().sum();
    if n < 2 {
        return 0.0;
    }
    let matches: usize = counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
    matches as f64 / (n * (n - 1)) as f64
}

/// Shannon entropy in bits of the distribution given by `counts`.
pub fn entropy(counts: &[usize]) -> f64 {
    let n: usize = counts.iter().sum();
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let h: f64 = counts
        .iter()
        .filter(|&&f| f > 0)
        .map(|&f| {
            let p = f as f64 / n;
            -p * p.log2()
        })
        .sum();
    if h > 0.0 {
        h
    } else {
        0.0
    }
}

/// Chi-squared of observed letter counts against the model's unigrams.
/// Letters the model gives zero probability are skipped.
pub fn chi_squared(counts: &[usize; ALPHABET_SIZE], model: &LanguageModel) -> f64 {
    let n: usize = counts.iter().sum();
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    counts
        .iter()
        .enumerate()
        .filter_map(|(i, &observed)| {
            let expected = model.unigram_probability(i as u8) * n;
            (expected > 0.0).then(|| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
        })
        .sum()
}

/// Chi-squared of a letter-index sequence.
pub fn chi_squared_of(indices: &[u8], model: &LanguageModel) -> f64 {
    chi_squared(&letter_counts(indices), model)
}

/// Coincidence index over aligned pairs `(0,1), (2,3), ...`.
pub fn digraph_coincidence(indices: &[u8]) -> f64 {
    let mut counts = vec![0usize; ALPHABET_SIZE * ALPHABET_SIZE];
    for pair in indices.chunks_exact(2) {
        counts[pair[0] as usize * ALPHABET_SIZE + pair[1] as usize] += 1;
    }
    index_of_coincidence(&counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::indices;

    #[test]
    fn ioc_of_short_text_is_zero() {
        assert_eq!(index_of_coincidence(&letter_counts(&indices("A"))), 0.0);
        assert_eq!(index_of_coincidence(&letter_counts(&[])), 0.0);
    }

    #[test]
    fn ioc_of_repeated_letter_is_one() {
        assert_eq!(index_of_coincidence(&letter_counts(&indices("AAAA"))), 1.0);
    }

    #[test]
    fn entropy_of_uniform_pairs() {
        let h = entropy(&letter_counts(&indices("ABAB")));
        assert!((h - 1.0).abs() < 1e-12);
        assert_eq!(entropy(&letter_counts(&indices("ZZZ"))), 0.0);
    }

    #[test]
    fn ngram_counts_overlap() {
        let counts = ngram_counts(&indices("ABAB"), 2);
        assert_eq!(counts.get("AB"), Some(&2));
        assert_eq!(counts.get("BA"), Some(&1));
        assert!(ngram_counts(&indices("AB"), 3).is_empty());
    }

    #[test]
    fn digraphs_are_aligned() {
        // AB AB CD: two AB pairs out of three.
        let ioc = digraph_coincidence(&indices("ABABCD"));
        assert!((ioc - 2.0 / 6.0).abs() < 1e-12);
    }
}
