//! Sanity filter applied to merged candidates.
//!
//! Drops text that cannot be natural language: almost no vowels, long runs
//! of one letter, or a unigram distribution far from the reference.

use crate::alphabet::{indices, VOWELS};
use crate::language::LanguageModel;
use crate::stats::frequency::chi_squared_of;

#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter {
    /// Minimum share of vowels among the letters.
    pub min_vowel_ratio: f64,
    /// Runs of this many identical letters reject the text.
    pub max_run: usize,
    /// Ceiling for chi-squared scaled to a 100-letter sample.
    pub max_scaled_chi_squared: f64,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            min_vowel_ratio: 0.05,
            max_run: 5,
            max_scaled_chi_squared: 300.0,
        }
    }
}

impl CandidateFilter {
    pub fn accepts(&self, text: &str, model: &LanguageModel) -> bool {
        let letters = indices(text);
        if letters.is_empty() {
            return false;
        }
        let n = letters.len() as f64;

        let vowels = letters
            .iter()
            .filter(|&&i| VOWELS.contains(&(b'A' + i)))
            .count();
        if (vowels as f64) / n < self.min_vowel_ratio {
            return false;
        }

        if longest_run(&letters) >= self.max_run {
            return false;
        }

        chi_squared_of(&letters, model) * 100.0 / n <= self.max_scaled_chi_squared
    }

    /// Keep accepted items, each checked against its own reference model;
    /// if none pass, keep the first one. `items` is expected best first.
    pub fn apply<T>(
        &self,
        items: Vec<T>,
        text: impl Fn(&T) -> &str,
        model: impl Fn(&T) -> &'static LanguageModel,
    ) -> Vec<T> {
        let mut rejected_best = None;
        let mut kept = Vec::with_capacity(items.len());
        for item in items {
            if self.accepts(text(&item), model(&item)) {
                kept.push(item);
            } else if rejected_best.is_none() && kept.is_empty() {
                rejected_best = Some(item);
            }
        }
        if kept.is_empty() {
            kept.extend(rejected_best);
        }
        kept
    }
}

fn longest_run(letters: &[u8]) -> usize {
    let mut best = 0;
    let mut run = 0;
    let mut prev = None;
    for &l in letters {
        run = if prev == Some(l) { run + 1 } else { 1 };
        prev = Some(l);
        best = best.max(run);
    }
    best
}
