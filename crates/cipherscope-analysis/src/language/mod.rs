//! Reference language models used for chi-squared fits and n-gram scoring.
//!
//! English carries a measured bigram table. French, German and Spanish
//! estimate bigrams from their unigrams, with the language's most common
//! pairs boosted.

mod english;
mod french;
mod german;
mod spanish;

use std::sync::LazyLock;

use cipherscope_core::Language;

use crate::alphabet::ALPHABET_SIZE;

/// Percentage assigned to a bigram missing from the reference table.
const BIGRAM_FLOOR_PERCENT: f64 = 0.01;

/// Lowest probability an estimated bigram may take before normalizing.
const ESTIMATED_BIGRAM_FLOOR: f64 = 1e-4;

/// Factor applied to a language's common bigrams over the estimate.
const COMMON_BIGRAM_BOOST: f64 = 4.0;

static ENGLISH: LazyLock<LanguageModel> = LazyLock::new(|| {
    LanguageModel::from_tables(Language::English, &english::UNIGRAM_PERCENT, english::BIGRAM_PERCENT)
});

static FRENCH: LazyLock<LanguageModel> = LazyLock::new(|| {
    LanguageModel::estimated(Language::French, &french::UNIGRAM_PERCENT, french::COMMON_BIGRAMS)
});

static GERMAN: LazyLock<LanguageModel> = LazyLock::new(|| {
    LanguageModel::estimated(Language::German, &german::UNIGRAM_PERCENT, german::COMMON_BIGRAMS)
});

static SPANISH: LazyLock<LanguageModel> = LazyLock::new(|| {
    LanguageModel::estimated(Language::Spanish, &spanish::UNIGRAM_PERCENT, spanish::COMMON_BIGRAMS)
});

/// Unigram probabilities plus a dense bigram cost table for one language.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    language: Language,
    unigram: [f64; ALPHABET_SIZE],
    /// `-log10 P(ab)` indexed by `a * 26 + b`.
    bigram_cost: Vec<f64>,
    bigram_probability: Vec<f64>,
}

impl LanguageModel {
    /// The built-in English model.
    pub fn english() -> &'static LanguageModel {
        &ENGLISH
    }

    pub fn for_language(language: Language) -> &'static LanguageModel {
        match language {
            Language::English => &ENGLISH,
            Language::French => &FRENCH,
            Language::German => &GERMAN,
            Language::Spanish => &SPANISH,
        }
    }

    fn from_tables(
        language: Language,
        unigram_percent: &[f64; ALPHABET_SIZE],
        bigram_percent: &[(&str, f64)],
    ) -> Self {
        let mut unigram = [0.0; ALPHABET_SIZE];
        for (p, pct) in unigram.iter_mut().zip(unigram_percent) {
            *p = pct / 100.0;
        }

        let mut dense = vec![BIGRAM_FLOOR_PERCENT; ALPHABET_SIZE * ALPHABET_SIZE];
        for (pair, pct) in bigram_percent {
            let bytes = pair.as_bytes();
            let index = (bytes[0] - b'A') as usize * ALPHABET_SIZE + (bytes[1] - b'A') as usize;
            dense[index] = *pct;
        }
        Self::with_bigram_weights(language, unigram, &dense)
    }

    /// Bigrams as `P(a) * P(b)`, floored, with `common` pairs boosted.
    fn estimated(language: Language, unigram_percent: &[f64; ALPHABET_SIZE], common: &[&str]) -> Self {
        let total: f64 = unigram_percent.iter().sum();
        let mut unigram = [0.0; ALPHABET_SIZE];
        for (p, pct) in unigram.iter_mut().zip(unigram_percent) {
            *p = pct / total;
        }

        let mut weights: Vec<f64> = (0..ALPHABET_SIZE * ALPHABET_SIZE)
            .map(|i| (unigram[i / ALPHABET_SIZE] * unigram[i % ALPHABET_SIZE]).max(ESTIMATED_BIGRAM_FLOOR))
            .collect();
        for pair in common {
            let bytes = pair.as_bytes();
            let index = (bytes[0] - b'A') as usize * ALPHABET_SIZE + (bytes[1] - b'A') as usize;
            weights[index] *= COMMON_BIGRAM_BOOST;
        }
        Self::with_bigram_weights(language, unigram, &weights)
    }

    fn with_bigram_weights(language: Language, unigram: [f64; ALPHABET_SIZE], weights: &[f64]) -> Self {
        let total: f64 = weights.iter().sum();
        let bigram_probability: Vec<f64> = weights.iter().map(|w| w / total).collect();
        let bigram_cost = bigram_probability.iter().map(|p| -p.log10()).collect();

        Self {
            language,
            unigram,
            bigram_cost,
            bigram_probability,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn name(&self) -> &'static str {
        self.language.name()
    }

    /// Expected relative frequency of the letter at `index`.
    #[inline]
    pub fn unigram_probability(&self, index: u8) -> f64 {
        self.unigram[index as usize]
    }

    pub fn unigram_probabilities(&self) -> &[f64; ALPHABET_SIZE] {
        &self.unigram
    }

    #[inline]
    pub fn bigram_cost(&self, first: u8, second: u8) -> f64 {
        self.bigram_cost[first as usize * ALPHABET_SIZE + second as usize]
    }

    #[inline]
    pub fn bigram_probability(&self, first: u8, second: u8) -> f64 {
        self.bigram_probability[first as usize * ALPHABET_SIZE + second as usize]
    }

    /// Mean bigram cost over a letter-index sequence; `None` below two letters.
    pub fn mean_bigram_cost(&self, indices: &[u8]) -> Option<f64> {
        if indices.len() < 2 {
            return None;
        }
        let total: f64 = indices
            .windows(2)
            .map(|w| self.bigram_cost(w[0], w[1]))
            .sum();
        Some(total / (indices.len() - 1) as f64)
    }

    /// Probability that two letters drawn from this language match.
    pub fn unigram_coincidence(&self) -> f64 {
        self.unigram.iter().map(|p| p * p).sum()
    }

    /// Index of the most frequent letters, most frequent first.
    pub fn frequency_order(&self) -> [u8; ALPHABET_SIZE] {
        let mut order: [u8; ALPHABET_SIZE] = std::array::from_fn(|i| i as u8);
        order.sort_by(|&a, &b| {
            self.unigram[b as usize]
                .total_cmp(&self.unigram[a as usize])
                .then(a.cmp(&b))
        });
        order
    }
}
