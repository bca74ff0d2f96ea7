//! StatisticsEngine: frequency and information-theoretic profile of a text.

pub mod frequency;
pub mod kasiski;
pub mod repeats;
pub mod types;

use cipherscope_core::config::AnalysisConfig;
use cipherscope_core::types::collections::BTreeMap;

pub use types::{KeyLengthCandidate, RepeatedSequence, StatisticalProfile};

use crate::alphabet::{indices, letter};
use crate::language::LanguageModel;
use crate::text::NormalizedText;
use repeats::RepeatBounds;

/// Computes a [`StatisticalProfile`]. Pure: the same text and settings
/// always give the same profile.
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    bounds: RepeatBounds,
    max_key_length: usize,
    repeat_index_threshold: usize,
    model: &'static LanguageModel,
}

impl StatisticsEngine {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            bounds: RepeatBounds {
                min_length: config.effective_min_repeat_length(),
                max_length: config.effective_max_repeat_length(),
                max_results: config.effective_max_repeats(),
            },
            max_key_length: config.effective_max_key_length(),
            repeat_index_threshold: config.effective_repeat_index_threshold(),
            model: LanguageModel::english(),
        }
    }

    pub fn model(&self) -> &'static LanguageModel {
        self.model
    }

    /// Profile the letters of `text`. Empty input gives the all-zero profile.
    pub fn profile(&self, text: &NormalizedText) -> StatisticalProfile {
        self.profile_letters(text.letters())
    }

    /// Profile an arbitrary string; non-letters are ignored.
    pub fn profile_letters(&self, text: &str) -> StatisticalProfile {
        let idx = indices(text);
        if idx.is_empty() {
            return StatisticalProfile::default();
        }

        let counts = frequency::letter_counts(&idx);
        let unigrams: BTreeMap<char, usize> = counts
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .map(|(i, &n)| (letter(i as u8), n))
            .collect();

        let repeated_sequences =
            repeats::find_repeats(&idx, self.bounds, self.repeat_index_threshold);
        let kasiski_distances = kasiski::distances(&repeated_sequences);
        let key_length_candidates =
            kasiski::key_length_candidates(&kasiski_distances, self.max_key_length);

        StatisticalProfile {
            length: idx.len(),
            unique_symbols: unigrams.len(),
            unigrams,
            bigrams: frequency::ngram_counts(&idx, 2),
            trigrams: frequency::ngram_counts(&idx, 3),
            index_of_coincidence: frequency::index_of_coincidence(&counts),
            entropy: frequency::entropy(&counts),
            chi_squared: frequency::chi_squared(&counts, self.model),
            bigram_fit: self.model.mean_bigram_cost(&idx).unwrap_or(0.0),
            digraph_coincidence: frequency::digraph_coincidence(&idx),
            repeated_sequences,
            kasiski_distances,
            key_length_candidates,
        }
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}
