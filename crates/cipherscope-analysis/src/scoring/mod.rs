//! Language-likeness scoring of candidate plaintexts.
//!
//! Score is a cost, lower is better:
//! `mean bigram -log10 P + 0.1 * chi_squared / n` over the letters, taken
//! against each configured language; the cheapest language wins.
//! Confidence maps the cost through a fixed logistic onto [0, 1].

pub mod filter;

pub use filter::CandidateFilter;

use cipherscope_core::Language;
use serde::{Deserialize, Serialize};

use crate::alphabet::indices;
use crate::language::LanguageModel;
use crate::stats::frequency::chi_squared_of;

/// Weight of the per-letter unigram chi-squared in the cost.
pub const CHI_SQUARED_WEIGHT: f64 = 0.1;

/// Cost at which confidence is one half.
pub const CONFIDENCE_MIDPOINT: f64 = 2.95;

/// Logistic scale: cost distance for a factor-e change in odds.
pub const CONFIDENCE_SCALE: f64 = 0.18;

/// The cheapest language for a text and its cost there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageFit {
    pub language: Language,
    pub score: f64,
}

/// Scores text against one or more language models. The first model is the
/// primary one, used for chi-squared reporting and key seeding.
#[derive(Debug, Clone)]
pub struct Scorer {
    models: Vec<&'static LanguageModel>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::for_languages(Language::all())
    }
}

impl Scorer {
    /// Single-language scorer.
    pub fn new(model: &'static LanguageModel) -> Self {
        Self { models: vec![model] }
    }

    /// Ties go to the language listed first. An empty list means English.
    pub fn for_languages(languages: &[Language]) -> Self {
        let mut models: Vec<&'static LanguageModel> =
            languages.iter().map(|&l| LanguageModel::for_language(l)).collect();
        if models.is_empty() {
            models.push(LanguageModel::english());
        }
        Self { models }
    }

    pub fn model(&self) -> &'static LanguageModel {
        self.models[0]
    }

    pub fn models(&self) -> &[&'static LanguageModel] {
        &self.models
    }

    /// Cost of `text`; `None` when it has no letters.
    pub fn score(&self, text: &str) -> Option<f64> {
        self.score_indices(&indices(text))
    }

    /// Cost of a letter-index sequence under its best language.
    pub fn score_indices(&self, letters: &[u8]) -> Option<f64> {
        self.evaluate_indices(letters).map(|fit| fit.score)
    }

    /// Best language for `text`; `None` when it has no letters.
    pub fn evaluate(&self, text: &str) -> Option<LanguageFit> {
        self.evaluate_indices(&indices(text))
    }

    pub fn evaluate_indices(&self, letters: &[u8]) -> Option<LanguageFit> {
        let mut best: Option<LanguageFit> = None;
        for model in &self.models {
            let score = cost_under(model, letters)?;
            if best.map_or(true, |b| score < b.score) {
                best = Some(LanguageFit {
                    language: model.language(),
                    score,
                });
            }
        }
        best
    }

    /// Monotonically decreasing in `score`, saturating at 0 and 1.
    pub fn confidence(&self, score: f64) -> f64 {
        confidence_for(score)
    }

    /// Unigram chi-squared of the letters of `text` against the primary model.
    pub fn chi_squared(&self, text: &str) -> f64 {
        chi_squared_of(&indices(text), self.model())
    }
}

/// A single letter falls back to its unigram cost.
fn cost_under(model: &LanguageModel, letters: &[u8]) -> Option<f64> {
    let n = letters.len();
    if n == 0 {
        return None;
    }
    let base = match model.mean_bigram_cost(letters) {
        Some(cost) => cost,
        None => -model.unigram_probability(letters[0]).max(f64::MIN_POSITIVE).log10(),
    };
    let chi = chi_squared_of(letters, model);
    Some(base + CHI_SQUARED_WEIGHT * chi / n as f64)
}

/// Logistic confidence for a cost. NaN maps to 0.
pub fn confidence_for(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    let c = 1.0 / (1.0 + ((score - CONFIDENCE_MIDPOINT) / CONFIDENCE_SCALE).exp());
    if c.is_finite() {
        c.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_beats_random() {
        let scorer = Scorer::default();
        let english = scorer
            .score("It was the best of times, it was the worst of times, it was the age of wisdom")
            .unwrap();
        let noise = scorer.score("QXZJQXZJKVQXZJ").unwrap();
        assert!(english < noise);
        assert!(scorer.confidence(english) > 0.9);
        assert!(scorer.confidence(noise) < 0.01);
    }

    #[test]
    fn test_hello_world_calibration() {
        let scorer = Scorer::default();
        let s = scorer.score("HELLO WORLD").unwrap();
        assert!((s - 2.648).abs() < 0.01, "score {s}");
        assert!(scorer.confidence(s) > 0.8);
    }

    #[test]
    fn test_french_prose_fits_french() {
        let scorer = Scorer::default();
        let fit = scorer
            .evaluate(
                "Depuis des siecles les hommes cherchent a cacher le sens de leurs messages \
                 pour que seuls les destinataires puissent les lire",
            )
            .unwrap();
        assert_eq!(fit.language, Language::French);
        assert!(scorer.confidence(fit.score) > 0.9, "score {}", fit.score);

        let english_only = Scorer::new(LanguageModel::english());
        let hello = english_only.evaluate("HELLO WORLD").unwrap();
        assert_eq!(hello.language, Language::English);
        assert_eq!(Some(hello.score), scorer.score("HELLO WORLD"));
    }

    #[test]
    fn test_language_list_order_and_fallback() {
        let scorer = Scorer::for_languages(&[Language::German, Language::English]);
        assert_eq!(scorer.model().language(), Language::German);
        assert_eq!(scorer.models().len(), 2);
        let empty = Scorer::for_languages(&[]);
        assert_eq!(empty.model().language(), Language::English);
    }

    #[test]
    fn test_no_letters_no_score() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score(""), None);
        assert_eq!(scorer.score("123 !?"), None);
        assert!(scorer.score("A").is_some());
    }

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(confidence_for(f64::NAN), 0.0);
        assert_eq!(confidence_for(f64::INFINITY), 0.0);
        assert_eq!(confidence_for(f64::NEG_INFINITY), 1.0);
        assert!((confidence_for(CONFIDENCE_MIDPOINT) - 0.5).abs() < 1e-12);
        assert!(confidence_for(2.0) > confidence_for(3.0));
    }
}
