//! Analysis configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Language;

/// How raw input is turned into the text the pipeline works on.
///
/// Statistics always run on the letters-only form. The mode decides the
/// display form handed to key search, so substitution engines can keep
/// word boundaries and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Uppercase letters only.
    #[default]
    Strict,
    /// Uppercase letters and single spaces.
    PreserveSpaces,
    /// Uppercase letters with spaces and punctuation kept.
    PreservePunctuation,
    /// Letters only, original case kept.
    PreserveCase,
    /// Input passed through untouched.
    Raw,
}

impl NormalizationMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::PreserveSpaces => "preserve_spaces",
            Self::PreservePunctuation => "preserve_punctuation",
            Self::PreserveCase => "preserve_case",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalizationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "preserve_spaces" => Ok(Self::PreserveSpaces),
            "preserve_punctuation" => Ok(Self::PreservePunctuation),
            "preserve_case" => Ok(Self::PreserveCase),
            "raw" => Ok(Self::Raw),
            other => Err(format!("unknown normalization mode '{other}'")),
        }
    }
}

/// Configuration for profiling, detection and pipeline orchestration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum ciphertext length in characters. Default: 100000.
    pub max_ciphertext_length: Option<usize>,
    /// Hypotheses below this confidence skip key search. Default: 0.3.
    pub min_hypothesis_confidence: Option<f64>,
    /// Candidates kept in the final result. Default: 10.
    pub max_candidates: Option<usize>,
    /// Shortest repeated sequence. Default: 3.
    pub min_repeat_length: Option<usize>,
    /// Longest repeated sequence. Default: 10.
    pub max_repeat_length: Option<usize>,
    /// Repeated sequences kept in the profile. Default: 20.
    pub max_repeats: Option<usize>,
    /// Largest Kasiski key-length candidate. Default: 20.
    pub max_key_length: Option<usize>,
    /// Text length above which repeats use a hash index. Default: 2000.
    pub repeat_index_threshold: Option<usize>,
    /// Input normalization. Default: strict.
    pub normalization: Option<NormalizationMode>,
    /// Recovery worker pool size. Default: 4.
    pub max_parallel_engines: Option<usize>,
    /// Candidate confidence that ends tiered recovery early. Default: 0.95.
    pub early_exit_confidence: Option<f64>,
    /// Drop implausible candidates after recovery. Default: true.
    pub filter_candidates: Option<bool>,
    /// Languages candidates are scored against. Default: all supported.
    pub languages: Option<Vec<Language>>,
}

impl AnalysisConfig {
    pub fn effective_max_ciphertext_length(&self) -> usize {
        self.max_ciphertext_length
            .unwrap_or(DEFAULT_MAX_CIPHERTEXT_LENGTH)
    }

    pub fn effective_min_hypothesis_confidence(&self) -> f64 {
        self.min_hypothesis_confidence
            .unwrap_or(DEFAULT_MIN_HYPOTHESIS_CONFIDENCE)
    }

    pub fn effective_max_candidates(&self) -> usize {
        self.max_candidates.unwrap_or(DEFAULT_MAX_CANDIDATES)
    }

    pub fn effective_min_repeat_length(&self) -> usize {
        self.min_repeat_length.unwrap_or(DEFAULT_MIN_REPEAT_LENGTH)
    }

    pub fn effective_max_repeat_length(&self) -> usize {
        self.max_repeat_length.unwrap_or(DEFAULT_MAX_REPEAT_LENGTH)
    }

    pub fn effective_max_repeats(&self) -> usize {
        self.max_repeats.unwrap_or(DEFAULT_MAX_REPEATS)
    }

    pub fn effective_max_key_length(&self) -> usize {
        self.max_key_length.unwrap_or(DEFAULT_MAX_KEY_LENGTH)
    }

    pub fn effective_repeat_index_threshold(&self) -> usize {
        self.repeat_index_threshold
            .unwrap_or(DEFAULT_REPEAT_INDEX_THRESHOLD)
    }

    pub fn effective_normalization(&self) -> NormalizationMode {
        self.normalization.unwrap_or_default()
    }

    pub fn effective_max_parallel_engines(&self) -> usize {
        self.max_parallel_engines
            .unwrap_or(DEFAULT_MAX_PARALLEL_ENGINES)
    }

    pub fn effective_early_exit_confidence(&self) -> f64 {
        self.early_exit_confidence
            .unwrap_or(DEFAULT_EARLY_EXIT_CONFIDENCE)
    }

    pub fn effective_filter_candidates(&self) -> bool {
        self.filter_candidates.unwrap_or(true)
    }

    /// Configured languages without duplicates, in the order given.
    pub fn effective_languages(&self) -> Vec<Language> {
        match &self.languages {
            Some(languages) => {
                let mut unique = Vec::with_capacity(languages.len());
                for &language in languages {
                    if !unique.contains(&language) {
                        unique.push(language);
                    }
                }
                unique
            }
            None => Language::all().to_vec(),
        }
    }
}
