//! Pipeline input and output types.

use std::fmt;

use cipherscope_core::config::RequestOverrides;
use cipherscope_core::{CipherType, Language};
use serde::{Deserialize, Serialize};

use crate::detection::CipherHypothesis;
use crate::engines::Key;
use crate::search::{PlaintextCandidate, RecoveryOutcome};
use crate::stats::StatisticalProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Normalizing,
    Profiling,
    Detecting,
    Recovering,
    Explaining,
    Done,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normalizing => "normalizing",
            Self::Profiling => "profiling",
            Self::Detecting => "detecting",
            Self::Recovering => "recovering",
            Self::Explaining => "explaining",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-invocation inputs besides the ciphertext.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Recover only this type instead of every confident hypothesis.
    pub cipher_type: Option<CipherType>,
    /// Known key; requires `cipher_type`.
    pub key: Option<Key>,
    pub overrides: RequestOverrides,
}

/// Everything one analysis produced. Assembled once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub statistics: StatisticalProfile,
    /// Best first.
    pub suspected_ciphers: Vec<CipherHypothesis>,
    /// Best first.
    pub plaintext_candidates: Vec<PlaintextCandidate>,
    pub explanations: Vec<String>,
    /// One entry per cipher type considered for recovery.
    pub recovery: Vec<RecoveryOutcome>,
    /// Last stage reached; `Done` for every returned result.
    pub stage: PipelineStage,
}

impl AnalysisResult {
    /// Language of the best candidate.
    pub fn detected_language(&self) -> Option<Language> {
        self.plaintext_candidates.first().map(|c| c.language)
    }
}
