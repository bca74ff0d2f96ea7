//! Candidate and recovery outcome types.

use std::cmp::Ordering;
use std::fmt;

use cipherscope_core::{CipherType, Language};
use serde::{Deserialize, Serialize};

use crate::engines::Key;

/// How a candidate's key was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    KnownKey,
    Exhaustive,
    HillClimbing,
}

impl SearchMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::KnownKey => "known_key",
            Self::Exhaustive => "exhaustive",
            Self::HillClimbing => "hill_climbing",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How complete a recovery attempt was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// Every key in an enumerable space was tried.
    Exhaustive,
    /// Heuristic search ran its full iteration budget.
    BestEffort,
    /// The deadline passed; candidates are the best found so far.
    TimedOut,
    /// A known key was applied.
    SingleCandidate,
    /// Not run: an earlier tier already produced a confident answer, or
    /// there was nothing to decrypt.
    Skipped,
    /// No hypothesis cleared the confidence threshold.
    NotAttempted,
}

impl RecoveryStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::BestEffort => "best_effort",
            Self::TimedOut => "timed_out",
            Self::SingleCandidate => "single_candidate",
            Self::Skipped => "skipped",
            Self::NotAttempted => "not_attempted",
        }
    }

    /// Candidates under this status may be missing better keys.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::TimedOut)
    }
}

impl fmt::Display for RecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decryption under one key, scored against the configured languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaintextCandidate {
    pub plaintext: String,
    /// Cost under `language`: lower is more language-like.
    pub score: f64,
    /// Language the plaintext fits best.
    pub language: Language,
    /// In [0, 1], higher is better.
    pub confidence: f64,
    pub cipher_type: CipherType,
    pub key: Key,
    pub method: SearchMethod,
    pub status: RecoveryStatus,
}

impl PlaintextCandidate {
    pub fn is_partial(&self) -> bool {
        self.status.is_partial()
    }
}

/// Confidence descending, then cipher type, score and key display ascending.
pub fn compare_candidates(a: &PlaintextCandidate, b: &PlaintextCandidate) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| a.cipher_type.cmp(&b.cipher_type))
        .then_with(|| a.score.total_cmp(&b.score))
        .then_with(|| a.key.to_string().cmp(&b.key.to_string()))
}

pub fn sort_candidates(candidates: &mut [PlaintextCandidate]) {
    candidates.sort_by(compare_candidates);
}

/// Result of recovering one cipher type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryOutcome {
    pub cipher_type: CipherType,
    pub status: RecoveryStatus,
    /// Ranked best first.
    pub candidates: Vec<PlaintextCandidate>,
    pub keys_tried: usize,
    pub elapsed_ms: u64,
}

impl RecoveryOutcome {
    pub fn empty(cipher_type: CipherType, status: RecoveryStatus) -> Self {
        Self {
            cipher_type,
            status,
            candidates: Vec::new(),
            keys_tried: 0,
            elapsed_ms: 0,
        }
    }

    pub fn best(&self) -> Option<&PlaintextCandidate> {
        self.candidates.first()
    }
}
