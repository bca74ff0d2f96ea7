//! KeySearchOptimizer: enumerate or hill-climb a cipher's key space.

use std::sync::Arc;
use std::time::Instant;

use cipherscope_core::errors::EngineError;
use cipherscope_core::traits::{Cancellable, Deadline};
use cipherscope_core::types::collections::FxHashSet;
use cipherscope_core::{CipherType, CipherscopeConfig, Language};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::seeds::{seed_keys, SeedLimits};
use super::types::{sort_candidates, PlaintextCandidate, RecoveryOutcome, RecoveryStatus, SearchMethod};
use crate::alphabet::{from_indices, indices};
use crate::engines::{CipherEngine, CipherRegistry, Key, KeySpace};
use crate::scoring::Scorer;

/// Budgets and limits for one key search.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub restarts: u32,
    pub iterations_per_restart: u32,
    pub stall_limit: u32,
    pub seed: u64,
    pub max_key_length: usize,
    pub max_transposition_width: usize,
    /// Languages candidates are scored against, primary first.
    pub languages: Vec<Language>,
}

impl SearchSettings {
    pub fn from_config(config: &CipherscopeConfig) -> Self {
        Self {
            restarts: config.search.effective_restarts(),
            iterations_per_restart: config.search.effective_iterations_per_restart(),
            stall_limit: config.search.effective_stall_limit(),
            seed: config.search.effective_seed(),
            max_key_length: config.analysis.effective_max_key_length(),
            max_transposition_width: config.search.effective_max_transposition_width(),
            languages: config.analysis.effective_languages(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::from_config(&CipherscopeConfig::default())
    }
}

/// Best key of one climb.
struct Climb {
    key: Key,
    score: f64,
    proposals: usize,
    timed_out: bool,
}

pub struct KeySearchOptimizer {
    registry: Arc<CipherRegistry>,
    scorer: Scorer,
    settings: SearchSettings,
}

impl KeySearchOptimizer {
    pub fn new(registry: Arc<CipherRegistry>, settings: SearchSettings) -> Self {
        Self {
            registry,
            scorer: Scorer::for_languages(&settings.languages),
            settings,
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Recover plaintext candidates for `ciphertext` under `cipher_type`,
    /// best first.
    ///
    /// A known key is validated before any work and yields at most one
    /// candidate. Without one, enumerable key spaces are tried in full and
    /// the rest are hill-climbed. A passed deadline ends the search with the
    /// candidates found so far and status [`RecoveryStatus::TimedOut`].
    pub fn recover(
        &self,
        ciphertext: &str,
        cipher_type: CipherType,
        known_key: Option<&Key>,
        deadline: &Deadline,
    ) -> Result<RecoveryOutcome, EngineError> {
        let engine = self.registry.get(cipher_type)?;
        if let Some(key) = known_key {
            engine.validate_key(key)?;
        }

        let letters = indices(ciphertext);
        if letters.is_empty() {
            return Ok(RecoveryOutcome::empty(cipher_type, RecoveryStatus::Skipped));
        }

        let started = Instant::now();
        let mut outcome = match (known_key, engine.describe_key_space()) {
            (Some(key), _) => self.apply_known_key(engine, ciphertext, key)?,
            (None, KeySpace::Enumerable { .. }) => {
                self.enumerate(engine, ciphertext, letters.len(), deadline)?
            }
            (None, KeySpace::Heuristic { .. }) => {
                self.hill_climb(engine, ciphertext, &letters, deadline)?
            }
        };
        outcome.elapsed_ms = started.elapsed().as_millis() as u64;

        if outcome.status == RecoveryStatus::TimedOut {
            tracing::warn!(
                cipher_type = %cipher_type,
                keys_tried = outcome.keys_tried,
                candidates = outcome.candidates.len(),
                "key search timed out, keeping partial results"
            );
        } else {
            tracing::debug!(
                cipher_type = %cipher_type,
                status = %outcome.status,
                keys_tried = outcome.keys_tried,
                candidates = outcome.candidates.len(),
                elapsed_ms = outcome.elapsed_ms,
                "key search finished"
            );
        }
        Ok(outcome)
    }

    /// [`Self::recover`] for a cipher identifier string.
    pub fn recover_id(
        &self,
        ciphertext: &str,
        cipher_id: &str,
        known_key: Option<&Key>,
        deadline: &Deadline,
    ) -> Result<RecoveryOutcome, EngineError> {
        let cipher_type: CipherType = cipher_id.parse()?;
        self.recover(ciphertext, cipher_type, known_key, deadline)
    }

    fn candidate(
        &self,
        engine: &dyn CipherEngine,
        ciphertext: &str,
        key: Key,
        method: SearchMethod,
        status: RecoveryStatus,
    ) -> Result<Option<PlaintextCandidate>, EngineError> {
        let plaintext = engine.decrypt(ciphertext, &key)?;
        Ok(self.scorer.evaluate(&plaintext).map(|fit| PlaintextCandidate {
            confidence: self.scorer.confidence(fit.score),
            plaintext,
            score: fit.score,
            language: fit.language,
            cipher_type: engine.cipher_type(),
            key,
            method,
            status,
        }))
    }

    fn apply_known_key(
        &self,
        engine: &dyn CipherEngine,
        ciphertext: &str,
        key: &Key,
    ) -> Result<RecoveryOutcome, EngineError> {
        let status = RecoveryStatus::SingleCandidate;
        let candidates = self
            .candidate(engine, ciphertext, key.clone(), SearchMethod::KnownKey, status)?
            .into_iter()
            .collect();
        Ok(RecoveryOutcome {
            cipher_type: engine.cipher_type(),
            status,
            candidates,
            keys_tried: 1,
            elapsed_ms: 0,
        })
    }

    fn enumerate(
        &self,
        engine: &dyn CipherEngine,
        ciphertext: &str,
        text_len: usize,
        deadline: &Deadline,
    ) -> Result<RecoveryOutcome, EngineError> {
        let keys = engine.enumerate_keys(text_len);
        let mut candidates = Vec::with_capacity(keys.len());
        let mut keys_tried = 0;
        let mut status = RecoveryStatus::Exhaustive;
        for key in keys {
            if deadline.is_cancelled() {
                status = RecoveryStatus::TimedOut;
                break;
            }
            keys_tried += 1;
            candidates.extend(self.candidate(engine, ciphertext, key, SearchMethod::Exhaustive, status)?);
        }
        if status == RecoveryStatus::TimedOut {
            for candidate in &mut candidates {
                candidate.status = status;
            }
        }
        sort_candidates(&mut candidates);
        Ok(RecoveryOutcome {
            cipher_type: engine.cipher_type(),
            status,
            candidates,
            keys_tried,
            elapsed_ms: 0,
        })
    }

    fn hill_climb(
        &self,
        engine: &dyn CipherEngine,
        ciphertext: &str,
        letters: &[u8],
        deadline: &Deadline,
    ) -> Result<RecoveryOutcome, EngineError> {
        let cipher_type = engine.cipher_type();
        let mut rng = StdRng::seed_from_u64(self.settings.seed ^ stream_id(cipher_type));
        let limits = SeedLimits {
            max_key_length: self.settings.max_key_length,
            max_width: self.settings.max_transposition_width,
        };

        let mut starts = seed_keys(cipher_type, letters, &self.scorer, limits);
        while starts.len() < self.settings.restarts as usize {
            starts.push(engine.random_key(&mut rng));
        }

        // Climb on the letters only; the winners are decrypted in full below.
        let letter_text = from_indices(letters);
        let mut climbs = Vec::with_capacity(starts.len());
        let mut keys_tried = 0;
        let mut timed_out = false;
        for start in starts {
            if deadline.is_cancelled() {
                timed_out = true;
                break;
            }
            let Some(climb) = self.climb(engine, &letter_text, start, &mut rng, deadline)? else {
                continue;
            };
            keys_tried += climb.proposals;
            timed_out = climb.timed_out;
            climbs.push(climb);
            if timed_out {
                break;
            }
        }

        let status = if timed_out {
            RecoveryStatus::TimedOut
        } else {
            RecoveryStatus::BestEffort
        };
        climbs.sort_by(|a, b| a.score.total_cmp(&b.score));

        let mut seen = FxHashSet::default();
        let mut candidates = Vec::with_capacity(climbs.len());
        for climb in climbs {
            if let Some(candidate) =
                self.candidate(engine, ciphertext, climb.key, SearchMethod::HillClimbing, status)?
            {
                if seen.insert(candidate.plaintext.clone()) {
                    candidates.push(candidate);
                }
            }
        }
        sort_candidates(&mut candidates);
        Ok(RecoveryOutcome {
            cipher_type,
            status,
            candidates,
            keys_tried,
            elapsed_ms: 0,
        })
    }

    /// First-improvement climb from `start`; only strictly better keys are accepted.
    fn climb(
        &self,
        engine: &dyn CipherEngine,
        letter_text: &str,
        start: Key,
        rng: &mut StdRng,
        deadline: &Deadline,
    ) -> Result<Option<Climb>, EngineError> {
        let Some(score) = self.score_key(engine, letter_text, &start)? else {
            return Ok(None);
        };
        let mut best = Climb {
            key: start,
            score,
            proposals: 1,
            timed_out: false,
        };
        let mut stall = 0;
        for _ in 0..self.settings.iterations_per_restart {
            if deadline.is_cancelled() {
                best.timed_out = true;
                break;
            }
            let proposal = engine.neighbor(&best.key, rng);
            best.proposals += 1;
            match self.score_key(engine, letter_text, &proposal)? {
                Some(score) if score < best.score => {
                    best.key = proposal;
                    best.score = score;
                    stall = 0;
                }
                _ => {
                    stall += 1;
                    if stall >= self.settings.stall_limit {
                        break;
                    }
                }
            }
        }
        Ok(Some(best))
    }

    fn score_key(
        &self,
        engine: &dyn CipherEngine,
        letter_text: &str,
        key: &Key,
    ) -> Result<Option<f64>, EngineError> {
        let plaintext = engine.decrypt(letter_text, key)?;
        Ok(self.scorer.score(&plaintext))
    }
}

/// Per-cipher RNG stream so searches do not share random sequences.
fn stream_id(cipher_type: CipherType) -> u64 {
    let ordinal = CipherType::all()
        .iter()
        .position(|&ct| ct == cipher_type)
        .unwrap_or(0) as u64;
    (ordinal + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
