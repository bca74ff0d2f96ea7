//! AnalysisPipeline: normalize, profile, detect, recover, explain.
//!
//! Stateless across invocations. Recovery runs tier by tier on a bounded
//! rayon pool; within a tier every cipher type is searched in parallel, each
//! under its own deadline.

pub mod types;

use std::sync::Arc;
use std::time::Instant;

use cipherscope_core::errors::{AnalysisError, ConfigError, InputError, RegistryError};
use cipherscope_core::traits::Deadline;
use cipherscope_core::types::collections::FxHashSet;
use cipherscope_core::{CipherType, CipherscopeConfig};
use rayon::prelude::*;

pub use types::{AnalysisResult, AnalyzeOptions, PipelineStage};

use crate::detection::{CipherHypothesis, DetectionEngine};
use crate::engines::{CipherRegistry, Key};
use crate::explain::ExplanationGenerator;
use crate::language::LanguageModel;
use crate::scoring::CandidateFilter;
use crate::search::{
    sort_candidates, KeySearchOptimizer, PlaintextCandidate, RecoveryOutcome, RecoveryStatus,
    SearchSettings,
};
use crate::stats::StatisticsEngine;
use crate::text::NormalizedText;

/// Settings resolved for one invocation.
struct RequestSettings {
    min_confidence: f64,
    max_candidates: usize,
    timeout_seconds: f64,
}

pub struct AnalysisPipeline {
    config: CipherscopeConfig,
    registry: Arc<CipherRegistry>,
    stats: StatisticsEngine,
    detector: DetectionEngine,
    optimizer: KeySearchOptimizer,
    explainer: ExplanationGenerator,
    filter: CandidateFilter,
    pool: rayon::ThreadPool,
}

impl AnalysisPipeline {
    pub fn new(config: CipherscopeConfig, registry: Arc<CipherRegistry>) -> Result<Self, AnalysisError> {
        CipherscopeConfig::validate(&config)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.analysis.effective_max_parallel_engines())
            .thread_name(|i| format!("cipherscope-recover-{i}"))
            .build()
            .map_err(|e| RegistryError::WorkerPool {
                message: e.to_string(),
            })?;
        Ok(Self {
            stats: StatisticsEngine::new(&config.analysis),
            detector: DetectionEngine::new(Arc::clone(&registry)),
            optimizer: KeySearchOptimizer::new(
                Arc::clone(&registry),
                SearchSettings::from_config(&config),
            ),
            explainer: ExplanationGenerator::new(),
            filter: CandidateFilter::default(),
            registry,
            config,
            pool,
        })
    }

    /// Pipeline over every built-in engine.
    pub fn with_defaults(config: CipherscopeConfig) -> Result<Self, AnalysisError> {
        let registry = CipherRegistry::from_config(&config.search)?;
        Self::new(config, Arc::new(registry))
    }

    pub fn config(&self) -> &CipherscopeConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<CipherRegistry> {
        &self.registry
    }

    pub fn optimizer(&self) -> &KeySearchOptimizer {
        &self.optimizer
    }

    pub fn explainer(&self) -> &ExplanationGenerator {
        &self.explainer
    }

    /// Check everything a request can get wrong before any work starts.
    pub fn validate_request(&self, ciphertext: &str, options: &AnalyzeOptions) -> Result<(), AnalysisError> {
        let max_length = self.config.analysis.effective_max_ciphertext_length();
        let length = ciphertext.chars().count();
        if length > max_length {
            return Err(InputError::TooLarge { length, max_length }.into());
        }
        match (options.cipher_type, &options.key) {
            (Some(cipher_type), Some(key)) => self.registry.get(cipher_type)?.validate_key(key)?,
            (Some(cipher_type), None) => {
                self.registry.get(cipher_type)?;
            }
            (None, Some(_)) => {
                return Err(InputError::InvalidOption {
                    option: "key".to_string(),
                    message: "a key requires a cipher type".to_string(),
                }
                .into())
            }
            (None, None) => {}
        }
        Ok(())
    }

    fn request_settings(&self, options: &AnalyzeOptions) -> Result<RequestSettings, AnalysisError> {
        let config = self
            .config
            .with_request_overrides(&options.overrides)
            .map_err(|e| match e {
                ConfigError::ValidationFailed { field, message } => {
                    AnalysisError::from(InputError::InvalidOption { option: field, message })
                }
                other => AnalysisError::from(other),
            })?;
        Ok(RequestSettings {
            min_confidence: config.analysis.effective_min_hypothesis_confidence(),
            max_candidates: config.analysis.effective_max_candidates(),
            timeout_seconds: config.search.effective_timeout_seconds(),
        })
    }

    pub fn analyze(&self, ciphertext: &str, options: &AnalyzeOptions) -> Result<AnalysisResult, AnalysisError> {
        self.validate_request(ciphertext, options)?;
        let settings = self.request_settings(options)?;
        let started = Instant::now();

        let text = {
            let _span = tracing::info_span!("cipherscope.normalize", chars = ciphertext.len()).entered();
            NormalizedText::new(ciphertext, self.config.analysis.effective_normalization())
        };

        let profile = {
            let _span = tracing::info_span!("cipherscope.profile", letters = text.len()).entered();
            let profile = self.stats.profile(&text);
            tracing::debug!(
                ioc = profile.index_of_coincidence,
                entropy = profile.entropy,
                repeats = profile.repeated_sequences.len(),
                "profile computed"
            );
            profile
        };

        let hypotheses = {
            let _span = tracing::info_span!("cipherscope.detect").entered();
            self.detector.detect(&profile)
        };

        let (candidates, recovery) = {
            let _span = tracing::info_span!("cipherscope.recover").entered();
            self.recover(&text, &hypotheses, options, &settings)?
        };

        let explanations = {
            let _span = tracing::info_span!("cipherscope.explain").entered();
            self.explainer
                .explain_with_recovery(&profile, &hypotheses, &candidates, &recovery)
        };

        tracing::info!(
            letters = text.len(),
            hypotheses = hypotheses.len(),
            candidates = candidates.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis finished"
        );

        Ok(AnalysisResult {
            statistics: profile,
            suspected_ciphers: hypotheses,
            plaintext_candidates: candidates,
            explanations,
            recovery,
            stage: PipelineStage::Done,
        })
    }

    /// Explanations for a stored result.
    pub fn reexplain(&self, result: &AnalysisResult) -> Vec<String> {
        self.explainer.explain_with_recovery(
            &result.statistics,
            &result.suspected_ciphers,
            &result.plaintext_candidates,
            &result.recovery,
        )
    }

    fn recover(
        &self,
        text: &NormalizedText,
        hypotheses: &[CipherHypothesis],
        options: &AnalyzeOptions,
        settings: &RequestSettings,
    ) -> Result<(Vec<PlaintextCandidate>, Vec<RecoveryOutcome>), AnalysisError> {
        let targets: Vec<CipherType> = match options.cipher_type {
            Some(cipher_type) => vec![cipher_type],
            None => hypotheses
                .iter()
                .filter(|h| h.confidence >= settings.min_confidence)
                .map(|h| h.cipher_type)
                .collect(),
        };

        if text.is_empty() {
            let outcomes = targets
                .into_iter()
                .map(|ct| RecoveryOutcome::empty(ct, RecoveryStatus::Skipped))
                .collect();
            return Ok((Vec::new(), outcomes));
        }
        if targets.is_empty() {
            tracing::info!(
                min_confidence = settings.min_confidence,
                "no hypothesis above threshold, recovery not attempted"
            );
            let outcomes = hypotheses
                .first()
                .map(|h| RecoveryOutcome::empty(h.cipher_type, RecoveryStatus::NotAttempted))
                .into_iter()
                .collect();
            return Ok((Vec::new(), outcomes));
        }

        let early_exit = self.config.analysis.effective_early_exit_confidence();
        let key = options.key.as_ref();
        let mut outcomes: Vec<RecoveryOutcome> = Vec::with_capacity(targets.len());
        let mut confident = false;

        for tier in 1..=3u8 {
            let in_tier: Vec<CipherType> = targets.iter().copied().filter(|ct| ct.tier() == tier).collect();
            if in_tier.is_empty() {
                continue;
            }
            if confident {
                tracing::debug!(tier, skipped = in_tier.len(), "early exit, skipping tier");
                outcomes.extend(in_tier.into_iter().map(|ct| RecoveryOutcome::empty(ct, RecoveryStatus::Skipped)));
                continue;
            }

            let results: Vec<Result<RecoveryOutcome, _>> = self.pool.install(|| {
                in_tier
                    .par_iter()
                    .map(|&ct| {
                        let deadline = Deadline::after_secs_f64(settings.timeout_seconds);
                        self.optimizer.recover(text.display(), ct, key, &deadline)
                    })
                    .collect()
            });
            for result in results {
                let outcome = result?;
                confident |= outcome.best().is_some_and(|c| c.confidence >= early_exit);
                outcomes.push(outcome);
            }
        }
        outcomes.sort_by(|a, b| a.cipher_type.cmp(&b.cipher_type));

        let mut merged: Vec<PlaintextCandidate> = outcomes
            .iter()
            .flat_map(|o| o.candidates.iter().cloned())
            .collect();
        sort_candidates(&mut merged);

        let mut seen = FxHashSet::default();
        merged.retain(|c| seen.insert(c.plaintext.clone()));

        if self.config.analysis.effective_filter_candidates() {
            merged = self.filter.apply(
                merged,
                |c| c.plaintext.as_str(),
                |c| LanguageModel::for_language(c.language),
            );
        }
        merged.truncate(settings.max_candidates);
        Ok((merged, outcomes))
    }

    /// Single-type recovery used by direct decrypt.
    pub fn recover_one(
        &self,
        ciphertext: &str,
        cipher_type: CipherType,
        key: Option<&Key>,
        options: &AnalyzeOptions,
    ) -> Result<RecoveryOutcome, AnalysisError> {
        let settings = self.request_settings(options)?;
        let text = NormalizedText::new(ciphertext, self.config.analysis.effective_normalization());
        let deadline = Deadline::after_secs_f64(settings.timeout_seconds);
        Ok(self.optimizer.recover(text.display(), cipher_type, key, &deadline)?)
    }
}
