//! ExplanationGenerator: ordered, human-readable statements about an
//! analysis. Every sentence is filled from numbers in the profile,
//! hypotheses and candidates; bands come from the detection thresholds.

use cipherscope_core::CipherType;

use crate::detection::thresholds::{scaled_chi_squared, ChiBand, EntropyBand, IocBand};
use crate::detection::CipherHypothesis;
use crate::engines::Key;
use crate::search::{PlaintextCandidate, RecoveryOutcome, RecoveryStatus, SearchMethod};
use crate::stats::StatisticalProfile;

/// Characters of plaintext quoted in a preview.
const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Statistics, then detection, then candidates.
    pub fn explain(
        &self,
        profile: &StatisticalProfile,
        hypotheses: &[CipherHypothesis],
        candidates: &[PlaintextCandidate],
    ) -> Vec<String> {
        let mut lines = self.explain_statistics(profile);
        lines.extend(self.explain_detection(hypotheses));
        lines.extend(self.explain_candidates(candidates));
        lines
    }

    /// [`Self::explain`] followed by one line per recovery attempt.
    pub fn explain_with_recovery(
        &self,
        profile: &StatisticalProfile,
        hypotheses: &[CipherHypothesis],
        candidates: &[PlaintextCandidate],
        recovery: &[RecoveryOutcome],
    ) -> Vec<String> {
        let mut lines = self.explain(profile, hypotheses, candidates);
        lines.extend(recovery.iter().map(|outcome| self.explain_recovery(outcome)));
        lines
    }

    pub fn explain_statistics(&self, profile: &StatisticalProfile) -> Vec<String> {
        if profile.is_empty() {
            return vec!["The ciphertext contains no letters to analyze.".to_string()];
        }
        let mut lines = vec![format!(
            "The ciphertext contains {} letters using {} unique letters.",
            profile.length, profile.unique_symbols
        )];

        let ioc = profile.index_of_coincidence;
        lines.push(format!(
            "Index of Coincidence: {ioc:.4}. {}",
            IocBand::of(ioc).interpretation()
        ));
        lines.push(format!(
            "Entropy: {:.2} bits. {}",
            profile.entropy,
            EntropyBand::of(profile.entropy).interpretation()
        ));
        let scaled = scaled_chi_squared(profile.chi_squared, profile.length);
        lines.push(format!(
            "Chi-squared against English: {:.1} ({scaled:.1} per 100 letters). {}",
            profile.chi_squared,
            ChiBand::of(scaled).interpretation()
        ));

        let top = profile.top_letters(5);
        if !top.is_empty() {
            let listed: Vec<String> = top
                .iter()
                .map(|(c, n)| format!("{c} ({:.1}%)", *n as f64 * 100.0 / profile.length as f64))
                .collect();
            lines.push(format!("Most frequent letters: {}.", listed.join(", ")));
        }

        if !profile.repeated_sequences.is_empty() {
            let listed: Vec<String> = profile
                .repeated_sequences
                .iter()
                .take(3)
                .map(|r| format!("'{}' ({}x)", r.sequence, r.count()))
                .collect();
            lines.push(format!(
                "Repeated sequences found: {}. Their spacing can reveal the key length of a polyalphabetic cipher.",
                listed.join(", ")
            ));
        }
        if let Some(best) = profile.key_length_candidates.first() {
            lines.push(format!(
                "Kasiski examination suggests key length {} ({} of the repeat distances are multiples).",
                best.length, best.support
            ));
        }
        lines
    }

    pub fn explain_detection(&self, hypotheses: &[CipherHypothesis]) -> Vec<String> {
        let Some(top) = hypotheses.first() else {
            return vec!["Could not determine the cipher type from the available statistics.".to_string()];
        };
        let mut lines = vec![format!(
            "Most likely cipher: {} ({}) with {:.0}% confidence.",
            top.cipher_family,
            top.cipher_type,
            top.confidence * 100.0
        )];
        lines.extend(top.reasoning.iter().take(3).map(|r| format!("  - {r}")));
        if hypotheses.len() > 1 {
            let alternatives: Vec<String> = hypotheses[1..]
                .iter()
                .take(3)
                .map(|h| format!("{} ({:.0}%)", h.cipher_type, h.confidence * 100.0))
                .collect();
            lines.push(format!("Alternative possibilities: {}.", alternatives.join(", ")));
        }
        lines
    }

    pub fn explain_candidates(&self, candidates: &[PlaintextCandidate]) -> Vec<String> {
        let Some(best) = candidates.first() else {
            return vec!["No viable plaintext candidates found.".to_string()];
        };
        let mut lines = vec![
            format!("Best decryption result ({:.0}% confidence):", best.confidence * 100.0),
            format!("  Cipher: {}, Key: {}", best.cipher_type, best.key),
            format!("  Plaintext preview: \"{}\"", preview(&best.plaintext)),
            format!(
                "  Language: {} (score {:.3}, lower is a closer match)",
                best.language.display_name(),
                best.score
            ),
        ];
        if best.is_partial() {
            lines.push("  The search timed out; a better key may exist.".to_string());
        }
        if candidates.len() > 1 {
            lines.push(format!(
                "  {} alternative candidate(s) also found.",
                (candidates.len() - 1).min(3)
            ));
        }
        lines
    }

    pub fn explain_recovery(&self, outcome: &RecoveryOutcome) -> String {
        let ct = outcome.cipher_type;
        match outcome.status {
            RecoveryStatus::Exhaustive => format!(
                "{ct}: all {} keys tried in {} ms.",
                outcome.keys_tried, outcome.elapsed_ms
            ),
            RecoveryStatus::BestEffort => format!(
                "{ct}: hill climbing evaluated {} keys in {} ms; the best key found is not guaranteed optimal.",
                outcome.keys_tried, outcome.elapsed_ms
            ),
            RecoveryStatus::TimedOut => format!(
                "{ct}: search timed out after {} keys; results are partial.",
                outcome.keys_tried
            ),
            RecoveryStatus::SingleCandidate => format!("{ct}: decrypted with the supplied key."),
            RecoveryStatus::Skipped => {
                format!("{ct}: skipped, an earlier attempt already produced a confident result.")
            }
            RecoveryStatus::NotAttempted => {
                format!("{ct}: not attempted, no hypothesis reached the minimum confidence.")
            }
        }
    }

    /// One sentence describing how `key` was found for a direct decrypt.
    pub fn explain_attack(&self, cipher_type: CipherType, method: SearchMethod, key: &Key) -> String {
        format!("{cipher_type} decrypted with key '{key}'. {}", attack_description(cipher_type, method))
    }
}

fn attack_description(cipher_type: CipherType, method: SearchMethod) -> &'static str {
    match method {
        SearchMethod::KnownKey => "The supplied key was applied directly and the result scored against each reference language.",
        SearchMethod::Exhaustive => {
            "All possible keys were tried systematically, and each result was scored against the letter patterns of each reference language."
        }
        SearchMethod::HillClimbing => match cipher_type {
            CipherType::SimpleSubstitution => {
                "Letter frequencies were matched against the primary language to build a starting key, then refined by swapping letters while the language score improved."
            }
            CipherType::Vigenere | CipherType::Beaufort | CipherType::Autokey => {
                "Likely key lengths were found from column coincidence and repeat spacing, each key letter was set by frequency analysis, then refined letter by letter."
            }
            _ => {
                "Starting from several keys, the search made small changes and kept each improvement until no better key could be found."
            }
        },
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
