//! DetectionEngine: rank cipher hypotheses from a statistical profile.
//!
//! Each family gets an independent raw confidence from the profile's
//! signals. Concrete cipher types registered for that family then scale it
//! by a type weight that may include a type-specific fit (for example,
//! whether some shift reproduces the English letter histogram).

pub mod signals;
pub mod thresholds;

use std::cmp::Ordering;
use std::sync::Arc;

use cipherscope_core::{CipherFamily, CipherType};
use serde::{Deserialize, Serialize};

pub use signals::{FamilyScores, Signals};

use crate::alphabet::letter;
use crate::engines::CipherRegistry;
use crate::language::LanguageModel;
use crate::stats::StatisticalProfile;
use thresholds::{ChiBand, IocBand, IOC_ENGLISH, IOC_RANDOM};

/// A suspected cipher with its confidence and the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CipherHypothesis {
    pub cipher_family: CipherFamily,
    pub cipher_type: CipherType,
    /// In [0, 1].
    pub confidence: f64,
    pub reasoning: Vec<String>,
}

/// Confidence descending, then cipher type ascending.
pub fn compare_hypotheses(a: &CipherHypothesis, b: &CipherHypothesis) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| a.cipher_type.cmp(&b.cipher_type))
}

#[derive(Debug, Clone)]
pub struct DetectionEngine {
    registry: Arc<CipherRegistry>,
    model: &'static LanguageModel,
}

impl DetectionEngine {
    pub fn new(registry: Arc<CipherRegistry>) -> Self {
        Self {
            registry,
            model: LanguageModel::english(),
        }
    }

    pub fn signals(&self, profile: &StatisticalProfile) -> Signals {
        Signals::from_profile(profile, self.model)
    }

    pub fn family_scores(&self, profile: &StatisticalProfile) -> FamilyScores {
        FamilyScores::from_signals(&self.signals(profile))
    }

    /// One hypothesis per registered cipher type, best first. An empty
    /// profile yields no hypotheses.
    pub fn detect(&self, profile: &StatisticalProfile) -> Vec<CipherHypothesis> {
        if profile.is_empty() {
            return Vec::new();
        }
        let signals = self.signals(profile);
        let families = FamilyScores::from_signals(&signals);

        let mut hypotheses: Vec<CipherHypothesis> = self
            .registry
            .cipher_types()
            .into_iter()
            .map(|cipher_type| {
                let family = cipher_type.family();
                let (weight, type_reasons) = type_weight(cipher_type, &signals);
                let mut reasoning = family_reasons(family, &signals, profile);
                reasoning.extend(type_reasons);
                CipherHypothesis {
                    cipher_family: family,
                    cipher_type,
                    confidence: (families.get(family) * weight).clamp(0.0, 1.0),
                    reasoning,
                }
            })
            .collect();
        hypotheses.sort_by(compare_hypotheses);

        tracing::debug!(
            hypotheses = hypotheses.len(),
            top = hypotheses.first().map(|h| h.cipher_type.as_str()).unwrap_or("none"),
            "detection finished"
        );
        hypotheses
    }
}

fn family_reasons(family: CipherFamily, s: &Signals, profile: &StatisticalProfile) -> Vec<String> {
    let ioc = s.ioc;
    let mut reasons = Vec::new();
    match family {
        CipherFamily::Monoalphabetic => {
            reasons.push(format!(
                "IOC ({ioc:.4}) compared with English ({IOC_ENGLISH:.4}): {:.0}% close",
                s.ioc_closeness * 100.0
            ));
            reasons.push("Monoalphabetic substitution preserves the shape of the letter histogram".to_string());
            if s.frequency_match > 0.5 {
                reasons.push(format!(
                    "Letter frequencies already match English (p = {:.4}), so letters may be unsubstituted",
                    s.chi_squared_p_value
                ));
            }
        }
        CipherFamily::Polyalphabetic => {
            reasons.push(format!(
                "IOC ({ioc:.4}) has fallen {:.0}% of the way from English towards random ({IOC_RANDOM:.4})",
                s.ioc_flatness * 100.0
            ));
            match profile.key_length_candidates.first() {
                Some(best) => reasons.push(format!(
                    "Kasiski examination favors key length {} ({} supporting distances)",
                    best.length, best.support
                )),
                None => reasons.push("No repeated sequences support a key length".to_string()),
            }
        }
        CipherFamily::Transposition => {
            reasons.push(format!(
                "Unigram chi-squared {:.1} per 100 letters (p = {:.4}): {}",
                s.scaled_chi_squared,
                s.chi_squared_p_value,
                ChiBand::of(s.scaled_chi_squared).interpretation()
            ));
            reasons.push(format!(
                "Bigram fit {:.3} shows letter order {:.0}% disrupted",
                profile.bigram_fit,
                s.order_disruption * 100.0
            ));
        }
        CipherFamily::Polygraphic => {
            reasons.push(format!(
                "Aligned letter pairs repeat beyond what single-letter frequencies explain ({:.0}%)",
                s.digraph_excess * 100.0
            ));
            if IocBand::of(ioc) != IocBand::English {
                reasons.push(format!("IOC ({ioc:.4}) is flattened, as digraph substitution does"));
            }
        }
    }
    reasons
}

/// Weight in [0, 1] applied to the family confidence, with reasons.
fn type_weight(cipher_type: CipherType, s: &Signals) -> (f64, Vec<String>) {
    match cipher_type {
        CipherType::Caesar => (
            0.6 + 0.4 * s.shift_fit,
            vec![format!(
                "Shifting by {} ({} -> A) fits English at {:.0}%",
                s.best_shift,
                letter(s.best_shift),
                s.shift_fit * 100.0
            )],
        ),
        CipherType::Rot13 => (
            0.25 + 0.7 * s.rot13_fit,
            vec![format!("A shift of 13 fits English at {:.0}%", s.rot13_fit * 100.0)],
        ),
        CipherType::Atbash => (
            0.2 + 0.75 * s.atbash_fit,
            vec![format!("The reversed alphabet fits English at {:.0}%", s.atbash_fit * 100.0)],
        ),
        CipherType::Affine => (
            0.4 + 0.45 * s.affine_fit,
            vec![format!("The best affine map fits English at {:.0}%", s.affine_fit * 100.0)],
        ),
        CipherType::SimpleSubstitution => (
            0.55 + 0.4 * (1.0 - s.affine_fit),
            vec!["No simple shift or affine map explains the histogram, pointing to a full permutation".to_string()],
        ),
        CipherType::Vigenere => (
            0.75 + 0.25 * s.periodicity,
            vec!["Vigenère shifts each letter by the matching keyword letter".to_string()],
        ),
        CipherType::Beaufort => (
            0.6 + 0.15 * s.periodicity,
            vec!["Beaufort is Vigenère's reciprocal and leaves the same statistics".to_string()],
        ),
        CipherType::Autokey => (
            0.45 + 0.3 * (1.0 - s.periodicity),
            vec!["Autokey extends the primer with plaintext, so repeats do not align with a period".to_string()],
        ),
        CipherType::Columnar => (
            0.8,
            vec!["Columnar transposition writes rows and reads columns in keyword order".to_string()],
        ),
        CipherType::RailFence => (
            0.7,
            vec!["Rail fence writes the text in a zigzag over a few rails".to_string()],
        ),
        CipherType::Playfair => {
            let shape = if s.playfair_shape { 1.0 } else { 0.0 };
            let reason = if s.playfair_shape {
                "Even length and no J, as Playfair output always has"
            } else {
                "Odd length or a J present, which Playfair output never has"
            };
            (0.5 + 0.45 * shape, vec![reason.to_string()])
        }
        CipherType::FourSquare => {
            let shape = if s.playfair_shape { 1.0 } else { 0.0 };
            (
                0.6 + 0.2 * shape,
                vec!["Four-square enciphers pairs through two keyed squares".to_string()],
            )
        }
        CipherType::Hill => (
            0.6 + 0.3 * s.ioc_flatness,
            vec!["Hill mixes whole blocks, flattening single-letter frequencies".to_string()],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypotheses_sorted_with_tie_break() {
        let mut list = vec![
            CipherHypothesis {
                cipher_family: CipherFamily::Transposition,
                cipher_type: CipherType::RailFence,
                confidence: 0.5,
                reasoning: vec![],
            },
            CipherHypothesis {
                cipher_family: CipherFamily::Monoalphabetic,
                cipher_type: CipherType::Caesar,
                confidence: 0.5,
                reasoning: vec![],
            },
            CipherHypothesis {
                cipher_family: CipherFamily::Polygraphic,
                cipher_type: CipherType::Hill,
                confidence: 0.9,
                reasoning: vec![],
            },
        ];
        list.sort_by(compare_hypotheses);
        let order: Vec<_> = list.iter().map(|h| h.cipher_type).collect();
        assert_eq!(order, vec![CipherType::Hill, CipherType::Caesar, CipherType::RailFence]);
    }
}
