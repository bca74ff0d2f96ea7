//! Numeric evidence extracted from a profile, and the per-family
//! confidences built from it.

use cipherscope_core::CipherFamily;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use super::thresholds::{
    scaled_chi_squared, DIGRAPH_MIN_LETTERS, DIGRAPH_RAMP_LETTERS, IOC_ENGLISH, IOC_RANDOM,
};
use crate::alphabet::ALPHABET_SIZE;
use crate::engines::monoalphabetic::affine::VALID_MULTIPLIERS;
use crate::language::LanguageModel;
use crate::stats::frequency::chi_squared;
use crate::stats::StatisticalProfile;

/// Per-100-letter chi-squared at which a frequency fit scores 1/e.
const FIT_SCALE: f64 = 150.0;
/// Bigram cost of English prose and the rise over it that counts as fully
/// disrupted letter order.
const BIGRAM_FIT_ENGLISH: f64 = 2.45;
const BIGRAM_FIT_SPAN: f64 = 0.4;
/// Digraph-to-unigram coincidence ratio: English sits near 2, digraph
/// ciphers well above.
const DIGRAPH_RATIO_FLOOR: f64 = 2.2;
const DIGRAPH_RATIO_SPAN: f64 = 1.2;

fn clamp01(x: f64) -> f64 {
    if x.is_finite() {
        x.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// `exp(-scaled / FIT_SCALE)`: 1 for a perfect frequency fit, towards 0 as it worsens.
fn fit(scaled_chi: f64) -> f64 {
    clamp01((-scaled_chi / FIT_SCALE).exp())
}

/// Evidence derived from one profile. All ratios are in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Signals {
    pub length: usize,
    pub ioc: f64,
    pub scaled_chi_squared: f64,
    /// Upper-tail probability of the unigram chi-squared, 25 degrees of freedom.
    pub chi_squared_p_value: f64,
    /// Gaussian closeness of the IOC to English, widened for short texts.
    pub ioc_closeness: f64,
    /// How far the IOC has fallen from English towards random.
    pub ioc_flatness: f64,
    /// Unigram frequencies match English without any substitution.
    pub frequency_match: f64,
    /// Adjacent letters are unlike English bigrams.
    pub order_disruption: f64,
    /// Aligned letter pairs repeat more than single letters explain.
    pub digraph_excess: f64,
    /// Kasiski examination found a well-supported key length.
    pub periodicity: f64,
    pub best_shift: u8,
    pub shift_fit: f64,
    pub rot13_fit: f64,
    pub atbash_fit: f64,
    pub affine_fit: f64,
    /// Even length and no `J`, as Playfair output always has.
    pub playfair_shape: bool,
}

impl Signals {
    pub fn from_profile(profile: &StatisticalProfile, model: &LanguageModel) -> Self {
        let n = profile.length;
        let ioc = profile.index_of_coincidence;
        let counts = profile.letter_counts();
        let scaled = scaled_chi_squared(profile.chi_squared, n);

        let sigma = 0.008 + 0.3 / n.max(2) as f64;
        let z = (ioc - IOC_ENGLISH) / sigma;
        let ioc_closeness = if n < 2 { 0.0 } else { clamp01((-0.5 * z * z).exp()) };
        let ioc_flatness = if n < 2 {
            0.0
        } else {
            clamp01((IOC_ENGLISH - ioc) / (IOC_ENGLISH - IOC_RANDOM))
        };

        let order_disruption = if n < 2 {
            0.0
        } else {
            clamp01((profile.bigram_fit - BIGRAM_FIT_ENGLISH) / BIGRAM_FIT_SPAN)
        };

        let reliability = clamp01(
            (n as f64 - DIGRAPH_MIN_LETTERS as f64) / DIGRAPH_RAMP_LETTERS as f64,
        );
        let digraph_excess = if ioc > 0.0 {
            let ratio = profile.digraph_coincidence / (ioc * ioc);
            clamp01((ratio - DIGRAPH_RATIO_FLOOR) / DIGRAPH_RATIO_SPAN) * reliability
        } else {
            0.0
        };

        let periodicity = profile
            .key_length_candidates
            .first()
            .map_or(0.0, |c| clamp01(c.excess * 2.5));

        let remapped_fit = |map: &dyn Fn(usize) -> usize| {
            let mut remapped = [0usize; ALPHABET_SIZE];
            for (plain, slot) in remapped.iter_mut().enumerate() {
                *slot = counts[map(plain)];
            }
            fit(scaled_chi_squared(chi_squared(&remapped, model), n))
        };

        let shift_fits: Vec<f64> = (0..ALPHABET_SIZE)
            .map(|s| remapped_fit(&|p| (p + s) % ALPHABET_SIZE))
            .collect();
        let (best_shift, shift_fit) = shift_fits
            .iter()
            .enumerate()
            .fold((0, 0.0), |best, (s, &f)| if f > best.1 { (s, f) } else { best });

        let atbash_fit = remapped_fit(&|p| ALPHABET_SIZE - 1 - p);
        let affine_fit = VALID_MULTIPLIERS
            .iter()
            .flat_map(|&a| (0..ALPHABET_SIZE).map(move |b| (a as usize, b)))
            .map(|(a, b)| remapped_fit(&|p| (a * p + b) % ALPHABET_SIZE))
            .fold(0.0, f64::max);

        let chi_squared_p_value = ChiSquared::new((ALPHABET_SIZE - 1) as f64)
            .map(|dist| clamp01(1.0 - dist.cdf(profile.chi_squared)))
            .unwrap_or(0.0);

        Self {
            length: n,
            ioc,
            scaled_chi_squared: scaled,
            chi_squared_p_value,
            ioc_closeness,
            ioc_flatness,
            frequency_match: if n == 0 { 0.0 } else { fit(scaled) },
            order_disruption,
            digraph_excess,
            periodicity,
            best_shift: best_shift as u8,
            shift_fit: if n == 0 { 0.0 } else { shift_fit },
            rot13_fit: if n == 0 { 0.0 } else { shift_fits[13] },
            atbash_fit: if n == 0 { 0.0 } else { atbash_fit },
            affine_fit: if n == 0 { 0.0 } else { affine_fit },
            playfair_shape: n > 0 && n % 2 == 0 && counts[9] == 0,
        }
    }
}

/// Raw confidence per cipher family, each in [0, 1] and computed
/// independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FamilyScores {
    pub monoalphabetic: f64,
    pub polyalphabetic: f64,
    pub transposition: f64,
    pub polygraphic: f64,
}

impl FamilyScores {
    pub fn from_signals(s: &Signals) -> Self {
        let substituted_order = 1.0 - s.frequency_match * s.order_disruption;
        Self {
            monoalphabetic: clamp01(s.ioc_closeness * substituted_order * (1.0 - 0.8 * s.digraph_excess)),
            polyalphabetic: clamp01(
                s.ioc_flatness * (0.5 + 0.5 * s.periodicity) * (1.0 - 0.7 * s.digraph_excess),
            ),
            transposition: clamp01(
                s.ioc_closeness * s.frequency_match * (0.3 + 0.7 * s.order_disruption),
            ),
            polygraphic: clamp01(s.digraph_excess),
        }
    }

    pub fn get(&self, family: CipherFamily) -> f64 {
        match family {
            CipherFamily::Monoalphabetic => self.monoalphabetic,
            CipherFamily::Polyalphabetic => self.polyalphabetic,
            CipherFamily::Transposition => self.transposition,
            CipherFamily::Polygraphic => self.polygraphic,
        }
    }
}
