//! Reference values and bands shared by detection and explanations.

/// Index of coincidence of English text.
pub const IOC_ENGLISH: f64 = 0.0667;
/// Index of coincidence of uniformly random letters (1/26).
pub const IOC_RANDOM: f64 = 0.0385;
/// Typical unigram entropy of English, in bits.
pub const ENTROPY_ENGLISH: f64 = 4.1;
/// `log2(26)`.
pub const ENTROPY_MAX: f64 = 4.7;

/// Minimum letters for digraph statistics to count at all; full weight
/// from `DIGRAPH_MIN_LETTERS + DIGRAPH_RAMP_LETTERS`.
pub const DIGRAPH_MIN_LETTERS: usize = 40;
pub const DIGRAPH_RAMP_LETTERS: usize = 160;

/// Chi-squared is compared per 100 letters so bands do not depend on length.
pub fn scaled_chi_squared(chi_squared: f64, length: usize) -> f64 {
    if length == 0 {
        0.0
    } else {
        chi_squared * 100.0 / length as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IocBand {
    English,
    Intermediate,
    Low,
    Random,
}

impl IocBand {
    pub fn of(ioc: f64) -> Self {
        if ioc >= 0.060 {
            Self::English
        } else if ioc >= 0.045 {
            Self::Intermediate
        } else if ioc >= 0.040 {
            Self::Low
        } else {
            Self::Random
        }
    }

    pub fn interpretation(&self) -> String {
        match self {
            Self::English => format!(
                "This is close to English ({IOC_ENGLISH:.4}), suggesting monoalphabetic substitution or transposition."
            ),
            Self::Intermediate => "This is between English and random, suggesting a polyalphabetic cipher with a short key or a polygraphic cipher."
                .to_string(),
            Self::Low => format!(
                "This is closer to random ({IOC_RANDOM:.4}), suggesting polyalphabetic encryption with a longer key."
            ),
            Self::Random => "This is near random, suggesting a very long key or a polygraphic cipher."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyBand {
    Low,
    Moderate,
    Elevated,
    NearMaximum,
}

impl EntropyBand {
    pub fn of(entropy: f64) -> Self {
        if entropy < 3.5 {
            Self::Low
        } else if entropy < 4.0 {
            Self::Moderate
        } else if entropy < 4.5 {
            Self::Elevated
        } else {
            Self::NearMaximum
        }
    }

    pub fn interpretation(&self) -> String {
        match self {
            Self::Low => "Low entropy indicates highly structured text.".to_string(),
            Self::Moderate => "Moderate entropy, consistent with natural language.".to_string(),
            Self::Elevated => "Higher entropy suggests some randomization.".to_string(),
            Self::NearMaximum => {
                format!("Near-maximum entropy ({ENTROPY_MAX:.1}) suggests high randomness.")
            }
        }
    }
}

/// Bands of chi-squared per 100 letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChiBand {
    Excellent,
    Good,
    Moderate,
    Significant,
    Large,
}

impl ChiBand {
    pub fn of(scaled_chi_squared: f64) -> Self {
        if scaled_chi_squared < 50.0 {
            Self::Excellent
        } else if scaled_chi_squared < 100.0 {
            Self::Good
        } else if scaled_chi_squared < 200.0 {
            Self::Moderate
        } else if scaled_chi_squared < 400.0 {
            Self::Significant
        } else {
            Self::Large
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent match to English letter frequencies.",
            Self::Good => "Good match to English, likely real text or a transposition.",
            Self::Moderate => "Moderate deviation from English.",
            Self::Significant => "Significant deviation, possibly substituted or non-English.",
            Self::Large => "Large deviation from English letter distribution.",
        }
    }
}
