//! Cipher families and cipher types.
//!
//! The taxonomy is closed: every cipher type belongs to exactly one family,
//! and the set of families never changes at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Structural category of a classical cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherFamily {
    Monoalphabetic,
    Polyalphabetic,
    Transposition,
    Polygraphic,
}

impl CipherFamily {
    pub fn all() -> &'static [CipherFamily] {
        &[
            Self::Monoalphabetic,
            Self::Polyalphabetic,
            Self::Transposition,
            Self::Polygraphic,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Monoalphabetic => "monoalphabetic",
            Self::Polyalphabetic => "polyalphabetic",
            Self::Transposition => "transposition",
            Self::Polygraphic => "polygraphic",
        }
    }
}

impl fmt::Display for CipherFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Concrete cipher type. The identifier (`as_str`) is the stable tag used
/// at the service boundary and for deterministic tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherType {
    Caesar,
    Rot13,
    Atbash,
    Affine,
    SimpleSubstitution,
    Vigenere,
    Beaufort,
    Autokey,
    Columnar,
    RailFence,
    Playfair,
    FourSquare,
    Hill,
}

impl CipherType {
    pub fn all() -> &'static [CipherType] {
        &[
            Self::Caesar,
            Self::Rot13,
            Self::Atbash,
            Self::Affine,
            Self::SimpleSubstitution,
            Self::Vigenere,
            Self::Beaufort,
            Self::Autokey,
            Self::Columnar,
            Self::RailFence,
            Self::Playfair,
            Self::FourSquare,
            Self::Hill,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Rot13 => "rot13",
            Self::Atbash => "atbash",
            Self::Affine => "affine",
            Self::SimpleSubstitution => "simple_substitution",
            Self::Vigenere => "vigenere",
            Self::Beaufort => "beaufort",
            Self::Autokey => "autokey",
            Self::Columnar => "columnar",
            Self::RailFence => "rail_fence",
            Self::Playfair => "playfair",
            Self::FourSquare => "four_square",
            Self::Hill => "hill",
        }
    }

    pub fn family(&self) -> CipherFamily {
        match self {
            Self::Caesar | Self::Rot13 | Self::Atbash | Self::Affine | Self::SimpleSubstitution => {
                CipherFamily::Monoalphabetic
            }
            Self::Vigenere | Self::Beaufort | Self::Autokey => CipherFamily::Polyalphabetic,
            Self::Columnar | Self::RailFence => CipherFamily::Transposition,
            Self::Playfair | Self::FourSquare | Self::Hill => CipherFamily::Polygraphic,
        }
    }

    /// Recovery tier: cheap enumerable searches first, periodic next,
    /// combinatorial last.
    pub fn tier(&self) -> u8 {
        match self {
            Self::Caesar | Self::Rot13 | Self::Atbash | Self::Affine | Self::RailFence => 1,
            Self::Vigenere | Self::Beaufort | Self::Autokey | Self::Columnar => 2,
            Self::SimpleSubstitution | Self::Playfair | Self::FourSquare | Self::Hill => 3,
        }
    }
}

impl fmt::Display for CipherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for CipherType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by identifier so sorts tie-break lexicographically.
impl Ord for CipherType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl FromStr for CipherType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let found = match normalized.as_str() {
            "substitution" => Some(Self::SimpleSubstitution),
            "railfence" => Some(Self::RailFence),
            "foursquare" => Some(Self::FourSquare),
            other => Self::all().iter().copied().find(|t| t.as_str() == other),
        };
        found.ok_or_else(|| EngineError::UnknownCipherType {
            cipher_type: s.to_string(),
        })
    }
}
