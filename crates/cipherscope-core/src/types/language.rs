//! Plaintext languages candidates are scored against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A reference language. [`Language::all`] lists English first, so it
/// wins ties under the default language list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    French,
    German,
    Spanish,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::French, Self::German, Self::Spanish]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::French => "french",
            Self::German => "german",
            Self::Spanish => "spanish",
        }
    }

    /// Capitalized name for explanations.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "French",
            Self::German => "German",
            Self::Spanish => "Spanish",
        }
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::German => "de",
            Self::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Accepts the name or the two-letter code, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|l| l.name() == wanted || l.code() == wanted)
            .ok_or_else(|| format!("unknown language '{}'", s.trim()))
    }
}

/// Languages from a comma-separated list such as `"en,fr"`.
pub fn parse_language_list(raw: &str) -> Result<Vec<Language>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
