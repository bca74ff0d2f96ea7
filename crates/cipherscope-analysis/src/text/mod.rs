//! Input normalization.
//!
//! A [`NormalizedText`] carries two views of the same input: the uppercase
//! letters-only form that statistics and scoring run on, and a display form
//! shaped by the configured [`NormalizationMode`] that key search decrypts.

use cipherscope_core::config::NormalizationMode;
use serde::{Deserialize, Serialize};

/// Immutable normalized view of one raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    letters: String,
    display: String,
    mode: NormalizationMode,
}

impl NormalizedText {
    pub fn new(raw: &str, mode: NormalizationMode) -> Self {
        let letters: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let display = match mode {
            NormalizationMode::Strict => letters.clone(),
            NormalizationMode::PreserveSpaces => collapse_spaces(raw),
            NormalizationMode::PreservePunctuation => raw.trim().to_ascii_uppercase(),
            NormalizationMode::PreserveCase => {
                raw.chars().filter(|c| c.is_ascii_alphabetic()).collect()
            }
            NormalizationMode::Raw => raw.to_string(),
        };

        Self {
            letters,
            display,
            mode,
        }
    }

    /// Uppercase A-Z only.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Form handed to cipher engines.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn mode(&self) -> NormalizationMode {
        self.mode
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Uppercase letters with whitespace runs collapsed to one space.
fn collapse_spaces(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        if c.is_ascii_alphabetic() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_uppercase());
        } else if c.is_whitespace() {
            pending_space = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_keeps_letters_only() {
        let text = NormalizedText::new("Khoor, Zruog!", NormalizationMode::Strict);
        assert_eq!(text.letters(), "KHOORZRUOG");
        assert_eq!(text.display(), "KHOORZRUOG");
        assert_eq!(text.len(), 10);
    }

    #[test]
    fn preserve_spaces_collapses_runs() {
        let text = NormalizedText::new("  khoor,\t\n zruog 42 ", NormalizationMode::PreserveSpaces);
        assert_eq!(text.display(), "KHOOR ZRUOG");
        assert_eq!(text.letters(), "KHOORZRUOG");
    }

    #[test]
    fn punctuation_and_case_modes() {
        let text = NormalizedText::new("Khoor, Zruog!", NormalizationMode::PreservePunctuation);
        assert_eq!(text.display(), "KHOOR, ZRUOG!");
        let text = NormalizedText::new("Khoor, Zruog!", NormalizationMode::PreserveCase);
        assert_eq!(text.display(), "KhoorZruog");
        let text = NormalizedText::new(" Khoor ", NormalizationMode::Raw);
        assert_eq!(text.display(), " Khoor ");
    }

    #[test]
    fn non_ascii_letters_are_outside_the_alphabet() {
        let text = NormalizedText::new("Ça été", NormalizationMode::Strict);
        assert_eq!(text.letters(), "AT");
        assert!(!text.is_empty());
        assert!(NormalizedText::new("123 !?", NormalizationMode::Strict).is_empty());
    }
}
