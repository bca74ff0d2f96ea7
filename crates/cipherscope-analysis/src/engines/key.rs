//! Cipher keys.
//!
//! One closed enum covers every key shape. Each engine accepts only the
//! variant it declares and rejects the rest as an invalid key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A key for one cipher type. `Display` renders the same form the owning
/// engine's `parse_key` accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Key {
    /// Alphabet shift (Caesar, ROT13).
    Shift { shift: u32 },
    /// Keyless cipher (Atbash).
    Fixed,
    /// `E(x) = a*x + b mod 26`.
    Affine { a: u32, b: u32 },
    /// Full substitution alphabet: plaintext letter `i` encrypts to `alphabet[i]`.
    Alphabet { alphabet: String },
    /// Keyword or primer (Vigenère, Beaufort, autokey, Playfair).
    Keyword { keyword: String },
    /// Rail count for the rail fence.
    Rails { rails: usize },
    /// Column read order for columnar transposition: `order[k]` is the
    /// column read `k`-th.
    Columns { order: Vec<usize> },
    /// Row-major `size` x `size` matrix mod 26 (Hill).
    Matrix { size: usize, entries: Vec<u32> },
    /// Keywords of the two cipher squares (four-square).
    KeywordPair { first: String, second: String },
}

impl Key {
    /// Short name of the key shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Shift { .. } => "shift",
            Self::Fixed => "fixed",
            Self::Affine { .. } => "affine pair",
            Self::Alphabet { .. } => "substitution alphabet",
            Self::Keyword { .. } => "keyword",
            Self::Rails { .. } => "rail count",
            Self::Columns { .. } => "column order",
            Self::Matrix { .. } => "matrix",
            Self::KeywordPair { .. } => "keyword pair",
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shift { shift } => write!(f, "{shift}"),
            Self::Fixed => f.write_str("none"),
            Self::Affine { a, b } => write!(f, "{a},{b}"),
            Self::Alphabet { alphabet } => f.write_str(alphabet),
            Self::Keyword { keyword } => f.write_str(keyword),
            Self::Rails { rails } => write!(f, "{rails}"),
            Self::Columns { order } => f.write_str(&join(order)),
            Self::Matrix { entries, .. } => f.write_str(&join(entries)),
            Self::KeywordPair { first, second } => write!(f, "{first},{second}"),
        }
    }
}

/// Numbers in `raw`, split on anything that is not a digit. `None` when a
/// non-separator character other than a digit appears.
pub(crate) fn parse_numbers(raw: &str) -> Option<Vec<u32>> {
    if raw
        .chars()
        .any(|c| !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, ',' | ';' | '[' | ']')))
    {
        return None;
    }
    raw.split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect()
}

/// Uppercased keyword when `raw` is letters only (surrounding whitespace ignored).
pub(crate) fn parse_letters(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(Key::Shift { shift: 3 }.to_string(), "3");
        assert_eq!(Key::Affine { a: 5, b: 8 }.to_string(), "5,8");
        assert_eq!(Key::Columns { order: vec![2, 0, 1] }.to_string(), "2,0,1");
        assert_eq!(
            Key::KeywordPair {
                first: "EXAMPLE".into(),
                second: "KEYWORD".into()
            }
            .to_string(),
            "EXAMPLE,KEYWORD"
        );
    }

    #[test]
    fn tagged_json() {
        let json = serde_json::to_value(Key::Affine { a: 5, b: 8 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "affine", "a": 5, "b": 8}));
        let key: Key = serde_json::from_value(serde_json::json!({"kind": "fixed"})).unwrap();
        assert_eq!(key, Key::Fixed);
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_numbers("3, 3; 2 5"), Some(vec![3, 3, 2, 5]));
        assert_eq!(parse_numbers("[[3,3],[2,5]]"), Some(vec![3, 3, 2, 5]));
        assert_eq!(parse_numbers("a=5"), None);
        assert_eq!(parse_letters(" lemon "), Some("LEMON".into()));
        assert_eq!(parse_letters("le mon"), None);
    }
}
