//! Polyalphabetic ciphers: the substitution changes letter by letter,
//! driven by a keyword or by the text itself.

pub mod autokey;
pub mod beaufort;
pub mod vigenere;

pub use autokey::AutokeyEngine;
pub use beaufort::BeaufortEngine;
pub use vigenere::VigenereEngine;

use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::{Rng, RngCore};

use crate::alphabet::{from_indices, indices};
use crate::engines::key::{parse_letters, Key};
use crate::engines::traits::wrong_shape;

/// Longest keyword accepted.
pub const MAX_KEYWORD_LENGTH: usize = 64;

/// Keyword letters as indices, validated.
pub(crate) fn keyword_indices(cipher_type: CipherType, key: &Key) -> Result<Vec<u8>, EngineError> {
    let keyword = match key {
        Key::Keyword { keyword } => keyword,
        other => return Err(wrong_shape(cipher_type, "keyword", other)),
    };
    if keyword.is_empty() || !keyword.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(EngineError::invalid_key(
            cipher_type,
            format!("keyword must be non-empty uppercase letters, got '{keyword}'"),
        ));
    }
    if keyword.len() > MAX_KEYWORD_LENGTH {
        return Err(EngineError::invalid_key(
            cipher_type,
            format!("keyword longer than {MAX_KEYWORD_LENGTH} letters"),
        ));
    }
    Ok(indices(keyword))
}

pub(crate) fn parse_keyword(cipher_type: CipherType, raw: &str) -> Result<Key, EngineError> {
    let keyword = parse_letters(raw).ok_or_else(|| {
        EngineError::invalid_key(cipher_type, format!("'{}' is not an alphabetic keyword", raw.trim()))
    })?;
    let key = Key::Keyword { keyword };
    keyword_indices(cipher_type, &key)?;
    Ok(key)
}

pub(crate) fn random_keyword(rng: &mut dyn RngCore, min_len: usize, max_len: usize) -> Key {
    let len = rng.gen_range(min_len..=max_len);
    let letters: Vec<u8> = (0..len).map(|_| rng.gen_range(0..26u8)).collect();
    Key::Keyword {
        keyword: from_indices(&letters),
    }
}

/// Replace one keyword letter with a different one.
pub(crate) fn perturb_keyword(key: &Key, rng: &mut dyn RngCore) -> Option<Key> {
    let Key::Keyword { keyword } = key else {
        return None;
    };
    let mut letters = indices(keyword);
    if letters.is_empty() {
        return None;
    }
    let pos = rng.gen_range(0..letters.len());
    letters[pos] = (letters[pos] + rng.gen_range(1..26u8)) % 26;
    Some(Key::Keyword {
        keyword: from_indices(&letters),
    })
}

/// log10 of the number of keywords up to `max_len` letters.
pub(crate) fn log10_keywords(max_len: usize) -> f64 {
    max_len as f64 * 26f64.log10()
}
