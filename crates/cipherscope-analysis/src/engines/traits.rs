//! The CipherEngine trait: one implementation per cipher type.

use cipherscope_core::errors::EngineError;
use cipherscope_core::{CipherFamily, CipherType};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::key::Key;

/// Letters every engine transforms unless it declares otherwise.
pub const FULL_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 5x5 square alphabet, `J` folded into `I`.
pub const SQUARE_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// How a search moves from one key to a nearby one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// Swap two entries of a permutation.
    SwapPair,
    /// Replace one keyword letter.
    PerturbPosition,
    /// Swap two letters of a 5x5 square.
    SquareSwap,
    /// Replace one matrix entry, keeping the matrix invertible.
    MatrixEntry,
}

impl Neighborhood {
    pub fn description(&self) -> &'static str {
        match self {
            Self::SwapPair => "swapping two entries of the key permutation",
            Self::PerturbPosition => "changing one key letter at a time",
            Self::SquareSwap => "swapping two letters of the key square",
            Self::MatrixEntry => "changing one matrix entry while keeping it invertible",
        }
    }
}

/// Size and search strategy of an engine's key space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeySpace {
    /// Small enough to try every key.
    Enumerable { size: usize },
    /// Needs local search from seed keys.
    Heuristic {
        log10_size: f64,
        neighborhood: Neighborhood,
    },
}

impl KeySpace {
    pub fn is_enumerable(&self) -> bool {
        matches!(self, Self::Enumerable { .. })
    }
}

/// Encrypt/decrypt and key-space description for one cipher type.
///
/// Engines never mutate their input, and validate the key before touching
/// the text, so an invalid key never yields partial output.
pub trait CipherEngine: Send + Sync {
    fn cipher_type(&self) -> CipherType;

    fn family(&self) -> CipherFamily {
        self.cipher_type().family()
    }

    /// Human-readable name.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Letters the engine works over. Text made only of these letters
    /// survives an encrypt/decrypt round trip unchanged.
    fn alphabet(&self) -> &'static str {
        FULL_ALPHABET
    }

    /// Whether characters outside the alphabet are carried through unchanged
    /// (substitution ciphers) or dropped (transposition and polygraphic).
    fn preserves_non_letters(&self) -> bool {
        true
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError>;

    /// Parse and validate a key from its boundary string form.
    fn parse_key(&self, raw: &str) -> Result<Key, EngineError>;

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError>;

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError>;

    fn describe_key_space(&self) -> KeySpace;

    /// Every key, for enumerable key spaces. `text_len` lets engines whose
    /// useful keys depend on the text length (rail fence) trim the list.
    fn enumerate_keys(&self, _text_len: usize) -> Vec<Key> {
        Vec::new()
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key;

    /// A key one move away from `key` in the engine's neighborhood.
    fn neighbor(&self, _key: &Key, rng: &mut dyn RngCore) -> Key {
        self.random_key(rng)
    }
}

/// The invalid-key error for a key of the wrong shape.
pub(crate) fn wrong_shape(cipher_type: CipherType, expected: &str, key: &Key) -> EngineError {
    EngineError::invalid_key(
        cipher_type,
        format!("expected a {expected} key, got a {}", key.shape()),
    )
}
