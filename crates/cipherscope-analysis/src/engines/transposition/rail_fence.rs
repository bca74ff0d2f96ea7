//! Rail fence: letters written in a zigzag over several rails, read rail by rail.

use cipherscope_core::constants::DEFAULT_MAX_RAILS;
use cipherscope_core::errors::EngineError;
use cipherscope_core::CipherType;
use rand::{Rng, RngCore};

use super::{gather, scatter};
use crate::alphabet::{from_indices, indices};
use crate::engines::key::{parse_numbers, Key};
use crate::engines::traits::{wrong_shape, CipherEngine, KeySpace};

pub struct RailFenceEngine {
    max_rails: usize,
}

impl RailFenceEngine {
    /// `max_rails` bounds the enumerated key space and the accepted keys.
    pub fn new(max_rails: usize) -> Self {
        Self {
            max_rails: max_rails.max(2),
        }
    }

    fn rails(&self, key: &Key) -> Result<usize, EngineError> {
        match key {
            Key::Rails { rails } if *rails < 2 => Err(EngineError::invalid_key(
                CipherType::RailFence,
                format!("rail count {rails} must be at least 2"),
            )),
            Key::Rails { rails } if *rails > self.max_rails => Err(EngineError::invalid_key(
                CipherType::RailFence,
                format!("rail count {rails} exceeds the maximum of {}", self.max_rails),
            )),
            Key::Rails { rails } => Ok(*rails),
            other => Err(wrong_shape(CipherType::RailFence, "rail count", other)),
        }
    }
}

impl Default for RailFenceEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RAILS)
    }
}

/// Text positions in ciphertext order.
fn zigzag_order(n: usize, rails: usize) -> Vec<usize> {
    let cycle = 2 * (rails - 1);
    let rail_of = |i: usize| {
        let r = i % cycle;
        if r < rails {
            r
        } else {
            cycle - r
        }
    };
    let mut positions: Vec<usize> = (0..n).collect();
    positions.sort_by_key(|&i| (rail_of(i), i));
    positions
}

impl CipherEngine for RailFenceEngine {
    fn cipher_type(&self) -> CipherType {
        CipherType::RailFence
    }

    fn name(&self) -> &'static str {
        "Rail fence"
    }

    fn description(&self) -> &'static str {
        "Writes letters in a zigzag across a number of rails and reads each rail in turn."
    }

    fn preserves_non_letters(&self) -> bool {
        false
    }

    fn validate_key(&self, key: &Key) -> Result<(), EngineError> {
        self.rails(key).map(|_| ())
    }

    fn parse_key(&self, raw: &str) -> Result<Key, EngineError> {
        let key = match parse_numbers(raw).as_deref() {
            Some(&[rails]) => Key::Rails {
                rails: rails as usize,
            },
            _ => {
                return Err(EngineError::invalid_key(
                    CipherType::RailFence,
                    format!("'{}' is not a rail count", raw.trim()),
                ))
            }
        };
        self.validate_key(&key)?;
        Ok(key)
    }

    fn encrypt(&self, plaintext: &str, key: &Key) -> Result<String, EngineError> {
        let rails = self.rails(key)?;
        let letters = indices(plaintext);
        let order = zigzag_order(letters.len(), rails);
        Ok(from_indices(&gather(&letters, &order)))
    }

    fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, EngineError> {
        let rails = self.rails(key)?;
        let letters = indices(ciphertext);
        let order = zigzag_order(letters.len(), rails);
        Ok(from_indices(&scatter(&letters, &order)))
    }

    fn describe_key_space(&self) -> KeySpace {
        KeySpace::Enumerable {
            size: self.max_rails - 1,
        }
    }

    /// Rails `2..` up to the configured maximum; more rails than letters
    /// only reproduce the text.
    fn enumerate_keys(&self, text_len: usize) -> Vec<Key> {
        let upper = self.max_rails.min(text_len.saturating_sub(1)).max(2);
        (2..=upper).map(|rails| Key::Rails { rails }).collect()
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> Key {
        Key::Rails {
            rails: rng.gen_range(2..=self.max_rails.min(6)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_rail_example() {
        let key = Key::Rails { rails: 3 };
        let engine = RailFenceEngine::default();
        let ct = engine.encrypt("WE ARE DISCOVERED FLEE AT ONCE", &key).unwrap();
        assert_eq!(ct, "WECRLTEERDSOEEFEAOCAIVDEN");
        assert_eq!(engine.decrypt(&ct, &key).unwrap(), "WEAREDISCOVEREDFLEEATONCE");
    }

    #[test]
    fn enumeration_is_bounded_by_text() {
        let engine = RailFenceEngine::new(20);
        assert_eq!(engine.enumerate_keys(5).len(), 3);
        assert_eq!(engine.enumerate_keys(500).len(), 19);
        assert_eq!(engine.enumerate_keys(0).len(), 1);
    }

    #[test]
    fn one_rail_is_invalid() {
        assert!(RailFenceEngine::default().parse_key("1").is_err());
    }

    #[test]
    fn rails_above_maximum_are_invalid() {
        let engine = RailFenceEngine::new(8);
        assert!(engine.validate_key(&Key::Rails { rails: 8 }).is_ok());
        let err = engine
            .encrypt("ATTACK AT DAWN", &Key::Rails { rails: 9 })
            .unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum of 8"), "{err}");
        assert!(engine
            .decrypt("ATTACK AT DAWN", &Key::Rails { rails: usize::MAX })
            .is_err());
    }
}
