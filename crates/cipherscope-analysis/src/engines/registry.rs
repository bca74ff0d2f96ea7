//! Startup-time table from cipher type to engine.
//!
//! Built once from an explicit registration list and read-only afterwards,
//! so a registry can be shared across threads behind an `Arc`.

use std::sync::Arc;

use cipherscope_core::config::SearchConfig;
use cipherscope_core::errors::{EngineError, RegistryError};
use cipherscope_core::types::collections::FxHashMap;
use cipherscope_core::{CipherFamily, CipherType};

use super::monoalphabetic::{AffineEngine, AtbashEngine, CaesarEngine, Rot13Engine, SubstitutionEngine};
use super::polyalphabetic::{AutokeyEngine, BeaufortEngine, VigenereEngine};
use super::polygraphic::{FourSquareEngine, HillEngine, PlayfairEngine};
use super::transposition::{ColumnarEngine, RailFenceEngine};
use super::traits::CipherEngine;

#[derive(Default, Clone)]
pub struct CipherRegistry {
    engines: FxHashMap<CipherType, Arc<dyn CipherEngine>>,
}

impl std::fmt::Debug for CipherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherRegistry")
            .field("cipher_types", &self.cipher_types())
            .finish()
    }
}

impl CipherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an engine. A second engine for the same cipher type is a
    /// configuration error.
    pub fn register(&mut self, engine: Arc<dyn CipherEngine>) -> Result<(), RegistryError> {
        let cipher_type = engine.cipher_type();
        if self.engines.contains_key(&cipher_type) {
            return Err(RegistryError::DuplicateRegistration { cipher_type });
        }
        tracing::debug!(cipher_type = %cipher_type, "registered cipher engine");
        self.engines.insert(cipher_type, engine);
        Ok(())
    }

    /// Every built-in engine with default limits.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        Self::from_config(&SearchConfig::default())
    }

    /// Every built-in engine, limits taken from `config`.
    pub fn from_config(config: &SearchConfig) -> Result<Self, RegistryError> {
        let engines: [Arc<dyn CipherEngine>; 13] = [
            Arc::new(CaesarEngine),
            Arc::new(Rot13Engine),
            Arc::new(AtbashEngine),
            Arc::new(AffineEngine),
            Arc::new(SubstitutionEngine),
            Arc::new(VigenereEngine),
            Arc::new(BeaufortEngine),
            Arc::new(AutokeyEngine),
            Arc::new(ColumnarEngine),
            Arc::new(RailFenceEngine::new(config.effective_max_rails())),
            Arc::new(PlayfairEngine),
            Arc::new(FourSquareEngine),
            Arc::new(HillEngine),
        ];
        let mut registry = Self::new();
        for engine in engines {
            registry.register(engine)?;
        }
        Ok(registry)
    }

    pub fn get(&self, cipher_type: CipherType) -> Result<&dyn CipherEngine, EngineError> {
        self.engines
            .get(&cipher_type)
            .map(|engine| engine.as_ref())
            .ok_or_else(|| EngineError::UnknownCipherType {
                cipher_type: cipher_type.to_string(),
            })
    }

    /// Resolve an identifier string (aliases accepted) to a registered engine.
    pub fn lookup(&self, id: &str) -> Result<&dyn CipherEngine, EngineError> {
        let cipher_type: CipherType = id.parse()?;
        self.get(cipher_type)
    }

    pub fn contains(&self, cipher_type: CipherType) -> bool {
        self.engines.contains_key(&cipher_type)
    }

    /// Fail unless every listed type is registered.
    pub fn require(&self, cipher_types: &[CipherType]) -> Result<(), RegistryError> {
        match cipher_types.iter().find(|ct| !self.contains(**ct)) {
            Some(&cipher_type) => Err(RegistryError::MissingRegistration { cipher_type }),
            None => Ok(()),
        }
    }

    /// Registered types in identifier order.
    pub fn cipher_types(&self) -> Vec<CipherType> {
        let mut types: Vec<CipherType> = self.engines.keys().copied().collect();
        types.sort();
        types
    }

    pub fn types_in_family(&self, family: CipherFamily) -> Vec<CipherType> {
        self.cipher_types()
            .into_iter()
            .filter(|ct| ct.family() == family)
            .collect()
    }

    /// Engines in identifier order.
    pub fn engines(&self) -> Vec<&dyn CipherEngine> {
        self.cipher_types()
            .into_iter()
            .filter_map(|ct| self.engines.get(&ct).map(|e| e.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
