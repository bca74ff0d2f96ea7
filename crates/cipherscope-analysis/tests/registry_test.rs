//! Tests for the cipher registry.

use std::sync::Arc;

use cipherscope_analysis::engines::monoalphabetic::CaesarEngine;
use cipherscope_analysis::engines::CipherRegistry;
use cipherscope_core::config::SearchConfig;
use cipherscope_core::errors::{CipherscopeErrorCode, EngineError, RegistryError};
use cipherscope_core::{CipherFamily, CipherType};

/// The default registry covers every cipher type, in identifier order.
#[test]
fn test_defaults_cover_every_type() {
    let registry = CipherRegistry::with_defaults().unwrap();
    assert_eq!(registry.len(), 13);
    assert!(registry.require(CipherType::all()).is_ok());
    let types = registry.cipher_types();
    let mut sorted = types.clone();
    sorted.sort_by_key(|ct| ct.as_str());
    assert_eq!(types, sorted);
    assert_eq!(types[0], CipherType::Affine);
}

/// Registering a type twice is a configuration error.
#[test]
fn test_duplicate_registration_rejected() {
    let mut registry = CipherRegistry::new();
    registry.register(Arc::new(CaesarEngine)).unwrap();
    let err = registry.register(Arc::new(CaesarEngine)).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::DuplicateRegistration {
            cipher_type: CipherType::Caesar
        }
    ));
    assert_eq!(err.error_code(), "REGISTRY_CONFIGURATION");
    assert_eq!(registry.len(), 1);
}

/// Missing engines are reported by `require` and by lookups.
#[test]
fn test_missing_registration() {
    let mut registry = CipherRegistry::new();
    assert!(registry.is_empty());
    registry.register(Arc::new(CaesarEngine)).unwrap();

    let err = registry
        .require(&[CipherType::Caesar, CipherType::Hill])
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::MissingRegistration {
            cipher_type: CipherType::Hill
        }
    ));
    assert!(matches!(
        registry.get(CipherType::Hill),
        Err(EngineError::UnknownCipherType { .. })
    ));
}

/// Identifier lookup accepts aliases and rejects unknown names.
#[test]
fn test_lookup_by_identifier() {
    let registry = CipherRegistry::with_defaults().unwrap();
    assert_eq!(
        registry.lookup("Rail-Fence").unwrap().cipher_type(),
        CipherType::RailFence
    );
    assert_eq!(
        registry.lookup("substitution").unwrap().cipher_type(),
        CipherType::SimpleSubstitution
    );
    let err = registry.lookup("enigma").err().unwrap();
    assert_eq!(err.error_code(), "UNKNOWN_CIPHER_TYPE");
}

/// Family views partition the registry.
#[test]
fn test_types_in_family() {
    let registry = CipherRegistry::with_defaults().unwrap();
    assert_eq!(
        registry.types_in_family(CipherFamily::Transposition),
        vec![CipherType::Columnar, CipherType::RailFence]
    );
    let total: usize = CipherFamily::all()
        .iter()
        .map(|f| registry.types_in_family(*f).len())
        .sum();
    assert_eq!(total, registry.len());
}

/// Search limits from config reach the engines that use them.
#[test]
fn test_from_config_limits_rails() {
    let config = SearchConfig {
        max_rails: Some(4),
        ..SearchConfig::default()
    };
    let registry = CipherRegistry::from_config(&config).unwrap();
    let rail_fence = registry.get(CipherType::RailFence).unwrap();
    assert_eq!(rail_fence.enumerate_keys(1000).len(), 3);
}
