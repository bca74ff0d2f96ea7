//! Shared types: collections, the cipher taxonomy and reference languages.

pub mod cipher;
pub mod collections;
pub mod language;

pub use cipher::{CipherFamily, CipherType};
pub use language::Language;
