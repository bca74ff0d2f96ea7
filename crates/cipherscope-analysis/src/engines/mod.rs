//! Cipher engines and the registry that maps cipher types to them.

pub mod key;
pub mod monoalphabetic;
pub mod polyalphabetic;
pub mod polygraphic;
pub mod registry;
pub mod traits;
pub mod transposition;

pub use key::Key;
pub use registry::CipherRegistry;
pub use traits::{CipherEngine, KeySpace, Neighborhood};
