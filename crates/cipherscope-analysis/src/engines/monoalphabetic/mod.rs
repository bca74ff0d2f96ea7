//! Monoalphabetic substitution ciphers: one fixed letter mapping.

pub mod affine;
pub mod atbash;
pub mod caesar;
pub mod rot13;
pub mod substitution;

pub use affine::AffineEngine;
pub use atbash::AtbashEngine;
pub use caesar::CaesarEngine;
pub use rot13::Rot13Engine;
pub use substitution::SubstitutionEngine;

use crate::alphabet::map_letters;

/// Shift every letter forward by `shift` places.
pub(crate) fn shift_letters(text: &str, shift: u32) -> String {
    let shift = (shift % 26) as u8;
    map_letters(text, |i| (i + shift) % 26)
}
