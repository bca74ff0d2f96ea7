//! Polygraphic ciphers: letters are enciphered in groups.

pub mod four_square;
pub mod hill;
pub mod playfair;
pub mod square;

pub use four_square::FourSquareEngine;
pub use hill::HillEngine;
pub use playfair::PlayfairEngine;
