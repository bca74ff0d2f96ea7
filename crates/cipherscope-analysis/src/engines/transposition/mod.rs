//! Transposition ciphers: letters keep their identity but change places.
//! Both engines work on the letters of the text only.

pub mod columnar;
pub mod rail_fence;

pub use columnar::ColumnarEngine;
pub use rail_fence::RailFenceEngine;

/// Apply a position permutation: output position `k` takes input position
/// `order[k]`.
pub(crate) fn gather(letters: &[u8], order: &[usize]) -> Vec<u8> {
    order.iter().map(|&i| letters[i]).collect()
}

/// Invert [`gather`]: input position `order[k]` receives output `k`.
pub(crate) fn scatter(letters: &[u8], order: &[usize]) -> Vec<u8> {
    let mut out = vec![0u8; letters.len()];
    for (k, &i) in order.iter().enumerate() {
        out[i] = letters[k];
    }
    out
}
