//! The 26-letter working alphabet shared by every engine and metric.

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const ALPHABET_SIZE: usize = 26;

pub const VOWELS: &[u8] = b"AEIOU";

/// Index 0..26 of an ASCII letter of either case.
#[inline]
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Uppercase letter for an index taken mod 26.
#[inline]
pub fn letter(index: u8) -> char {
    (b'A' + index % 26) as char
}

/// Letter indices of `text`, skipping everything that is not an ASCII letter.
pub fn indices(text: &str) -> Vec<u8> {
    text.chars().filter_map(index_of).collect()
}

/// Uppercase letters of `text` only.
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn from_indices(indices: &[u8]) -> String {
    indices.iter().map(|&i| letter(i)).collect()
}

/// Rewrite every letter through `f`, uppercasing it; other characters pass
/// through unchanged. `f` is called once per letter, in order, so stateful
/// key streams advance on letters only.
pub fn map_letters(text: &str, mut f: impl FnMut(u8) -> u8) -> String {
    text.chars()
        .map(|c| match index_of(c) {
            Some(i) => letter(f(i)),
            None => c,
        })
        .collect()
}

pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Multiplicative inverse of `a` mod `m`, if `a` and `m` are coprime.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    (old_r == 1).then(|| old_s.rem_euclid(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_letters_keeps_punctuation() {
        let shifted = map_letters("Hi, you!", |i| (i + 1) % 26);
        assert_eq!(shifted, "IJ, ZPV!");
    }

    #[test]
    fn inverses_mod_26() {
        assert_eq!(mod_inverse(3, 26), Some(9));
        assert_eq!(mod_inverse(25, 26), Some(25));
        assert_eq!(mod_inverse(13, 26), None);
        assert_eq!(mod_inverse(-3, 26), Some(17));
    }
}
