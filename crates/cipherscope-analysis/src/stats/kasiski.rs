//! Kasiski examination.

use super::types::{KeyLengthCandidate, RepeatedSequence};

/// Positions per sequence considered for distances.
const MAX_OCCURRENCES: usize = 32;

/// Key-length candidates reported.
const MAX_CANDIDATES: usize = 5;

/// All pairwise distances between occurrences of each repeated sequence,
/// ascending.
pub fn distances(repeats: &[RepeatedSequence]) -> Vec<usize> {
    let mut distances = Vec::new();
    for repeat in repeats {
        let positions = &repeat.positions[..repeat.positions.len().min(MAX_OCCURRENCES)];
        for (i, &a) in positions.iter().enumerate() {
            for &b in &positions[i + 1..] {
                distances.push(b.abs_diff(a));
            }
        }
    }
    distances.sort_unstable();
    distances
}

/// Divisors `2..=max_key_length` shared by many distances.
///
/// Unrelated distances are divisible by `k` about `1/k` of the time, so each
/// divisor is ranked by how far its observed share exceeds that baseline.
/// This is a coincidence count, not a proof of the key length.
pub fn key_length_candidates(distances: &[usize], max_key_length: usize) -> Vec<KeyLengthCandidate> {
    if distances.is_empty() {
        return Vec::new();
    }
    let total = distances.len() as f64;
    let mut candidates: Vec<KeyLengthCandidate> = (2..=max_key_length)
        .filter_map(|length| {
            let support = distances
                .iter()
                .filter(|&&d| d > 0 && d % length == 0)
                .count();
            let excess = support as f64 / total - 1.0 / length as f64;
            (support >= 2 && excess > 0.0).then_some(KeyLengthCandidate {
                length,
                support,
                excess,
            })
        })
        .collect();
    candidates.sort_by(|a, b| {
        b.excess
            .total_cmp(&a.excess)
            .then(a.length.cmp(&b.length))
    });
    candidates.truncate(MAX_CANDIDATES);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(positions: &[usize]) -> RepeatedSequence {
        RepeatedSequence {
            sequence: "ABC".into(),
            positions: positions.to_vec(),
        }
    }

    #[test]
    fn distances_are_pairwise() {
        let d = distances(&[repeat(&[0, 10, 25])]);
        assert_eq!(d, vec![10, 15, 25]);
    }

    #[test]
    fn period_five_wins_over_its_divisors_and_multiples() {
        let d = vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 55];
        let candidates = key_length_candidates(&d, 20);
        assert_eq!(candidates[0].length, 5);
        assert_eq!(candidates[0].support, 10);
    }

    #[test]
    fn empty_distances_give_nothing() {
        assert!(key_length_candidates(&[], 20).is_empty());
    }
}
