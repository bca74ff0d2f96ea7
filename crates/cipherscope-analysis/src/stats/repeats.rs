//! Repeated-sequence search.
//!
//! Short texts use direct substring comparison. Above a size threshold the
//! search switches to a hash index over every window, which stays linear in
//! the text length per sequence length.

use cipherscope_core::types::collections::{FxHashMap, SmallVec4};

use super::types::RepeatedSequence;
use crate::alphabet::from_indices;

/// Bounds for a repeated-sequence search.
#[derive(Debug, Clone, Copy)]
pub struct RepeatBounds {
    pub min_length: usize,
    pub max_length: usize,
    pub max_results: usize,
}

/// Every repeated sequence within `bounds`, ranked by occurrence count then
/// length (both descending) then sequence text, truncated to `max_results`.
pub fn find_repeats(indices: &[u8], bounds: RepeatBounds, index_threshold: usize) -> Vec<RepeatedSequence> {
    let mut found = if indices.len() > index_threshold {
        find_repeats_indexed(indices, bounds)
    } else {
        find_repeats_naive(indices, bounds)
    };
    rank(&mut found);
    found.truncate(bounds.max_results);
    found
}

/// Pairwise substring comparison. Quadratic; used for short inputs only.
pub fn find_repeats_naive(indices: &[u8], bounds: RepeatBounds) -> Vec<RepeatedSequence> {
    let n = indices.len();
    let mut found = Vec::new();
    for len in bounds.min_length.max(1)..=bounds.max_length {
        if len > n {
            break;
        }
        let windows = n - len + 1;
        let mut claimed = vec![false; windows];
        for i in 0..windows {
            if claimed[i] {
                continue;
            }
            let needle = &indices[i..i + len];
            let mut positions = vec![i];
            for j in i + 1..windows {
                if !claimed[j] && &indices[j..j + len] == needle {
                    claimed[j] = true;
                    positions.push(j);
                }
            }
            if positions.len() > 1 {
                found.push(RepeatedSequence {
                    sequence: from_indices(needle),
                    positions,
                });
            }
        }
    }
    found
}

/// Hash index over all windows of each length.
pub fn find_repeats_indexed(indices: &[u8], bounds: RepeatBounds) -> Vec<RepeatedSequence> {
    let n = indices.len();
    let mut found = Vec::new();
    for len in bounds.min_length.max(1)..=bounds.max_length {
        if len > n {
            break;
        }
        let mut index: FxHashMap<&[u8], SmallVec4<usize>> = FxHashMap::default();
        for (start, window) in indices.windows(len).enumerate() {
            index.entry(window).or_default().push(start);
        }
        found.extend(
            index
                .into_iter()
                .filter(|(_, positions)| positions.len() > 1)
                .map(|(window, positions)| RepeatedSequence {
                    sequence: from_indices(window),
                    positions: positions.into_vec(),
                }),
        );
    }
    found
}

fn rank(found: &mut [RepeatedSequence]) {
    found.sort_by(|a, b| {
        b.count()
            .cmp(&a.count())
            .then(b.sequence.len().cmp(&a.sequence.len()))
            .then(a.sequence.cmp(&b.sequence))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::indices;

    const BOUNDS: RepeatBounds = RepeatBounds {
        min_length: 3,
        max_length: 10,
        max_results: usize::MAX,
    };

    #[test]
    fn finds_positions_of_repeat() {
        let text = indices("ABCXYZABCQQABC");
        let found = find_repeats(&text, BOUNDS, 1000);
        let abc = found.iter().find(|r| r.sequence == "ABC").unwrap();
        assert_eq!(abc.positions, vec![0, 6, 11]);
        assert_eq!(found[0].sequence, "ABC");
    }

    #[test]
    fn naive_and_indexed_agree() {
        let text = indices(
            "LXFOPVEFRNHRLXFOPVEFRNHRTHEQUICKBROWNFOXTHEQUICKBROWNFOXWITHTHEOTHERWITHTHE",
        );
        let mut naive = find_repeats_naive(&text, BOUNDS);
        let mut indexed = find_repeats_indexed(&text, BOUNDS);
        rank(&mut naive);
        rank(&mut indexed);
        assert_eq!(naive, indexed);
        // Threshold only changes the algorithm, not the answer.
        assert_eq!(find_repeats(&text, BOUNDS, 0), find_repeats(&text, BOUNDS, 10_000));
    }

    #[test]
    fn no_repeats_in_short_text() {
        assert!(find_repeats(&indices("AB"), BOUNDS, 1000).is_empty());
        assert!(find_repeats(&[], BOUNDS, 1000).is_empty());
    }
}
