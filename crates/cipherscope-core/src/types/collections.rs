//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec for occurrence positions of a repeated sequence (usually 2-3).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
