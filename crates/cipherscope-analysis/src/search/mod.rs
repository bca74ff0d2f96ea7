//! Key recovery: exhaustive enumeration for small key spaces, seeded
//! hill climbing with restarts for the rest.

pub mod optimizer;
mod seeds;
pub mod types;

pub use optimizer::{KeySearchOptimizer, SearchSettings};
pub use types::{
    compare_candidates, sort_candidates, PlaintextCandidate, RecoveryOutcome, RecoveryStatus,
    SearchMethod,
};
