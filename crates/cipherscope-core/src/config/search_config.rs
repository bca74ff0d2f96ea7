//! Key search configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration for the key search optimizer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Per-engine timeout in seconds. Default: 10.0.
    pub timeout_seconds: Option<f64>,
    /// Hill-climbing restarts. Default: 6.
    pub restarts: Option<u32>,
    /// Neighbor proposals per restart. Default: 2000.
    pub iterations_per_restart: Option<u32>,
    /// Non-improving proposals before a restart gives up. Default: 400.
    pub stall_limit: Option<u32>,
    /// RNG seed for reproducible searches.
    pub seed: Option<u64>,
    /// Widest columnar transposition tried. Default: 10.
    pub max_transposition_width: Option<usize>,
    /// Largest rail count enumerated. Default: 20.
    pub max_rails: Option<usize>,
}

impl SearchConfig {
    pub fn effective_timeout_seconds(&self) -> f64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn effective_restarts(&self) -> u32 {
        self.restarts.unwrap_or(DEFAULT_RESTARTS)
    }

    pub fn effective_iterations_per_restart(&self) -> u32 {
        self.iterations_per_restart
            .unwrap_or(DEFAULT_ITERATIONS_PER_RESTART)
    }

    pub fn effective_stall_limit(&self) -> u32 {
        self.stall_limit.unwrap_or(DEFAULT_STALL_LIMIT)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEARCH_SEED)
    }

    pub fn effective_max_transposition_width(&self) -> usize {
        self.max_transposition_width
            .unwrap_or(DEFAULT_MAX_TRANSPOSITION_WIDTH)
    }

    pub fn effective_max_rails(&self) -> usize {
        self.max_rails.unwrap_or(DEFAULT_MAX_RAILS)
    }
}
