//! Shared constants for the cipherscope engine.

/// cipherscope version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum accepted ciphertext length in characters.
pub const DEFAULT_MAX_CIPHERTEXT_LENGTH: usize = 100_000;

/// Hypotheses below this confidence are not handed to key search.
pub const DEFAULT_MIN_HYPOTHESIS_CONFIDENCE: f64 = 0.3;

/// Number of plaintext candidates kept in an analysis result.
pub const DEFAULT_MAX_CANDIDATES: usize = 10;

/// Shortest substring reported as a repeated sequence.
pub const DEFAULT_MIN_REPEAT_LENGTH: usize = 3;

/// Longest substring reported as a repeated sequence.
pub const DEFAULT_MAX_REPEAT_LENGTH: usize = 10;

/// Number of repeated sequences kept in a profile.
pub const DEFAULT_MAX_REPEATS: usize = 20;

/// Largest key length proposed by Kasiski examination.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Text length above which repeated sequences are found through a hash index.
pub const DEFAULT_REPEAT_INDEX_THRESHOLD: usize = 2_000;

/// Worker pool size for the recovery fan-out.
pub const DEFAULT_MAX_PARALLEL_ENGINES: usize = 4;

/// A candidate at or above this confidence ends tiered recovery early.
pub const DEFAULT_EARLY_EXIT_CONFIDENCE: f64 = 0.95;

/// Per-engine key search timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 10.0;

/// Independent hill-climbing restarts per heuristic search.
pub const DEFAULT_RESTARTS: u32 = 6;

/// Neighbor proposals per restart.
pub const DEFAULT_ITERATIONS_PER_RESTART: u32 = 2_000;

/// Non-improving proposals after which a restart gives up.
pub const DEFAULT_STALL_LIMIT: u32 = 400;

/// Seed for the search RNG. Fixed so identical input reproduces identical output.
pub const DEFAULT_SEARCH_SEED: u64 = 0x00C1_9E25_C09E;

/// Widest column count tried for columnar transposition.
pub const DEFAULT_MAX_TRANSPOSITION_WIDTH: usize = 10;

/// Largest rail count enumerated for the rail fence.
pub const DEFAULT_MAX_RAILS: usize = 20;

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "cipherscope.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CIPHERSCOPE_LOG";

/// Filter used when `CIPHERSCOPE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "cipherscope=info";
