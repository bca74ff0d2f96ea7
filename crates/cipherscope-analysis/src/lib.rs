//! # cipherscope-analysis
//!
//! Classical-cipher cryptanalysis: text normalization, statistical profiling,
//! cipher engines and their registry, cipher-family detection, key search
//! and scoring, explanation rendering, and the pipeline tying them together.

pub mod alphabet;
pub mod detection;
pub mod engines;
pub mod explain;
pub mod language;
pub mod pipeline;
pub mod scoring;
pub mod search;
pub mod service;
pub mod stats;
pub mod text;

pub use detection::{CipherHypothesis, DetectionEngine};
pub use engines::{CipherEngine, CipherRegistry, Key, KeySpace};
pub use explain::ExplanationGenerator;
pub use pipeline::{AnalysisPipeline, AnalysisResult};
pub use scoring::{LanguageFit, Scorer};
pub use search::{KeySearchOptimizer, PlaintextCandidate, RecoveryStatus};
pub use service::CryptanalysisService;
pub use stats::{StatisticalProfile, StatisticsEngine};
pub use text::NormalizedText;
