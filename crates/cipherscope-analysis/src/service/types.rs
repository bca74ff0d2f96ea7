//! Request and response shapes at the service boundary.

use cipherscope_core::config::RequestOverrides;
use cipherscope_core::errors::{AnalysisError, CipherscopeErrorCode};
use cipherscope_core::{CipherFamily, CipherType, Language};
use serde::{Deserialize, Serialize};

use crate::detection::CipherHypothesis;
use crate::engines::KeySpace;
use crate::pipeline::AnalysisResult;
use crate::search::{PlaintextCandidate, RecoveryOutcome, RecoveryStatus};
use crate::stats::StatisticalProfile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub ciphertext: String,
    #[serde(default)]
    pub cipher_type: Option<String>,
    /// String, number, array of numbers, or a tagged key object.
    #[serde(default)]
    pub key: Option<serde_json::Value>,
    #[serde(default)]
    pub options: RequestOverrides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub statistics: StatisticalProfile,
    pub suspected_ciphers: Vec<CipherHypothesis>,
    pub plaintext_candidates: Vec<PlaintextCandidate>,
    /// Language of the best candidate; `None` without candidates.
    pub detected_language: Option<Language>,
    pub explanations: Vec<String>,
    pub recovery: Vec<RecoveryOutcome>,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            detected_language: result.detected_language(),
            statistics: result.statistics,
            suspected_ciphers: result.suspected_ciphers,
            plaintext_candidates: result.plaintext_candidates,
            explanations: result.explanations,
            recovery: result.recovery,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecryptRequest {
    pub ciphertext: String,
    pub cipher_type: String,
    #[serde(default)]
    pub key: Option<serde_json::Value>,
    #[serde(default)]
    pub options: RequestOverrides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecryptResponse {
    pub plaintext: String,
    pub confidence: f64,
    pub cipher_type: CipherType,
    /// Display form of the key; `None` when nothing could be decrypted.
    pub key_used: Option<String>,
    /// Language the plaintext fits best; `None` when nothing was decrypted.
    pub language: Option<Language>,
    pub explanation: String,
    pub recovery_status: RecoveryStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncryptRequest {
    pub plaintext: String,
    pub cipher_type: String,
    /// Omitted: a random key is generated.
    #[serde(default)]
    pub key: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncryptResponse {
    pub ciphertext: String,
    pub cipher_type: CipherType,
    pub key_used: String,
}

/// Stable error-kind tag plus message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&AnalysisError> for ErrorResponse {
    fn from(err: &AnalysisError) -> Self {
        Self {
            error: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}

/// One registered engine, as listed by the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CipherInfo {
    pub id: CipherType,
    pub name: String,
    pub family: CipherFamily,
    pub description: String,
    pub alphabet: String,
    pub key_space: KeySpace,
}
