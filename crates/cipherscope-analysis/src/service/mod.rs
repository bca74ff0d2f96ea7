//! CryptanalysisService: the analyze / decrypt / encrypt boundary.
//!
//! Owns the resolved configuration, the engine registry and the pipeline.
//! Requests carry identifiers and keys in their loose wire form; everything
//! is parsed and validated here before any work starts.

pub mod types;

use std::sync::Arc;

use cipherscope_core::errors::{AnalysisError, CipherscopeErrorCode, EngineError, InputError};
use cipherscope_core::{CipherType, CipherscopeConfig};

pub use types::{
    AnalyzeRequest, AnalyzeResponse, CipherInfo, DecryptRequest, DecryptResponse, EncryptRequest,
    EncryptResponse, ErrorResponse,
};

use crate::engines::{CipherEngine, CipherRegistry, Key};
use crate::pipeline::{AnalysisPipeline, AnalysisResult, AnalyzeOptions};

pub struct CryptanalysisService {
    pipeline: AnalysisPipeline,
}

impl CryptanalysisService {
    /// Build the registry and worker pool. Registry problems surface here,
    /// never during a request.
    pub fn new(config: CipherscopeConfig) -> Result<Self, AnalysisError> {
        let registry = Arc::new(CipherRegistry::from_config(&config.search)?);
        registry.require(CipherType::all())?;
        tracing::info!(engines = registry.len(), "cryptanalysis service ready");
        Ok(Self {
            pipeline: AnalysisPipeline::new(config, registry)?,
        })
    }

    pub fn pipeline(&self) -> &AnalysisPipeline {
        &self.pipeline
    }

    fn registry(&self) -> &CipherRegistry {
        self.pipeline.registry()
    }

    fn check_length(&self, text: &str) -> Result<(), InputError> {
        let max_length = self.pipeline.config().analysis.effective_max_ciphertext_length();
        let length = text.chars().count();
        if length > max_length {
            return Err(InputError::TooLarge { length, max_length });
        }
        Ok(())
    }

    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, AnalysisError> {
        self.check_length(&request.ciphertext)?;
        let cipher_type = request
            .cipher_type
            .as_deref()
            .map(str::parse::<CipherType>)
            .transpose()?;
        let key = match (&request.key, cipher_type) {
            (Some(value), Some(ct)) => Some(key_from_value(self.registry().get(ct)?, value)?),
            (Some(_), None) => {
                return Err(InputError::InvalidOption {
                    option: "key".to_string(),
                    message: "a key requires a cipher type".to_string(),
                }
                .into())
            }
            (None, _) => None,
        };
        let options = AnalyzeOptions {
            cipher_type,
            key,
            overrides: request.options.clone(),
        };
        Ok(self.pipeline.analyze(&request.ciphertext, &options)?.into())
    }

    /// Decrypt with the given key, or recover the best key when none is given.
    pub fn decrypt(&self, request: &DecryptRequest) -> Result<DecryptResponse, AnalysisError> {
        self.check_length(&request.ciphertext)?;
        let engine = self.registry().lookup(&request.cipher_type)?;
        let cipher_type = engine.cipher_type();
        let key = request
            .key
            .as_ref()
            .map(|value| key_from_value(engine, value))
            .transpose()?;
        let options = AnalyzeOptions {
            cipher_type: Some(cipher_type),
            key: key.clone(),
            overrides: request.options.clone(),
        };

        self.pipeline.validate_request(&request.ciphertext, &options)?;
        let outcome = self
            .pipeline
            .recover_one(&request.ciphertext, cipher_type, key.as_ref(), &options)?;
        let explainer = self.pipeline.explainer();
        Ok(match outcome.best() {
            Some(best) => DecryptResponse {
                plaintext: best.plaintext.clone(),
                confidence: best.confidence,
                cipher_type,
                key_used: Some(best.key.to_string()),
                language: Some(best.language),
                explanation: explainer.explain_attack(cipher_type, best.method, &best.key),
                recovery_status: outcome.status,
            },
            None => DecryptResponse {
                plaintext: String::new(),
                confidence: 0.0,
                cipher_type,
                key_used: key.map(|k| k.to_string()),
                language: None,
                explanation: explainer.explain_recovery(&outcome),
                recovery_status: outcome.status,
            },
        })
    }

    /// Encrypt with the given key, or with a freshly generated random key.
    pub fn encrypt(&self, request: &EncryptRequest) -> Result<EncryptResponse, AnalysisError> {
        self.check_length(&request.plaintext)?;
        let engine = self.registry().lookup(&request.cipher_type)?;
        let key = match &request.key {
            Some(value) => key_from_value(engine, value)?,
            None => engine.random_key(&mut rand::thread_rng()),
        };
        let ciphertext = engine.encrypt(&request.plaintext, &key)?;
        tracing::debug!(cipher_type = %engine.cipher_type(), chars = ciphertext.chars().count(), "encrypted");
        Ok(EncryptResponse {
            ciphertext,
            cipher_type: engine.cipher_type(),
            key_used: key.to_string(),
        })
    }

    /// Explanations re-rendered from a stored result.
    pub fn reexplain(&self, result: &AnalysisResult) -> Vec<String> {
        self.pipeline.reexplain(result)
    }

    pub fn cipher_catalogue(&self) -> Vec<CipherInfo> {
        self.registry()
            .engines()
            .into_iter()
            .map(|engine| CipherInfo {
                id: engine.cipher_type(),
                name: engine.name().to_string(),
                family: engine.family(),
                description: engine.description().to_string(),
                alphabet: engine.alphabet().to_string(),
                key_space: engine.describe_key_space(),
            })
            .collect()
    }

    /// Run `f` and turn any error into the boundary's error shape.
    pub fn respond<T>(
        &self,
        f: impl FnOnce(&Self) -> Result<T, AnalysisError>,
    ) -> Result<T, ErrorResponse> {
        f(self).map_err(|e| {
            tracing::warn!(code = e.error_code(), error = %e, "request failed");
            ErrorResponse::from(&e)
        })
    }
}

/// Parse a wire key for `engine`.
pub fn key_from_value(engine: &dyn CipherEngine, value: &serde_json::Value) -> Result<Key, EngineError> {
    use serde_json::Value;

    let key = match value {
        Value::String(raw) => engine.parse_key(raw)?,
        Value::Number(n) => engine.parse_key(&n.to_string())?,
        Value::Array(items) => {
            let parts: Option<Vec<String>> = items
                .iter()
                .map(|item| match item {
                    Value::Number(n) => Some(n.to_string()),
                    Value::String(s) => Some(s.clone()),
                    _ => None,
                })
                .collect();
            let parts = parts.ok_or_else(|| {
                EngineError::invalid_key(engine.cipher_type(), "key arrays may hold numbers or strings only")
            })?;
            engine.parse_key(&parts.join(","))?
        }
        Value::Object(_) => serde_json::from_value::<Key>(value.clone())
            .map_err(|e| EngineError::invalid_key(engine.cipher_type(), e.to_string()))?,
        Value::Null | Value::Bool(_) => {
            return Err(EngineError::invalid_key(
                engine.cipher_type(),
                format!("unsupported key value {value}"),
            ))
        }
    };
    engine.validate_key(&key)?;
    Ok(key)
}
