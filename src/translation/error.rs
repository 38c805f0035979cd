//! Translation error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by the translation provider
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Credentials rejected
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Quota or rate limit exhausted
    #[error("quota exhausted: {0}")]
    QuotaExceeded(String),

    /// Request refused, e.g. an unsupported language code
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Transport failure
    #[error("network error: {0}")]
    Network(String),

    /// Any other non-success response
    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Failure to produce a translation. Surfaced to the caller of `greet`/`translate`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    #[error("translation failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("translation failed: no translation returned")]
    NoTranslations,
}

/// Broad classification of a translation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Authentication,
    Quota,
    Input,
    Network,
    Service,
}

impl TranslationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TranslationError::Provider(ProviderError::Authentication(_)) => {
                ErrorCategory::Authentication
            }
            TranslationError::Provider(ProviderError::QuotaExceeded(_)) => ErrorCategory::Quota,
            TranslationError::Provider(ProviderError::Rejected(_)) => ErrorCategory::Input,
            TranslationError::Provider(ProviderError::Network(_)) => ErrorCategory::Network,
            TranslationError::Provider(ProviderError::Service { .. })
            | TranslationError::Provider(ProviderError::MalformedResponse(_))
            | TranslationError::NoTranslations => ErrorCategory::Service,
        }
    }

    /// Whether repeating the same request later could succeed. The greeter itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Quota | ErrorCategory::Service
        )
    }
}

/// Cache snapshot failures. Always absorbed by the greeter with a warning.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("malformed snapshot: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("failed to encode snapshot: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to save cache to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type TranslationResult<T> = Result<T, TranslationError>;
pub type CacheResult<T> = Result<T, CacheError>;
