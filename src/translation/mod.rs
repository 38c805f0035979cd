//! Translation subsystem
//!
//! - `cache` - persistent (text, language) -> translation map
//! - `stats` - per-request and process-wide usage accounting
//! - `provider` - external translation service adapter
//! - `config` - settings needed to reach the provider
//! - `error` - error types

pub mod cache;
pub mod config;
pub mod error;
pub mod provider;
pub mod stats;

pub use cache::TranslationCache;
pub use config::GreeterConfig;
pub use error::{CacheError, ErrorCategory, ProviderError, TranslationError, TranslationResult};
pub use provider::{GoogleTranslateClient, TranslateRequest, TranslationProvider};
pub use stats::{SharedStats, Stats, UNIT_COST};
