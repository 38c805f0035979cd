//! Greeting engine
//!
//! Composes the time-of-day greeting and, for languages other than English, translates it
//! through the cache-fronted provider. A `Greeter` is shared by every request that uses the
//! same snapshot file; per-request state is the [`Stats`] the caller passes in.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::GreeterResult;
use crate::greeting::{compose_greeting, Clock, DEFAULT_LANGUAGE};
use crate::translation::{
    GoogleTranslateClient, GreeterConfig, Stats, TranslateRequest, TranslationCache,
    TranslationError, TranslationProvider, TranslationResult,
};

pub struct Greeter {
    provider: Box<dyn TranslationProvider>,
    cache: TranslationCache,
    cache_file: PathBuf,
}

impl Greeter {
    /// Builds a greeter backed by the Cloud Translation API.
    pub fn from_config(config: &GreeterConfig) -> GreeterResult<Self> {
        let client =
            GoogleTranslateClient::new(&config.api_url, &config.project_id, &config.access_token)
                .map_err(TranslationError::from)?;

        info!(
            "Using project {} with cache {}",
            config.project_id,
            config.cache_file.display()
        );
        Ok(Self::with_provider(client, &config.cache_file))
    }

    /// Builds a greeter around any provider, loading the cache snapshot at `cache_file`.
    pub fn with_provider(
        provider: impl TranslationProvider + 'static,
        cache_file: impl AsRef<Path>,
    ) -> Self {
        let cache_file = cache_file.as_ref().to_path_buf();
        Self {
            provider: Box::new(provider),
            cache: TranslationCache::open(&cache_file),
            cache_file,
        }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn cache_file(&self) -> &Path {
        &self.cache_file
    }

    /// Greets `recipient` in `language` at the clock's current hour.
    ///
    /// The default language never reaches the provider and counts as one cache hit.
    pub fn greet(
        &self,
        recipient: &str,
        language: &str,
        clock: &dyn Clock,
        stats: &mut Stats,
    ) -> TranslationResult<String> {
        let greeting = compose_greeting(recipient, clock.hour());

        if language == DEFAULT_LANGUAGE {
            // the built-in English templates count as a cache hit
            stats.record_cache_hit();
            return Ok(greeting);
        }

        self.translate(&greeting, language, stats)
    }

    /// Translates `text` from English into `language`, consulting the cache first.
    ///
    /// A miss is billed in `stats` before the provider is called and stays billed if the
    /// call fails. Only successful translations are cached and persisted.
    pub fn translate(
        &self,
        text: &str,
        language: &str,
        stats: &mut Stats,
    ) -> TranslationResult<String> {
        if let Some(translation) = self.cache.lookup(text, language) {
            debug!("Cache hit for {}", language);
            stats.record_cache_hit();
            return Ok(translation);
        }

        stats.record_api_call(text.len());
        info!("Translating text to {}", language);

        let request = TranslateRequest {
            text,
            source_language: DEFAULT_LANGUAGE,
            target_language: language,
        };
        let translation = self
            .provider
            .translate(&request)?
            .into_iter()
            .next()
            .ok_or(TranslationError::NoTranslations)?;

        self.cache.insert(text, language, translation.clone());
        if let Err(e) = self.cache.persist_to(&self.cache_file) {
            warn!("{}", e);
        }

        Ok(translation)
    }
}
