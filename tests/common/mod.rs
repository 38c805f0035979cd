// Shared helpers for the integration tests
//
// A scriptable translation provider and temp-dir backed greeters.

#![allow(dead_code)]

#[cfg(feature = "web")]
pub mod translate_stub;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use greeter::translation::{ProviderError, TranslateRequest, TranslationProvider};
use greeter::Greeter;
use tempfile::TempDir;

/// Fake provider with canned translations for es, fr, ja and de
#[derive(Default)]
pub struct MockProvider {
    calls: AtomicUsize,
    should_error: AtomicBool,
}

impl MockProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let provider = Self::default();
        provider.should_error.store(true, Ordering::SeqCst);
        Arc::new(provider)
    }

    pub fn set_failing(&self, failing: bool) {
        self.should_error.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TranslationProvider for MockProvider {
    fn translate(&self, request: &TranslateRequest<'_>) -> Result<Vec<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.should_error.load(Ordering::SeqCst) {
            return Err(ProviderError::Network("mock translation error".to_string()));
        }

        let text = request.text;
        let translation = match request.target_language {
            "es" => format!("¡{}!", text),
            "fr" => format!("{} !", text),
            "ja" => format!("{}！", text),
            "de" => format!("{}!", text),
            _ => return Err(ProviderError::Rejected("unsupported language code".to_string())),
        };

        Ok(vec![translation])
    }
}

/// A greeter whose snapshot lives in its own temp dir
pub struct TestGreeter {
    pub greeter: Greeter,
    pub provider: Arc<MockProvider>,
    pub dir: TempDir,
}

impl TestGreeter {
    pub fn new() -> Self {
        Self::with_provider(MockProvider::new())
    }

    pub fn with_provider(provider: Arc<MockProvider>) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let greeter = Greeter::with_provider(Arc::clone(&provider), cache_path(&dir));
        Self {
            greeter,
            provider,
            dir,
        }
    }

    /// A second greeter reading the same snapshot file
    pub fn reopen(&self, provider: Arc<MockProvider>) -> Greeter {
        Greeter::with_provider(provider, cache_path(&self.dir))
    }

    pub fn cache_path(&self) -> PathBuf {
        cache_path(&self.dir)
    }
}

pub fn cache_path(dir: &TempDir) -> PathBuf {
    dir.path().join("translation_cache.json")
}
