//! Persistent translation cache
//!
//! Maps source text to a map of target language code to translated text, and mirrors the
//! whole structure to a JSON snapshot on disk. Entries are never evicted or expired.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Mutex, PoisonError, RwLock};

use super::error::{CacheError, CacheResult};

type Entries = BTreeMap<String, BTreeMap<String, String>>;

/// Translation cache guarded by a reader/writer lock
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<Entries>,
    // Serializes snapshot writes so two persists never interleave in the file.
    persist_lock: Mutex<()>,
}

impl TranslationCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache from the snapshot at `path`.
    ///
    /// A missing snapshot yields an empty cache. An unreadable or malformed one is logged
    /// and also yields an empty cache.
    pub fn open(path: &Path) -> Self {
        let cache = Self::new();

        match fs::read(path) {
            Ok(data) => {
                if let Err(e) = cache.load_from(&data) {
                    tracing::warn!("Could not load cache from {}: {}", path.display(), e);
                } else {
                    tracing::debug!(
                        "Loaded {} cached translations from {}",
                        cache.len(),
                        path.display()
                    );
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No cache snapshot at {}, starting empty", path.display());
            }
            Err(e) => {
                tracing::warn!("Could not read cache {}: {}", path.display(), e);
            }
        }

        cache
    }

    /// Returns the cached translation of `text` into `language`
    pub fn lookup(&self, text: &str, language: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(text)
            .and_then(|languages| languages.get(language))
            .cloned()
    }

    /// Stores a translation. A second insert for the same pair replaces the first.
    pub fn insert(&self, text: &str, language: &str, translated: String) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(text.to_string())
            .or_default()
            .insert(language.to_string(), translated);
    }

    /// Replaces the in-memory state with a parsed snapshot.
    ///
    /// On error the current state is left untouched.
    pub fn load_from(&self, snapshot: &[u8]) -> CacheResult<()> {
        let parsed: Entries = serde_json::from_slice(snapshot).map_err(CacheError::Deserialization)?;
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        *entries = parsed;
        Ok(())
    }

    /// Encodes the whole mapping as indented JSON
    pub fn serialize(&self) -> CacheResult<Vec<u8>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        encode(&entries)
    }

    /// Writes the snapshot to `path`, overwriting any previous content.
    ///
    /// Inserts are blocked until the file is written; lookups are not.
    pub fn persist_to(&self, path: &Path) -> CacheResult<()> {
        let _file_guard = self.persist_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        let data = encode(&entries)?;
        fs::write(path, data).map_err(|source| CacheError::Persistence {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of cached (text, language) pairs
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn encode(entries: &Entries) -> CacheResult<Vec<u8>> {
    serde_json::to_vec_pretty(entries).map_err(CacheError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_insert() {
        let cache = TranslationCache::new();
        assert_eq!(cache.lookup("Good morning, Test!", "es"), None);

        cache.insert("Good morning, Test!", "es", "¡Buenos días, Test!".to_string());
        cache.insert("Good morning, Test!", "fr", "Bonjour, Test !".to_string());

        assert_eq!(
            cache.lookup("Good morning, Test!", "es").as_deref(),
            Some("¡Buenos días, Test!")
        );
        assert_eq!(
            cache.lookup("Good morning, Test!", "fr").as_deref(),
            Some("Bonjour, Test !")
        );
        assert_eq!(cache.lookup("Good morning, Test!", "de"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_last_write_wins() {
        let cache = TranslationCache::new();
        cache.insert("hello", "es", "hola".to_string());
        cache.insert("hello", "es", "buenas".to_string());

        assert_eq!(cache.lookup("hello", "es").as_deref(), Some("buenas"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_serialize_is_nested_json() {
        let cache = TranslationCache::new();
        cache.insert("hello", "es", "hola".to_string());

        let data = cache.serialize().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&data).unwrap();
        assert_eq!(value["hello"]["es"], "hola");
    }

    #[test]
    fn test_load_from_replaces_state() {
        let cache = TranslationCache::new();
        cache.insert("stale", "es", "viejo".to_string());

        cache
            .load_from(r#"{"hello": {"es": "hola", "ja": "こんにちは"}}"#.as_bytes())
            .unwrap();

        assert_eq!(cache.lookup("stale", "es"), None);
        assert_eq!(cache.lookup("hello", "ja").as_deref(), Some("こんにちは"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_load_from_rejects_malformed_snapshot() {
        let cache = TranslationCache::new();
        cache.insert("hello", "es", "hola".to_string());

        let result = cache.load_from(b"[1, 2, 3]");
        assert!(matches!(result, Err(CacheError::Deserialization(_))));
        // state survives a failed load
        assert_eq!(cache.lookup("hello", "es").as_deref(), Some("hola"));
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TranslationCache::open(&dir.path().join("missing.json"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_open_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translation_cache.json");
        fs::write(&path, "{ not json").unwrap();

        let cache = TranslationCache::open(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_persist_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translation_cache.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        let cache = TranslationCache::new();
        cache.insert("hello", "de", "hallo".to_string());
        cache.persist_to(&path).unwrap();

        let reopened = TranslationCache::open(&path);
        assert_eq!(reopened.lookup("hello", "de").as_deref(), Some("hallo"));
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn test_persist_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("cache.json");

        let cache = TranslationCache::new();
        cache.insert("hello", "de", "hallo".to_string());

        let result = cache.persist_to(&path);
        assert!(matches!(result, Err(CacheError::Persistence { .. })));
        assert_eq!(cache.lookup("hello", "de").as_deref(), Some("hallo"));
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(TranslationCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let text = format!("text-{}", i);
                    cache.insert(&text, "es", format!("texto-{}", i));
                    assert_eq!(cache.lookup(&text, "es"), Some(format!("texto-{}", i)));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 8);
    }
}
