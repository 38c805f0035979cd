//! Translation usage accounting

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

/// Estimated cost of one character sent to the translation API
pub const UNIT_COST: f64 = 0.00002;

/// Usage counters for one greeting request, or an aggregate of many
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of API calls made
    pub api_calls: u64,
    /// Size of the text sent to the API, in UTF-8 bytes
    pub chars_sent: u64,
    /// Estimated cost in USD
    pub cost_estimate: f64,
    /// Number of translations served without calling the API
    pub cache_hits: u64,
}

impl Stats {
    pub fn record_cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    /// Accounts for an attempted API call on `len` bytes of text, whatever its outcome.
    pub fn record_api_call(&mut self, len: usize) {
        self.api_calls += 1;
        self.chars_sent += len as u64;
        self.cost_estimate += len as f64 * UNIT_COST;
    }

    pub fn merge(&mut self, other: &Stats) {
        self.api_calls += other.api_calls;
        self.chars_sent += other.chars_sent;
        self.cost_estimate += other.cost_estimate;
        self.cache_hits += other.cache_hits;
    }

    /// True when the request made an API call or hit the cache
    pub fn has_activity(&self) -> bool {
        self.api_calls > 0 || self.cache_hits > 0
    }

    /// True when no API call was needed
    pub fn from_cache(&self) -> bool {
        self.api_calls == 0
    }
}

/// Process-wide aggregate of completed requests, shared by handle.
#[derive(Debug, Clone, Default)]
pub struct SharedStats {
    inner: Arc<RwLock<Stats>>,
}

impl SharedStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a completed request's counters
    pub fn merge(&self, stats: &Stats) {
        let mut total = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        total.merge(stats);
    }

    pub fn snapshot(&self) -> Stats {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}
