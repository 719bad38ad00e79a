use crate::error::Result;
use crate::types::{ChartInterval, ChartRange};
use dashmap::DashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Cache key: one analysis per ticker, range and interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalysisKey {
    pub ticker: String,
    pub range: ChartRange,
    pub interval: ChartInterval,
}

impl AnalysisKey {
    pub fn new(ticker: &str, range: ChartRange, interval: ChartInterval) -> Self {
        Self {
            ticker: ticker.trim().to_uppercase(),
            range,
            interval,
        }
    }

    /// Key for `range` with its default interval.
    pub fn for_range(ticker: &str, range: ChartRange) -> Self {
        Self::new(ticker, range, range.default_interval())
    }
}

impl fmt::Display for AnalysisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.ticker,
            self.range.as_str(),
            self.interval.as_str()
        )
    }
}

/// A thread-safe cache with TTL support.
pub struct Cache<V> {
    data: DashMap<AnalysisKey, CacheEntry<V>>,
    default_ttl: Duration,
}

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V: Clone> Cache<V> {
    /// Create a new cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            data: DashMap::new(),
            default_ttl,
        }
    }

    /// Get a value from the cache.
    pub fn get(&self, key: &AnalysisKey) -> Option<V> {
        let entry = self.data.get(key)?;
        if entry.expires_at > Instant::now() {
            Some(entry.value.clone())
        } else {
            drop(entry);
            self.data.remove(key);
            None
        }
    }

    /// Set a value in the cache with the default TTL.
    pub fn set(&self, key: AnalysisKey, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Set a value in the cache with a custom TTL.
    pub fn set_with_ttl(&self, key: AnalysisKey, value: V, ttl: Duration) {
        self.data.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Return the cached value, or compute, store and return it.
    ///
    /// Errors from `compute` are returned and nothing is stored.
    pub fn get_or_try_insert_with<F>(&self, key: &AnalysisKey, compute: F) -> Result<V>
    where
        F: FnOnce() -> Result<V>,
    {
        if let Some(value) = self.get(key) {
            debug!("Cache hit for {}", key);
            return Ok(value);
        }
        debug!("Cache miss for {}", key);
        let value = compute()?;
        self.set(key.clone(), value.clone());
        Ok(value)
    }

    /// Remove a value from the cache.
    pub fn remove(&self, key: &AnalysisKey) -> Option<V> {
        self.data.remove(key).map(|(_, entry)| entry.value)
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        self.data.clear();
    }

    /// Remove all expired entries from the cache.
    pub fn cleanup(&self) {
        let now = Instant::now();
        self.data.retain(|_, entry| entry.expires_at > now);
    }

    /// Get the number of entries in the cache (including expired).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
