#![forbid(unsafe_code)]

//! Memoization of flattened `format` results.
//!
//! # Key schema
//!
//! Entries are keyed by an `FxHasher` fingerprint of the message text and
//! the full value mapping. Each entry also stores the message and values it
//! was computed from, and a hit requires deep equality with both. Two
//! distinct but equal `Values` therefore share an entry, while a mapping
//! that changed since the last call misses. A fingerprint collision is
//! counted and the entry is replaced.
//!
//! # Eviction
//!
//! Plain LRU with a fixed capacity. A capacity of zero disables caching.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::value::Values;

/// Default number of cached `format` results per formatter.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Cache statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatCacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Fingerprint matched but message or values differed.
    pub collisions: u64,
    pub size: usize,
    pub capacity: usize,
}

impl FormatCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
struct CachedEntry {
    message: String,
    values: Values,
    text: String,
}

/// LRU of flattened results.
#[derive(Debug)]
pub struct FormatCache {
    entries: Option<LruCache<u64, CachedEntry>>,
    stats: FormatCacheStats,
}

impl FormatCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
            stats: FormatCacheStats {
                capacity,
                ..Default::default()
            },
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    /// Cached text for `(message, values)`, if present.
    pub fn get(&mut self, message: &str, values: &Values) -> Option<String> {
        let entries = self.entries.as_mut()?;
        let key = fingerprint(message, values);
        match entries.get(&key) {
            Some(entry) if entry.message == message && entry.values == *values => {
                self.stats.hits += 1;
                tracing::trace!(fingerprint = key, "format cache hit");
                Some(entry.text.clone())
            }
            Some(_) => {
                self.stats.collisions += 1;
                self.stats.misses += 1;
                tracing::debug!(fingerprint = key, "format cache fingerprint collision");
                None
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Store the flattened text for `(message, values)`.
    pub fn put(&mut self, message: &str, values: &Values, text: &str) {
        let Some(entries) = self.entries.as_mut() else {
            return;
        };
        let key = fingerprint(message, values);
        entries.put(
            key,
            CachedEntry {
                message: message.to_owned(),
                values: values.clone(),
                text: text.to_owned(),
            },
        );
        self.stats.size = entries.len();
    }

    /// Drop every entry and reset statistics.
    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
        self.stats = FormatCacheStats {
            capacity: self.stats.capacity,
            ..Default::default()
        };
    }

    #[must_use]
    pub fn stats(&self) -> FormatCacheStats {
        FormatCacheStats {
            size: self.entries.as_ref().map_or(0, LruCache::len),
            ..self.stats
        }
    }
}

fn fingerprint(message: &str, values: &Values) -> u64 {
    let mut hasher = FxHasher::default();
    message.hash(&mut hasher);
    values.hash(&mut hasher);
    hasher.finish()
}
