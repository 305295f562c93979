//! LRU cache for resolved definition text.
//!
//! Sits in front of remote range reads: repeated lookups of the same word
//! always produce the same fetch fingerprint, so a bounded cache keyed on it
//! removes most store round-trips.

use std::num::NonZeroUsize;

use lru::LruCache;

/// Fetch fingerprint: uniquely identifies a byte range of one object.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct CacheKey {
    /// Object key of the definition blob.
    pub file_key: String,
    /// Byte offset of the definition.
    pub offset: u64,
    /// Definition length in bytes.
    pub length: u64,
}

impl CacheKey {
    /// Create a new cache key.
    pub fn new(file_key: impl Into<String>, offset: u64, length: u64) -> Self {
        Self {
            file_key: file_key.into(),
            offset,
            length,
        }
    }
}

/// Bounded LRU cache mapping fetch fingerprints to definition text.
///
/// Capacity is an entry count, not a byte size. Eviction is strict LRU: when
/// the cache is full, the entry least recently read or inserted goes first.
/// Failed fetches are never inserted, so an error is retried on the next
/// identical request instead of being replayed from the cache.
///
/// The structure itself is single-threaded; concurrent callers guard it with
/// an async lock so recency tracking and eviction stay atomic.
pub struct MeaningCache {
    cache: LruCache<CacheKey, String>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl MeaningCache {
    /// Create a cache holding at most `max_entries` definitions.
    ///
    /// A zero capacity is clamped to one entry.
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(max_entries.max(1)).unwrap()),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Get a cached definition, promoting it to most-recently-used.
    pub fn get(&mut self, key: &CacheKey) -> Option<&String> {
        match self.cache.get(key) {
            Some(text) => {
                self.hits += 1;
                Some(text)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Check for a key without touching recency.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.cache.contains(key)
    }

    /// Insert a definition, evicting the least-recently-used entry when at
    /// capacity.
    pub fn insert(&mut self, key: CacheKey, text: String) {
        if let Some((dropped, _)) = self.cache.push(key.clone(), text) {
            // push returns the displaced pair: the old value under the same
            // key on replacement, or the LRU entry on eviction.
            if dropped != key {
                self.evictions += 1;
            }
        }
    }

    /// Number of cached definitions.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Configured capacity in entries.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Counters for monitoring.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            capacity: self.capacity(),
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}

/// Cache statistics for monitoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Definitions currently cached.
    pub entries: usize,
    /// Configured capacity in entries.
    pub capacity: usize,
    /// Reads answered from the cache.
    pub hits: u64,
    /// Reads that had to go to the store.
    pub misses: u64,
    /// Entries dropped to make room.
    pub evictions: u64,
}
