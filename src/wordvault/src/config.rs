//! Configuration for the dictionary service.
//!
//! Plain serde structures with defaults; how they are populated (environment,
//! file, flags) is the embedding process's concern.

use serde::{Deserialize, Serialize};

/// Default manifest object key.
pub const DEFAULT_MANIFEST_KEY: &str = "manifest.json";

/// Default meaning-cache capacity (entry count).
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Default cap on autosuggest results per query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Object store connection settings.
///
/// # Example
///
/// ```rust,ignore
/// let store = StoreConfig::new("dictionary-data")
///     .with_endpoint("http://localhost:4566"); // LocalStack
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Bucket name.
    pub bucket: String,

    /// Optional endpoint override (e.g. LocalStack/MinIO).
    pub endpoint: Option<String>,

    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,

    /// Read (operation) timeout in milliseconds. Includes the time to stream
    /// the response body.
    pub read_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl StoreConfig {
    /// Create a configuration for the given bucket with default timeouts.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            endpoint: None,
            connect_timeout_ms: 5_000,
            read_timeout_ms: 30_000,
        }
    }

    /// Set an endpoint override.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout_ms(mut self, ms: u64) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout.
    pub fn with_read_timeout_ms(mut self, ms: u64) -> Self {
        self.read_timeout_ms = ms;
        self
    }
}

/// Retry policy for transient store failures.
///
/// Applies only to transient conditions (throttling, timeout, connectivity);
/// not-found, invalid-range, and credential failures are never retried.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries *after* the initial attempt.
    pub max_retries: u32,

    /// Initial backoff delay in milliseconds. Doubles per attempt.
    pub base_delay_ms: u64,

    /// Upper bound on the backoff delay in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 100,
            max_delay_ms: 2_000,
        }
    }
}

/// Meaning-cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// When false, every fetch goes to the store with no memoization.
    pub enabled: bool,

    /// Maximum number of cached definitions (entry count, not bytes).
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

/// Autosuggest configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// When false, suggest queries return no results.
    pub enabled: bool,

    /// Hard cap on results per query; callers may ask for fewer.
    pub max_suggestions: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Top-level dictionary configuration.
///
/// # Example
///
/// ```rust,ignore
/// let config = DictionaryConfig::default()
///     .with_manifest_key("v2/manifest.json")
///     .with_cache(CacheConfig { enabled: true, max_entries: 50_000 });
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Object key of the startup manifest.
    pub manifest_key: String,

    /// Retry policy for remote fetches.
    pub retry: RetryPolicy,

    /// Meaning-cache settings.
    pub cache: CacheConfig,

    /// Autosuggest settings.
    pub suggest: SuggestConfig,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            manifest_key: DEFAULT_MANIFEST_KEY.to_string(),
            retry: RetryPolicy::default(),
            cache: CacheConfig::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

impl DictionaryConfig {
    /// Set the manifest object key.
    pub fn with_manifest_key(mut self, key: impl Into<String>) -> Self {
        self.manifest_key = key.into();
        self
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the cache configuration.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Set the autosuggest configuration.
    pub fn with_suggest(mut self, suggest: SuggestConfig) -> Self {
        self.suggest = suggest;
        self
    }
}
