//! The dictionary facade.
//!
//! `Dictionary` ties the pieces together: the immutable in-memory index, the
//! prefix search, the meaning cache and the remote fetch layer. It is the
//! interface collaborators (e.g. an HTTP layer) hold.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::cache::{CacheKey, CacheStats, MeaningCache};
use super::client::ObjectStoreClient;
use super::config::DictionaryConfig;
use super::error::{DictionaryError, DictionaryResult};
use super::format::{IndexEntry, ManifestDocument};
use super::index::DictionaryIndex;
use super::reader::RemoteReader;
use super::search;

/// Read-only dictionary over an externally-stored dataset.
///
/// Built once at process startup via [`Dictionary::load`]; cloning is cheap
/// and clones share the index and the cache.
///
/// # Thread Safety
///
/// The index is immutable after load and read lock-free. The cache is the
/// only mutable shared structure; it sits behind an async `RwLock` so
/// recency tracking, insertion and eviction stay atomic under concurrent
/// lookups. Suggest and exact lookups never touch the network, so a slow
/// store cannot stall them.
///
/// # Example
///
/// ```rust,ignore
/// let client = Arc::new(AwsObjectStore::new(&sdk_config, &store_config)?);
/// let dictionary = Dictionary::load(client, DictionaryConfig::default()).await?;
///
/// let meaning = dictionary.meaning("apple").await?;
/// let suggestions = dictionary.suggest("app", 10, false);
/// ```
#[derive(Clone)]
pub struct Dictionary {
    inner: Arc<Shared>,
}

struct Shared {
    index: DictionaryIndex,
    manifest: ManifestDocument,
    reader: RemoteReader,
    cache: Option<RwLock<MeaningCache>>,
    config: DictionaryConfig,
}

impl Dictionary {
    /// Fetch the manifest and index document, and build the dictionary.
    ///
    /// Runs once at startup, before any concurrent traffic. Any failure here
    /// is fatal for serving: the process must not accept lookups with no
    /// index.
    ///
    /// # Errors
    ///
    /// `IndexBuild` when the manifest or index document cannot be fetched or
    /// parsed, the manifest names no index document, or the index document is
    /// empty.
    pub async fn load(
        client: Arc<dyn ObjectStoreClient>,
        config: DictionaryConfig,
    ) -> DictionaryResult<Self> {
        let reader = RemoteReader::new(client, config.retry.clone());

        let manifest: ManifestDocument = reader
            .fetch_document(&config.manifest_key)
            .await
            .map_err(|e| {
                DictionaryError::index_build(format!(
                    "failed to load manifest '{}': {}",
                    config.manifest_key, e
                ))
            })?;

        if manifest.index_file_path.trim().is_empty() {
            return Err(DictionaryError::index_build(
                "manifest names no index document",
            ));
        }

        let entries: HashMap<String, IndexEntry> = reader
            .fetch_document(&manifest.index_file_path)
            .await
            .map_err(|e| {
                DictionaryError::index_build(format!(
                    "failed to load index document '{}': {}",
                    manifest.index_file_path, e
                ))
            })?;

        let index = DictionaryIndex::build(entries)?;
        info!(entries = index.len(), "dictionary index ready");

        let cache = config
            .cache
            .enabled
            .then(|| RwLock::new(MeaningCache::new(config.cache.max_entries)));
        if cache.is_none() {
            debug!("meaning cache disabled, fetches are pass-through");
        }

        Ok(Self {
            inner: Arc::new(Shared {
                index,
                manifest,
                reader,
                cache,
                config,
            }),
        })
    }

    /// Exact-match lookup of a word's byte range.
    ///
    /// Case-sensitive by design; `lookup("Go")` and `lookup("go")` are
    /// independent. Returns `None` for absent words (callers typically map
    /// this to a not-found error) without touching the cache or the store.
    pub fn lookup(&self, word: &str) -> Option<IndexEntry> {
        self.inner.index.lookup(word)
    }

    /// Resolve a word to its definition text.
    ///
    /// Consults the index for the word's byte range, then the cache-fronted
    /// fetch path for the text.
    ///
    /// # Errors
    ///
    /// `NotFound` when the word is absent (no cache or store access);
    /// `InvalidIndexEntry` when the word is present but its byte range is
    /// malformed; otherwise whatever the fetch produces.
    pub async fn meaning(&self, word: &str) -> DictionaryResult<String> {
        let entry = self
            .lookup(word)
            .ok_or_else(|| DictionaryError::not_found(word))?;
        let range = entry.byte_range(word)?;
        self.fetch_meaning(self.file_key(), range.offset, range.length)
            .await
    }

    /// Fetch definition text for an explicit byte range, through the cache.
    ///
    /// On a hit the cached text is returned and promoted, with no remote
    /// call. On a miss the text is fetched, inserted (evicting the
    /// least-recently-used entry when at capacity) and returned; fetch
    /// failures propagate and are never cached, so the next identical request
    /// retries. With the cache disabled this is a pass-through.
    ///
    /// Two concurrent misses on the same key may both fetch; fetches are
    /// idempotent and the second insert harmlessly replaces the first.
    pub async fn fetch_meaning(
        &self,
        file_key: &str,
        offset: u64,
        length: u64,
    ) -> DictionaryResult<String> {
        let Some(cache) = &self.inner.cache else {
            return self.inner.reader.fetch_text(file_key, offset, length).await;
        };

        let key = CacheKey::new(file_key, offset, length);
        {
            let mut guard = cache.write().await;
            if let Some(text) = guard.get(&key) {
                return Ok(text.clone());
            }
        }

        // Fetch without holding the lock so a slow store call cannot block
        // hits on other keys.
        let text = self.inner.reader.fetch_text(file_key, offset, length).await?;

        let mut guard = cache.write().await;
        guard.insert(key, text.clone());
        Ok(text)
    }

    /// Autocomplete: words starting with `query`, in the sort order of the
    /// selected key sequence.
    ///
    /// `max_results` is clamped to the configured cap. Returns an empty list
    /// when suggest is disabled or the query is empty; never fails and never
    /// touches the store.
    pub fn suggest(&self, query: &str, max_results: usize, case_sensitive: bool) -> Vec<String> {
        let cfg = &self.inner.config.suggest;
        if !cfg.enabled {
            return Vec::new();
        }
        search::suggest(
            &self.inner.index,
            query,
            max_results.min(cfg.max_suggestions),
            case_sensitive,
        )
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.inner.index.len()
    }

    /// Whether the index holds no words. Never true after a successful load.
    pub fn is_empty(&self) -> bool {
        self.inner.index.is_empty()
    }

    /// Object key of the definition blob, from the manifest.
    pub fn file_key(&self) -> &str {
        &self.inner.manifest.file_path
    }

    /// The startup manifest.
    pub fn manifest(&self) -> &ManifestDocument {
        &self.inner.manifest
    }

    /// Cache counters; `None` when the cache is disabled.
    pub async fn cache_stats(&self) -> Option<CacheStats> {
        match &self.inner.cache {
            Some(cache) => Some(cache.read().await.stats()),
            None => None,
        }
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("entries", &self.inner.index.len())
            .field("file_key", &self.inner.manifest.file_path)
            .field("cache_enabled", &self.inner.cache.is_some())
            .finish()
    }
}
