//! # wordvault
//!
//! Resolves words to their stored definitions by consulting an in-memory
//! index built from a manifest describing a large externally-stored dataset,
//! and serves prefix-based autocomplete over the same index. Definition text
//! stays in the object store; lookups fetch exactly the byte range an index
//! entry names, through a bounded LRU cache.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Dictionary                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  In-Memory (built once at startup, immutable):                  │
//! │  ├─ Word → {offset, length} map                                 │
//! │  ├─ Sorted keys (case-sensitive basis)                          │
//! │  └─ Sorted (lowercase, position) pairs (insensitive basis)      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  In-Memory (LRU cache, configurable entry count):               │
//! │  └─ Meaning cache ((file_key, offset, length) → text)           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  In the object store:                                           │
//! │  ├─ manifest.json   (names the index and the definition blob)   │
//! │  ├─ index document  (word → byte range)                         │
//! │  └─ definition blob (fetched via range requests only)           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lookup Flow
//!
//! ```text
//! 1. Exact-match index lookup → byte range (absent → not found, no I/O)
//! 2. Check LRU cache for (file_key, offset, length)
//! 3. Cache miss? → range request for exactly those bytes, UTF-8, trimmed
//! 4. Insert into cache (evicting the least-recently-used entry when full)
//! ```
//!
//! Autocomplete never touches the store: a lower-bound binary search over the
//! selected sorted key sequence plus a bounded forward scan while the prefix
//! matches.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wordvault::{AwsObjectStore, Dictionary, DictionaryConfig, StoreConfig};
//!
//! let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
//! let client = Arc::new(AwsObjectStore::new(
//!     &sdk_config,
//!     &StoreConfig::new("dictionary-data"),
//! )?);
//!
//! // Startup: fatal if the manifest or index cannot be loaded.
//! let dictionary = Dictionary::load(client, DictionaryConfig::default()).await?;
//!
//! // Per request:
//! let meaning = dictionary.meaning("apple").await?;
//! let suggestions = dictionary.suggest("app", 10, false);
//! ```

pub mod aws;
pub mod cache;
pub mod client;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod index;
pub mod reader;
pub mod search;

pub use aws::AwsObjectStore;
pub use cache::{CacheKey, CacheStats, MeaningCache};
pub use client::ObjectStoreClient;
pub use config::{CacheConfig, DictionaryConfig, RetryPolicy, StoreConfig, SuggestConfig};
pub use dictionary::Dictionary;
pub use error::{DictionaryError, DictionaryResult};
pub use format::{ByteRange, IndexEntry, ManifestDocument};
pub use index::DictionaryIndex;
pub use reader::RemoteReader;

#[cfg(test)]
pub(crate) mod mock_client;
