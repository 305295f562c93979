//! Object store client trait.
//!
//! This module defines the [`ObjectStoreClient`] trait which abstracts the
//! read-only object store operations the dictionary needs, for testability
//! and flexibility in choosing client implementations.

use async_trait::async_trait;
use bytes::Bytes;
use std::ops::Range;

use super::error::DictionaryResult;

/// Abstraction over read-only object store access.
///
/// The dictionary never writes: it fetches two small documents at startup and
/// byte ranges of the definition blob per lookup. A client is bound to a
/// single bucket at construction; trait methods take object keys only.
///
/// Implementations:
/// - Production: [`AwsObjectStore`](super::aws::AwsObjectStore)
/// - Testing: in-memory mock
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Read a complete object.
    ///
    /// # Errors
    ///
    /// `NotFound` when the key does not exist; `Unauthorized`/`Misconfigured`
    /// for credential or bucket problems; `Unavailable` for transient store
    /// conditions.
    async fn get_object(&self, key: &str) -> DictionaryResult<Bytes>;

    /// Read a byte range from an object.
    ///
    /// The range is half-open (start inclusive, end exclusive); requesting
    /// `offset..offset + length` addresses exactly the inclusive wire range
    /// `[offset, offset + length - 1]`, i.e. `length` bytes.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when the range is empty or exceeds the object's bounds,
    /// plus everything `get_object` can return.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Read bytes 10-14 (5 bytes total)
    /// let data = client.get_range("definitions.txt", 10..15).await?;
    /// assert_eq!(data.len(), 5);
    /// ```
    async fn get_range(&self, key: &str, range: Range<u64>) -> DictionaryResult<Bytes>;
}
