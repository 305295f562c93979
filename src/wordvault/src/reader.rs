//! Remote fetch layer.
//!
//! Wraps an [`ObjectStoreClient`] with the two fetch shapes the dictionary
//! needs: whole JSON documents (manifest and index, at startup) and ranged
//! text reads (one definition per lookup). Transient failures are retried
//! here with bounded exponential backoff; no other layer retries.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::warn;

use super::client::ObjectStoreClient;
use super::config::RetryPolicy;
use super::error::{DictionaryError, DictionaryResult};

/// Fetches documents and byte ranges from the object store.
///
/// Holds no cache and no mutable state beyond its client configuration.
pub struct RemoteReader {
    client: Arc<dyn ObjectStoreClient>,
    retry: RetryPolicy,
}

impl RemoteReader {
    /// Create a reader over the given client.
    pub fn new(client: Arc<dyn ObjectStoreClient>, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Fetch a complete object and parse it as a JSON document.
    ///
    /// # Errors
    ///
    /// Everything the client can return, plus `Decode` when the payload is
    /// not the expected JSON shape.
    pub async fn fetch_document<T: DeserializeOwned>(&self, key: &str) -> DictionaryResult<T> {
        let bytes = self.with_retry(|| self.client.get_object(key)).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| DictionaryError::decode(key, format!("invalid JSON document: {}", e)))
    }

    /// Fetch `length` bytes at `offset` and decode them as trimmed UTF-8 text.
    ///
    /// The request addresses exactly the inclusive byte range
    /// `[offset, offset + length - 1]`.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `length` is zero or the range overflows or is
    /// rejected by the store; `Misconfigured` when `key` is empty; `Decode`
    /// when the returned bytes are not valid UTF-8; plus everything the
    /// client can return.
    pub async fn fetch_text(&self, key: &str, offset: u64, length: u64) -> DictionaryResult<String> {
        if key.trim().is_empty() {
            return Err(DictionaryError::misconfigured(
                "definition file key is empty",
            ));
        }
        if length == 0 {
            return Err(DictionaryError::invalid_range(
                key,
                format!("zero-length range at offset {}", offset),
            ));
        }
        let end = offset.checked_add(length).ok_or_else(|| {
            DictionaryError::invalid_range(
                key,
                format!("range offset={} length={} overflows", offset, length),
            )
        })?;

        let range = offset..end;
        let bytes = self
            .with_retry(|| self.client.get_range(key, range.clone()))
            .await?;

        let text = std::str::from_utf8(&bytes).map_err(|e| {
            DictionaryError::decode(key, format!("payload at offset {} is not UTF-8: {}", offset, e))
        })?;
        Ok(text.trim().to_string())
    }

    /// Run `op`, retrying transient failures with exponential backoff.
    ///
    /// Non-transient failures surface on first occurrence.
    async fn with_retry<T, F, Fut>(&self, mut op: F) -> DictionaryResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = DictionaryResult<T>>,
    {
        let max_delay = Duration::from_millis(self.retry.max_delay_ms);
        let mut delay = Duration::from_millis(self.retry.base_delay_ms).min(max_delay);
        let mut attempt = 0u32;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    warn!(attempt, error = %err, "transient store failure, backing off");
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(max_delay);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl std::fmt::Debug for RemoteReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteReader")
            .field("retry", &self.retry)
            .finish()
    }
}
