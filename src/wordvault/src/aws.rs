//! AWS S3 client implementation.
//!
//! Implements [`ObjectStoreClient`] over `aws-sdk-s3`, bound to a single
//! bucket. Connect and operation timeouts come from [`StoreConfig`]; SDK
//! retries are disabled because the retry policy lives in the fetch layer,
//! where it is uniform across client implementations.

use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::Client;
use aws_smithy_types::retry::RetryConfig;
use aws_smithy_types::timeout::TimeoutConfig;
use bytes::Bytes;

use super::client::ObjectStoreClient;
use super::config::StoreConfig;
use super::error::{DictionaryError, DictionaryResult};

/// S3-backed object store client.
///
/// # Example
///
/// ```rust,ignore
/// let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
/// let store = AwsObjectStore::new(&sdk_config, &StoreConfig::new("dictionary-data"))?;
/// let bytes = store.get_range("definitions.txt", 10..15).await?;
/// ```
#[derive(Clone)]
pub struct AwsObjectStore {
    client: Client,
    bucket: String,
}

impl AwsObjectStore {
    /// Create a client bound to the configured bucket.
    ///
    /// # Errors
    ///
    /// `Misconfigured` when the bucket name is empty or the SDK configuration
    /// carries no region.
    pub fn new(sdk_config: &aws_config::SdkConfig, config: &StoreConfig) -> DictionaryResult<Self> {
        if config.bucket.trim().is_empty() {
            return Err(DictionaryError::misconfigured(
                "object store bucket is not configured",
            ));
        }
        if sdk_config.region().is_none() {
            return Err(DictionaryError::misconfigured(
                "missing AWS region configuration",
            ));
        }

        // Inherit credentials, endpoints and HTTP client from the SDK config,
        // then apply our own timeouts and disable SDK-level retry.
        let mut builder = aws_sdk_s3::config::Builder::from(sdk_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        let timeouts = TimeoutConfig::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .operation_timeout(Duration::from_millis(config.read_timeout_ms))
            .build();
        builder = builder
            .timeout_config(timeouts)
            .retry_config(RetryConfig::disabled());

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }

    /// Create from a pre-built client (for testing against LocalStack/MinIO).
    pub fn from_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// The bucket this client reads from.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl std::fmt::Debug for AwsObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsObjectStore")
            .field("bucket", &self.bucket)
            .finish()
    }
}

#[async_trait]
impl ObjectStoreClient for AwsObjectStore {
    async fn get_object(&self, key: &str) -> DictionaryResult<Bytes> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, key))?;

        collect_body(response.body, key).await
    }

    async fn get_range(&self, key: &str, range: Range<u64>) -> DictionaryResult<Bytes> {
        if range.start >= range.end {
            return Err(DictionaryError::invalid_range(
                key,
                format!("empty range {}..{}", range.start, range.end),
            ));
        }

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .range(range_header(&range))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, key))?;

        collect_body(response.body, key).await
    }
}

/// Render a half-open range as the inclusive wire form: `10..15` becomes
/// `bytes=10-14` (5 bytes).
fn range_header(range: &Range<u64>) -> String {
    format!("bytes={}-{}", range.start, range.end - 1)
}

async fn collect_body(
    body: aws_sdk_s3::primitives::ByteStream,
    key: &str,
) -> DictionaryResult<Bytes> {
    body.collect()
        .await
        .map(|data| data.into_bytes())
        .map_err(|e| {
            DictionaryError::unavailable(format!("failed to read body for '{}': {}", key, e))
        })
}

/// Map an SDK error onto the domain taxonomy, keyed on HTTP status.
fn map_sdk_error<E: std::fmt::Debug>(err: SdkError<E>, key: &str) -> DictionaryError {
    match &err {
        SdkError::ServiceError(service_err) => {
            let status = service_err.raw().status().as_u16();
            match status {
                404 => DictionaryError::not_found(key),
                401 | 403 => DictionaryError::unauthorized(format!(
                    "access denied for '{}' (HTTP {})",
                    key, status
                )),
                416 => DictionaryError::invalid_range(
                    key,
                    "requested range not satisfiable (HTTP 416)",
                ),
                429 | 500 | 502 | 503 | 504 => DictionaryError::unavailable(format!(
                    "store returned HTTP {} for '{}'",
                    status, key
                )),
                _ => DictionaryError::unavailable(format!(
                    "store error for '{}' (HTTP {}): {:?}",
                    key, status, err
                )),
            }
        }
        SdkError::TimeoutError(_) => {
            DictionaryError::unavailable(format!("request for '{}' timed out", key))
        }
        SdkError::DispatchFailure(_) => {
            DictionaryError::unavailable(format!("connection failure for '{}': {:?}", key, err))
        }
        _ => DictionaryError::unavailable(format!("store error for '{}': {:?}", key, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_header_is_inclusive() {
        assert_eq!(range_header(&(10..15)), "bytes=10-14");
        assert_eq!(range_header(&(0..5)), "bytes=0-4");
        assert_eq!(range_header(&(7..8)), "bytes=7-7");
    }
}
