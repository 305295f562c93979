//! Mock object store for testing.
//!
//! In-memory [`ObjectStoreClient`] that records every range request, counts
//! calls, and can be scripted to fail, so tests can assert on fetch counts,
//! wire ranges and retry behavior.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use super::client::ObjectStoreClient;
use super::error::{DictionaryError, DictionaryResult};

/// In-memory mock object store.
///
/// Scripted failures are consumed in FIFO order: each queued error is
/// returned by the next call (of either kind) in place of a real read.
pub(crate) struct MockObjectStore {
    objects: RwLock<HashMap<String, Bytes>>,
    recorded_ranges: Mutex<Vec<(String, Range<u64>)>>,
    failures: Mutex<VecDeque<DictionaryError>>,
    object_calls: AtomicUsize,
    range_calls: AtomicUsize,
}

impl MockObjectStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            recorded_ranges: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
            object_calls: AtomicUsize::new(0),
            range_calls: AtomicUsize::new(0),
        }
    }

    /// Insert or replace an object.
    pub fn insert_object(&self, key: impl Into<String>, data: impl Into<Bytes>) {
        self.objects.write().unwrap().insert(key.into(), data.into());
    }

    /// Queue an error to be returned by the next call.
    pub fn push_failure(&self, err: DictionaryError) {
        self.failures.lock().unwrap().push_back(err);
    }

    /// Number of whole-object reads issued, including failed ones.
    pub fn object_calls(&self) -> usize {
        self.object_calls.load(Ordering::SeqCst)
    }

    /// Number of range reads issued, including failed ones.
    pub fn range_calls(&self) -> usize {
        self.range_calls.load(Ordering::SeqCst)
    }

    /// Every range request seen, in order.
    pub fn recorded_ranges(&self) -> Vec<(String, Range<u64>)> {
        self.recorded_ranges.lock().unwrap().clone()
    }

    /// The most recent range request.
    pub fn last_range(&self) -> Option<(String, Range<u64>)> {
        self.recorded_ranges.lock().unwrap().last().cloned()
    }

    fn take_failure(&self) -> Option<DictionaryError> {
        self.failures.lock().unwrap().pop_front()
    }
}

impl Default for MockObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStoreClient for MockObjectStore {
    async fn get_object(&self, key: &str) -> DictionaryResult<Bytes> {
        self.object_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        self.objects
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| DictionaryError::not_found(key))
    }

    async fn get_range(&self, key: &str, range: Range<u64>) -> DictionaryResult<Bytes> {
        self.range_calls.fetch_add(1, Ordering::SeqCst);
        self.recorded_ranges
            .lock()
            .unwrap()
            .push((key.to_string(), range.clone()));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let objects = self.objects.read().unwrap();
        let data = objects
            .get(key)
            .ok_or_else(|| DictionaryError::not_found(key))?;

        let start = range.start as usize;
        let end = range.end as usize;
        if start >= end || end > data.len() {
            return Err(DictionaryError::invalid_range(
                key,
                format!(
                    "range {}..{} rejected for object of {} bytes",
                    range.start,
                    range.end,
                    data.len()
                ),
            ));
        }

        Ok(data.slice(start..end))
    }
}

/// Builder for mock stores with pre-populated objects.
pub(crate) struct MockObjectStoreBuilder {
    objects: HashMap<String, Bytes>,
}

impl MockObjectStoreBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Add an object.
    pub fn with_object(mut self, key: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.objects.insert(key.into(), data.into());
        self
    }

    /// Build the mock store.
    pub fn build(self) -> MockObjectStore {
        let store = MockObjectStore::new();
        *store.objects.write().unwrap() = self.objects;
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_object_returns_content() {
        let store = MockObjectStore::new();
        store.insert_object("file.txt", "hello world");

        let data = store.get_object("file.txt").await.unwrap();
        assert_eq!(&data[..], b"hello world");
        assert_eq!(store.object_calls(), 1);
    }

    #[tokio::test]
    async fn get_object_missing_key_is_not_found() {
        let store = MockObjectStore::new();
        let err = store.get_object("nope").await.unwrap_err();
        assert!(matches!(err, DictionaryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn get_range_slices_and_records() {
        let store = MockObjectStore::new();
        store.insert_object("file.txt", "hello world");

        let data = store.get_range("file.txt", 6..11).await.unwrap();
        assert_eq!(&data[..], b"world");
        assert_eq!(store.last_range().unwrap(), ("file.txt".to_string(), 6..11));
        assert_eq!(store.recorded_ranges().len(), 1);
    }

    #[tokio::test]
    async fn get_range_out_of_bounds_is_invalid() {
        let store = MockObjectStore::new();
        store.insert_object("file.txt", "hello");

        let err = store.get_range("file.txt", 0..100).await.unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidRange { .. }));
    }

    #[tokio::test]
    async fn scripted_failures_are_consumed_in_order() {
        let store = MockObjectStore::new();
        store.insert_object("file.txt", "hello");
        store.push_failure(DictionaryError::unavailable("busy"));

        let err = store.get_range("file.txt", 0..5).await.unwrap_err();
        assert!(matches!(err, DictionaryError::Unavailable { .. }));

        let data = store.get_range("file.txt", 0..5).await.unwrap();
        assert_eq!(&data[..], b"hello");
        assert_eq!(store.range_calls(), 2);
    }

    #[tokio::test]
    async fn builder_pre_populates_objects() {
        let store = MockObjectStoreBuilder::new()
            .with_object("a.txt", "aaa")
            .with_object("b.txt", "bbb")
            .build();

        assert_eq!(&store.get_object("a.txt").await.unwrap()[..], b"aaa");
        assert_eq!(&store.get_object("b.txt").await.unwrap()[..], b"bbb");
    }
}
