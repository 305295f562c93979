//! Persisted document shapes.
//!
//! Two JSON documents live in the object store: the manifest, naming where
//! the index and the definition blob are, and the index document, mapping
//! each word to a byte range into the blob. Both shapes must round-trip
//! exactly.

use serde::{Deserialize, Serialize};

use super::error::{DictionaryError, DictionaryResult};

/// Startup manifest: `{"index_file_path": "...", "file_path": "..."}`.
///
/// Fetched once at startup; immutable afterward. Missing fields deserialize
/// as empty strings so the loader can report which one is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestDocument {
    /// Object key of the index document.
    pub index_file_path: String,

    /// Object key of the definition blob that index entries point into.
    pub file_path: String,
}

/// One index entry: a byte range into the definition blob.
///
/// Fields are optional at the parse layer so that a malformed entry for an
/// otherwise-present word is detectable per request instead of failing the
/// whole document. Use [`IndexEntry::byte_range`] to validate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Byte offset where the definition starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Number of bytes to read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
}

impl IndexEntry {
    /// Create a well-formed entry.
    pub fn new(offset: u64, length: u64) -> Self {
        Self {
            offset: Some(offset),
            length: Some(length),
        }
    }

    /// Validate this entry into a concrete byte range.
    ///
    /// # Errors
    ///
    /// `InvalidIndexEntry` when offset or length is missing, or length is
    /// zero.
    pub fn byte_range(&self, word: &str) -> DictionaryResult<ByteRange> {
        let (Some(offset), Some(length)) = (self.offset, self.length) else {
            return Err(DictionaryError::invalid_index_entry(
                word,
                "offset or length missing",
            ));
        };
        if length == 0 {
            return Err(DictionaryError::invalid_index_entry(
                word,
                "length must be positive",
            ));
        }
        Ok(ByteRange { offset, length })
    }
}

/// A validated byte range: `length` bytes starting at `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteRange {
    /// Byte offset where the range starts.
    pub offset: u64,

    /// Number of bytes; always positive.
    pub length: u64,
}

impl ByteRange {
    /// Last byte addressed by this range (the range is inclusive on the wire).
    pub fn end_inclusive(&self) -> u64 {
        self.offset + self.length - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_roundtrip() {
        let json = r#"{"index_file_path":"index.json","file_path":"definitions.txt"}"#;
        let manifest: ManifestDocument = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.index_file_path, "index.json");
        assert_eq!(manifest.file_path, "definitions.txt");

        let back = serde_json::to_string(&manifest).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn manifest_missing_fields_default_to_empty() {
        let manifest: ManifestDocument = serde_json::from_str("{}").unwrap();
        assert!(manifest.index_file_path.is_empty());
        assert!(manifest.file_path.is_empty());
    }

    #[test]
    fn entry_roundtrip() {
        let json = r#"{"offset":0,"length":5}"#;
        let entry: IndexEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, IndexEntry::new(0, 5));

        let back = serde_json::to_string(&entry).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn entry_byte_range_validates() {
        let range = IndexEntry::new(10, 5).byte_range("word").unwrap();
        assert_eq!(range.offset, 10);
        assert_eq!(range.length, 5);
        assert_eq!(range.end_inclusive(), 14);
    }

    #[test]
    fn entry_missing_length_is_invalid() {
        let entry: IndexEntry = serde_json::from_str(r#"{"offset":3}"#).unwrap();
        let err = entry.byte_range("word").unwrap_err();
        assert!(matches!(
            err,
            crate::error::DictionaryError::InvalidIndexEntry { .. }
        ));
    }

    #[test]
    fn entry_zero_length_is_invalid() {
        let err = IndexEntry::new(0, 0).byte_range("word").unwrap_err();
        assert!(matches!(
            err,
            crate::error::DictionaryError::InvalidIndexEntry { .. }
        ));
    }
}
