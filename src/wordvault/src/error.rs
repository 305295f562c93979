//! Error types for dictionary operations.

use std::fmt;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = std::result::Result<T, DictionaryError>;

/// Errors that can occur while loading the index or resolving definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DictionaryError {
    /// A word is absent from the index, or an object key is absent in the store.
    NotFound {
        /// The word or object key that was not found.
        key: String,
    },

    /// The index entry for a present word has a missing or malformed byte range.
    InvalidIndexEntry {
        /// The word whose entry is malformed.
        word: String,
        /// Description of what is wrong with the entry.
        message: String,
    },

    /// A byte range was rejected, either locally or by the store.
    InvalidRange {
        /// The object key the range was requested against.
        key: String,
        /// Description of the rejected range.
        message: String,
    },

    /// Credentials were rejected by the store.
    Unauthorized {
        /// Description of the credential problem.
        message: String,
    },

    /// Bucket, region, or client configuration is unusable.
    Misconfigured {
        /// Description of the configuration problem.
        message: String,
    },

    /// Transient store failure: throttling, timeout, connectivity.
    Unavailable {
        /// Description of the transient condition.
        message: String,
    },

    /// Returned bytes could not be decoded (non-UTF-8 payload, invalid JSON).
    Decode {
        /// The object key whose payload failed to decode.
        key: String,
        /// Description of the decoding failure.
        message: String,
    },

    /// The manifest or index document is malformed or unreachable at startup.
    ///
    /// Fatal: the process must not begin serving traffic with no index.
    IndexBuild {
        /// Description of the build failure.
        message: String,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::NotFound { key } => {
                write!(f, "not found: {}", key)
            }
            DictionaryError::InvalidIndexEntry { word, message } => {
                write!(f, "invalid index entry for '{}': {}", word, message)
            }
            DictionaryError::InvalidRange { key, message } => {
                write!(f, "invalid range for '{}': {}", key, message)
            }
            DictionaryError::Unauthorized { message } => {
                write!(f, "unauthorized: {}", message)
            }
            DictionaryError::Misconfigured { message } => {
                write!(f, "misconfigured: {}", message)
            }
            DictionaryError::Unavailable { message } => {
                write!(f, "store unavailable: {}", message)
            }
            DictionaryError::Decode { key, message } => {
                write!(f, "decode error for '{}': {}", key, message)
            }
            DictionaryError::IndexBuild { message } => {
                write!(f, "index build failed: {}", message)
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

impl DictionaryError {
    /// Create a not-found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        DictionaryError::NotFound { key: key.into() }
    }

    /// Create an invalid-index-entry error.
    pub fn invalid_index_entry(word: impl Into<String>, message: impl Into<String>) -> Self {
        DictionaryError::InvalidIndexEntry {
            word: word.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-range error.
    pub fn invalid_range(key: impl Into<String>, message: impl Into<String>) -> Self {
        DictionaryError::InvalidRange {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        DictionaryError::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a misconfigured error.
    pub fn misconfigured(message: impl Into<String>) -> Self {
        DictionaryError::Misconfigured {
            message: message.into(),
        }
    }

    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        DictionaryError::Unavailable {
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(key: impl Into<String>, message: impl Into<String>) -> Self {
        DictionaryError::Decode {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an index-build error.
    pub fn index_build(message: impl Into<String>) -> Self {
        DictionaryError::IndexBuild {
            message: message.into(),
        }
    }

    /// Whether this failure is transient and worth retrying with backoff.
    ///
    /// Only `Unavailable` qualifies; every other kind is surfaced on first
    /// occurrence.
    pub fn is_transient(&self) -> bool {
        matches!(self, DictionaryError::Unavailable { .. })
    }

    /// Stable kind label, for collaborators that map errors onto a wire
    /// protocol (e.g. an HTTP layer).
    pub fn kind(&self) -> &'static str {
        match self {
            DictionaryError::NotFound { .. } => "not_found",
            DictionaryError::InvalidIndexEntry { .. } => "invalid_index_entry",
            DictionaryError::InvalidRange { .. } => "invalid_range",
            DictionaryError::Unauthorized { .. } => "unauthorized",
            DictionaryError::Misconfigured { .. } => "misconfigured",
            DictionaryError::Unavailable { .. } => "unavailable",
            DictionaryError::Decode { .. } => "decode_error",
            DictionaryError::IndexBuild { .. } => "index_build",
        }
    }
}
