//! In-memory word index.
//!
//! Owns the parsed index document plus the sorted key sequences that prefix
//! search runs over. Built once at startup and immutable afterward, so
//! concurrent reads need no locking.

use std::collections::HashMap;

use super::error::{DictionaryError, DictionaryResult};
use super::format::IndexEntry;

/// Word → byte-range index with paired sorted key sequences.
///
/// Two orderings are maintained:
/// - `keys`: every word, sorted ascending by native string order
///   (case-sensitive basis);
/// - `keys_lower`: `(lowercase form, position in keys)` pairs, sorted
///   ascending by the lowercase form (case-insensitive basis).
///
/// Storing the position alongside each lowercase form ties the two orderings
/// together structurally: a match in `keys_lower` always resolves to the
/// original-case word it was derived from, and the sequences cannot drift
/// apart. Duplicate lowercase forms ("Go" and "go") are retained as distinct
/// elements.
pub struct DictionaryIndex {
    entries: HashMap<String, IndexEntry>,
    keys: Vec<String>,
    keys_lower: Vec<(String, u32)>,
}

impl DictionaryIndex {
    /// Build the index from a parsed index document.
    ///
    /// Both sorts are stable; source keys are assumed unique.
    ///
    /// # Errors
    ///
    /// `IndexBuild` when the document contains no entries.
    pub fn build(entries: HashMap<String, IndexEntry>) -> DictionaryResult<Self> {
        if entries.is_empty() {
            return Err(DictionaryError::index_build(
                "index document contains no entries",
            ));
        }

        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();

        let mut keys_lower: Vec<(String, u32)> = keys
            .iter()
            .enumerate()
            .map(|(pos, key)| (key.to_lowercase(), pos as u32))
            .collect();
        keys_lower.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Self {
            entries,
            keys,
            keys_lower,
        })
    }

    /// Exact-match lookup, O(1) expected.
    ///
    /// No normalization is applied: `lookup("Go")` and `lookup("go")` are
    /// independent. Callers needing case-insensitive resolution should search
    /// first via prefix search.
    pub fn lookup(&self, word: &str) -> Option<IndexEntry> {
        self.entries.get(word).copied()
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no words. Never true after a successful build.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All words, sorted by native string order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Lowercase forms with their positions in [`keys`](Self::keys), sorted
    /// by lowercase order.
    pub(crate) fn keys_lower(&self) -> &[(String, u32)] {
        &self.keys_lower
    }
}

impl std::fmt::Debug for DictionaryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryIndex")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> DictionaryIndex {
        let entries = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.to_string(), IndexEntry::new(i as u64 * 10, 10)))
            .collect();
        DictionaryIndex::build(entries).unwrap()
    }

    #[test]
    fn build_rejects_empty_document() {
        let err = DictionaryIndex::build(HashMap::new()).unwrap_err();
        assert!(matches!(err, DictionaryError::IndexBuild { .. }));
    }

    #[test]
    fn lookup_is_exact_case() {
        let index = index_of(&["Go", "go", "rust"]);

        let upper = index.lookup("Go").unwrap();
        let lower = index.lookup("go").unwrap();
        assert_ne!(upper.offset, lower.offset);

        assert!(index.lookup("GO").is_none());
        assert!(index.lookup("missing").is_none());
    }

    #[test]
    fn keys_are_sorted() {
        let index = index_of(&["Banana", "Apple", "Apricot"]);
        assert_eq!(index.keys(), &["Apple", "Apricot", "Banana"]);
    }

    #[test]
    fn lowercase_sequence_is_sorted_and_paired() {
        let index = index_of(&["Apple", "Banana", "Apricot", "Go", "go"]);

        let lower = index.keys_lower();
        assert_eq!(lower.len(), index.keys().len());

        for pair in lower {
            assert_eq!(pair.0, index.keys()[pair.1 as usize].to_lowercase());
        }
        for window in lower.windows(2) {
            assert!(window[0].0 <= window[1].0);
        }
    }

    #[test]
    fn duplicate_lowercase_forms_are_retained() {
        let index = index_of(&["Go", "go"]);

        let forms: Vec<&str> = index
            .keys_lower()
            .iter()
            .map(|pair| pair.0.as_str())
            .collect();
        assert_eq!(forms, vec!["go", "go"]);
    }
}
