//! Prefix search over the index's sorted key sequences.
//!
//! Stateless: each call is a lower-bound binary search for the first key
//! greater than or equal to the query, then a bounded forward scan while the
//! prefix still matches. Prefix matches are contiguous in sorted order, so a
//! single mismatch terminates the scan.

use super::index::DictionaryIndex;

/// Return up to `max_results` words starting with `query`, in the sort order
/// of the selected sequence.
///
/// With `case_sensitive = false` the query is lowercased and matched against
/// the lowercase sequence; results carry their original casing but are
/// ordered by their lowercase forms. An empty query yields an empty result
/// with no search performed. Malformed input never fails: the worst outcome
/// is an empty vector.
pub fn suggest(
    index: &DictionaryIndex,
    query: &str,
    max_results: usize,
    case_sensitive: bool,
) -> Vec<String> {
    if query.is_empty() || max_results == 0 {
        return Vec::new();
    }

    if case_sensitive {
        let keys = index.keys();
        let start = keys.partition_point(|key| key.as_str() < query);
        keys[start..]
            .iter()
            .take_while(|key| key.starts_with(query))
            .take(max_results)
            .cloned()
            .collect()
    } else {
        let needle = query.to_lowercase();
        let keys = index.keys();
        let lower = index.keys_lower();
        let start = lower.partition_point(|pair| pair.0.as_str() < needle.as_str());
        lower[start..]
            .iter()
            .take_while(|pair| pair.0.starts_with(&needle))
            .take(max_results)
            .map(|pair| keys[pair.1 as usize].clone())
            .collect()
    }
}
