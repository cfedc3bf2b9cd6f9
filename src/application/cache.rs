//! Caller-held memoization for extraction results.
//!
//! Keyed by a blake3 hash of the exact raw upload bytes, so a hit is
//! observably equivalent to recomputation. The cache is plain owned
//! state: whoever holds it decides when to invalidate, and nothing is
//! shared process-wide.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::domain::{CleanedSequence, Result};

use super::extractor;

/// Content-addressed cache of cleaned sequences.
#[derive(Debug, Default)]
pub struct ExtractCache {
    entries: HashMap<blake3::Hash, CleanedSequence>,
}

impl ExtractCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cleaned sequence for `raw`, extracting on first sight.
    ///
    /// Failed extractions are not cached; a later call with the same
    /// bytes will attempt extraction again.
    ///
    /// # Errors
    /// Same conditions as [`extractor::extract`].
    pub fn get_or_extract(&mut self, raw: &[u8]) -> Result<&CleanedSequence> {
        match self.entries.entry(blake3::hash(raw)) {
            Entry::Occupied(entry) => {
                tracing::debug!("Cache hit for {} input bytes", raw.len());
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let seq = extractor::extract(raw)?;
                Ok(entry.insert(seq))
            }
        }
    }

    /// Drops the cached result for `raw`, if any. Returns whether an
    /// entry was removed.
    pub fn invalidate(&mut self, raw: &[u8]) -> bool {
        self.entries.remove(&blake3::hash(raw)).is_some()
    }

    /// Drops every cached result.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = b"telefono\n555-1234567\n+1 (800) 5551212\n";

    #[test]
    fn test_hit_equals_recomputation() {
        let mut cache = ExtractCache::new();

        let direct = extractor::extract(INPUT).unwrap();
        let first = cache.get_or_extract(INPUT).unwrap().clone();
        let second = cache.get_or_extract(INPUT).unwrap().clone();

        assert_eq!(first, direct);
        assert_eq!(second, direct);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_inputs_get_distinct_entries() {
        let mut cache = ExtractCache::new();

        cache.get_or_extract(INPUT).unwrap();
        cache.get_or_extract(b"telefono\n600112233445\n").unwrap();

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let mut cache = ExtractCache::new();

        cache.get_or_extract(INPUT).unwrap();
        assert!(cache.invalidate(INPUT));
        assert!(!cache.invalidate(INPUT));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failed_extraction_is_not_cached() {
        let mut cache = ExtractCache::new();

        assert!(cache.get_or_extract(&[0xff, 0xfe]).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear_empties_cache() {
        let mut cache = ExtractCache::new();

        cache.get_or_extract(INPUT).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
