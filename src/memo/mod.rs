//! Bounded memoization for pure calculators.
//!
//! A [`Memo`] is an explicit cache object owned by whichever engine resource
//! needs it (never global state), wrapping exactly one pure function. Keys
//! are the canonical `serde_json` serialization of the call's arguments, so
//! any serializable argument tuple works.
//!
//! Eviction is deliberately crude: once the number of distinct keys reaches
//! the clear threshold, the whole map is dropped and rebuilt from empty.
//! That trades an O(1) bulk clear for a short burst of misses, and keeps the
//! cache from growing without bound.

use crate::shared::MEMO_CLEAR_THRESHOLD;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Memo<V> {
    entries: HashMap<String, V>,
    clear_threshold: usize,
}

impl<V: Clone> Memo<V> {
    pub fn new() -> Self {
        Self::with_threshold(MEMO_CLEAR_THRESHOLD)
    }

    pub fn with_threshold(clear_threshold: usize) -> Self {
        Self {
            entries: HashMap::new(),
            clear_threshold: clear_threshold.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached result for `key`, computing and caching it on a
    /// miss. A purely performance layer: if the key cannot be serialized the
    /// computation simply runs uncached, so the wrapped function's semantics
    /// never change.
    pub fn get_or_insert_with<K, F>(&mut self, key: &K, compute: F) -> V
    where
        K: Serialize + ?Sized,
        F: FnOnce() -> V,
    {
        let Ok(key) = serde_json::to_string(key) else {
            return compute();
        };

        if let Some(value) = self.entries.get(&key) {
            return value.clone();
        }

        if self.entries.len() >= self.clear_threshold {
            self.entries.clear();
        }

        let value = compute();
        self.entries.insert(key, value.clone());
        value
    }
}

impl<V: Clone> Default for Memo<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn caches_repeat_calls() {
        let calls = Cell::new(0);
        let mut memo: Memo<u64> = Memo::new();

        let mut square = |n: u64| {
            memo.get_or_insert_with(&n, || {
                calls.set(calls.get() + 1);
                n * n
            })
        };

        assert_eq!(square(12), 144);
        assert_eq!(square(12), 144);
        assert_eq!(calls.get(), 1, "second call must come from the cache");
    }

    #[test]
    fn distinct_keys_do_not_collide() {
        let mut memo: Memo<String> = Memo::new();
        let a = memo.get_or_insert_with(&("carrot", 1u32), || "a".to_string());
        let b = memo.get_or_insert_with(&("carrot", 2u32), || "b".to_string());
        assert_eq!(a, "a");
        assert_eq!(b, "b");
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn clears_wholesale_at_threshold() {
        let mut memo: Memo<u64> = Memo::with_threshold(4);
        for n in 0u64..4 {
            memo.get_or_insert_with(&n, || n);
        }
        assert_eq!(memo.len(), 4);

        // The fifth distinct key triggers a full clear, then is cached alone.
        memo.get_or_insert_with(&99u64, || 99);
        assert_eq!(memo.len(), 1, "cache drops everything at the threshold");
    }

    #[test]
    fn results_survive_cache_clearing() {
        let mut memo: Memo<u64> = Memo::with_threshold(3);
        let double = |n: u64| n * 2;

        let before: Vec<u64> = (0..10)
            .map(|n| memo.get_or_insert_with(&n, || double(n)))
            .collect();
        let after: Vec<u64> = (0..10)
            .map(|n| memo.get_or_insert_with(&n, || double(n)))
            .collect();

        assert_eq!(
            before, after,
            "clearing must never change the wrapped function's results"
        );
    }
}
