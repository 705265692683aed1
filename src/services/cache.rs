use lru::LruCache;
use serde::Serialize;
use std::num::NonZeroUsize;

use crate::core::range::parse_range;
use crate::models::NumericRange;

/// LRU memo of parsed debt range strings
///
/// Catalogs repeat the same handful of bands ("$5M - $25M", "$100M+") across
/// many lenders, so a scoring pass mostly hits this cache. Results are exactly
/// what [`parse_range`] returns, including `None` and NaN-bearing ranges.
pub struct RangeCache {
    entries: LruCache<String, Option<NumericRange>>,
    hits: u64,
    misses: u64,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl RangeCache {
    /// Create a cache holding up to `capacity` distinct strings (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Parse `text`, reusing an earlier result when available
    pub fn get_or_parse(&mut self, text: &str) -> Option<NumericRange> {
        if let Some(range) = self.entries.get(text) {
            self.hits += 1;
            tracing::trace!("Range cache hit: {}", text);
            return *range;
        }

        self.misses += 1;
        let range = parse_range(text);
        self.entries.put(text.to_string(), range);
        range
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            capacity: self.entries.cap().get(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl std::fmt::Debug for RangeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeCache").field("stats", &self.stats()).finish()
    }
}
