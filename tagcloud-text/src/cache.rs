//! Measurement cache — remembers glyph boxes per `(word, font size)`.
//!
//! Shaping a word through cosmic-text is far more expensive than the
//! collision test it feeds, and the renderer measures every word a second
//! time before drawing. An LRU keeps the hot set bounded for long-lived
//! engines that lay out many clouds.

use std::num::NonZeroUsize;

use lru::LruCache;
use tagcloud_core::Size;

/// Cache key: the word and the bit pattern of its font size, so that
/// `f32` sizes hash exactly.
type Key = (String, u32);

pub struct MeasureCache {
    entries: LruCache<Key, Size>,
    hits: u64,
    misses: u64,
}

impl MeasureCache {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, word: &str, font_size: f32) -> Option<Size> {
        let found = self
            .entries
            .get(&(word.to_string(), font_size.to_bits()))
            .copied();
        match found {
            Some(_) => self.hits += 1,
            None => self.misses += 1,
        }
        found
    }

    pub fn put(&mut self, word: &str, font_size: f32, size: Size) {
        self.entries.put((word.to_string(), font_size.to_bits()), size);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let mut cache = MeasureCache::new(8);
        assert_eq!(cache.get("hello", 12.0), None);
        cache.put("hello", 12.0, Size::new(30, 14));
        assert_eq!(cache.get("hello", 12.0), Some(Size::new(30, 14)));
        assert_eq!(cache.stats(), (1, 1));
    }

    #[test]
    fn test_font_size_is_part_of_key() {
        let mut cache = MeasureCache::new(8);
        cache.put("hello", 12.0, Size::new(30, 14));
        assert_eq!(cache.get("hello", 12.5), None);
    }

    #[test]
    fn test_evicts_least_recent() {
        let mut cache = MeasureCache::new(2);
        cache.put("a", 10.0, Size::new(1, 1));
        cache.put("b", 10.0, Size::new(2, 2));
        cache.get("a", 10.0);
        cache.put("c", 10.0, Size::new(3, 3));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("b", 10.0).is_none());
        assert!(cache.get("a", 10.0).is_some());
    }

    #[test]
    fn test_zero_capacity_clamps() {
        let mut cache = MeasureCache::new(0);
        cache.put("a", 10.0, Size::new(1, 1));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
