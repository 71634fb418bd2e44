// SPDX-License-Identifier: MPL-2.0
//! Decoded page cache.
//!
//! Keeps recently shown and prefetched pages in memory so that stepping back
//! and forth does not decode the same file twice.
//!
//! - **LRU eviction**: least recently used pages go first
//! - **Memory-bounded**: limited by both entry count and total bytes
//! - **Path-keyed**: pages are looked up by file path

use crate::catalog::PageImage;
use crate::config::{
    DEFAULT_CACHE_MAX_BYTES, DEFAULT_CACHE_MAX_IMAGES, DEFAULT_PREFETCH_COUNT,
    MAX_CACHE_MAX_BYTES, MAX_CACHE_MAX_IMAGES, MAX_PREFETCH_COUNT, MIN_CACHE_MAX_BYTES,
    MIN_CACHE_MAX_IMAGES,
};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Limits of the page cache and how far ahead to prefetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of pages to cache.
    pub max_images: usize,

    /// Pages decoded ahead in each direction.
    pub prefetch_count: usize,

    pub enabled: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_MAX_BYTES,
            max_images: DEFAULT_CACHE_MAX_IMAGES,
            prefetch_count: DEFAULT_PREFETCH_COUNT,
            enabled: true,
        }
    }
}

impl PrefetchConfig {
    /// Creates an enabled configuration, clamping every limit to its allowed range.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize, prefetch_count: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_CACHE_MAX_BYTES, MAX_CACHE_MAX_BYTES),
            max_images: max_images.clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES),
            prefetch_count: prefetch_count.min(MAX_PREFETCH_COUNT),
            enabled: true,
        }
    }

    /// No caching and no prefetching; every page is decoded on demand.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            prefetch_count: 0,
            ..Default::default()
        }
    }
}

/// Counters describing cache effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

/// LRU cache of decoded pages bounded by entry count and bytes.
pub struct PageCache {
    entries: LruCache<PathBuf, PageImage>,
    config: PrefetchConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl PageCache {
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PrefetchConfig {
        &self.config
    }

    /// Stores a decoded page.
    ///
    /// Returns `false` when caching is disabled or the page would take more
    /// than half of the byte budget.
    pub fn insert(&mut self, path: PathBuf, page: PageImage) -> bool {
        if !self.config.enabled {
            return false;
        }

        let size = page.size_bytes();
        if size > self.config.max_bytes / 2 {
            log::debug!("Page {} too large to cache ({size} bytes)", path.display());
            return false;
        }

        if let Some(previous) = self.entries.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(previous.size_bytes());
        }

        while self.current_bytes + size > self.config.max_bytes {
            match self.entries.pop_lru() {
                Some((_, evicted)) => self.account_eviction(&evicted),
                None => break,
            }
        }

        if let Some((evicted_path, evicted)) = self.entries.push(path.clone(), page) {
            if evicted_path != path {
                self.account_eviction(&evicted);
            }
        }
        self.current_bytes += size;
        self.stats.insertions += 1;
        true
    }

    fn account_eviction(&mut self, evicted: &PageImage) {
        self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
        self.stats.evictions += 1;
    }

    /// Looks up a page and marks it as most recently used.
    pub fn get(&mut self, path: &Path) -> Option<PageImage> {
        if !self.config.enabled {
            return None;
        }
        match self.entries.get(path) {
            Some(page) => {
                self.stats.hits += 1;
                Some(page.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks for a page without touching the LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.config.enabled && self.entries.contains(path)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("enabled", &self.config.enabled)
            .field("pages", &self.entries.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: usize = 1024 * 1024;

    fn page(width: u32, height: u32) -> PageImage {
        PageImage::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
    }

    fn small_config(max_bytes: usize, max_images: usize) -> PrefetchConfig {
        PrefetchConfig {
            max_bytes,
            max_images,
            prefetch_count: 1,
            enabled: true,
        }
    }

    #[test]
    fn insert_then_get() {
        let mut cache = PageCache::new(PrefetchConfig::default());
        let path = PathBuf::from("/pages/image1.png");
        assert!(cache.insert(path.clone(), page(100, 100)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 40_000);
        let hit = cache.get(&path).expect("cached page");
        assert_eq!(hit.width, 100);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn miss_is_counted() {
        let mut cache = PageCache::new(PrefetchConfig::default());
        assert!(cache.get(Path::new("/pages/none.png")).is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn disabled_cache_stores_nothing() {
        let mut cache = PageCache::new(PrefetchConfig::disabled());
        let path = PathBuf::from("/pages/image1.png");
        assert!(!cache.insert(path.clone(), page(10, 10)));
        assert!(cache.get(&path).is_none());
        assert!(!cache.contains(&path));
    }

    #[test]
    fn byte_limit_evicts_least_recently_used() {
        let mut cache = PageCache::new(small_config(100_000, 10));
        for i in 0..5 {
            cache.insert(PathBuf::from(format!("/p/{i}.png")), page(100, 100));
        }
        assert!(cache.memory_usage() <= 100_000);
        assert!(!cache.contains(Path::new("/p/0.png")));
        assert!(cache.contains(Path::new("/p/4.png")));
        assert!(cache.stats().evictions > 0);
    }

    #[test]
    fn count_limit_evicts_and_keeps_bytes_consistent() {
        let mut cache = PageCache::new(small_config(10 * MB, 2));
        for i in 0..4 {
            cache.insert(PathBuf::from(format!("/p/{i}.png")), page(10, 10));
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.memory_usage(), 2 * 400);
        assert_eq!(cache.stats().evictions, 2);
    }

    #[test]
    fn access_refreshes_lru_position() {
        let mut cache = PageCache::new(small_config(10 * MB, 2));
        let first = PathBuf::from("/p/1.png");
        cache.insert(first.clone(), page(10, 10));
        cache.insert(PathBuf::from("/p/2.png"), page(10, 10));
        cache.get(&first);
        cache.insert(PathBuf::from("/p/3.png"), page(10, 10));
        assert!(cache.contains(&first));
        assert!(!cache.contains(Path::new("/p/2.png")));
    }

    #[test]
    fn oversized_page_is_not_cached() {
        let mut cache = PageCache::new(small_config(10_000, 4));
        assert!(!cache.insert(PathBuf::from("/p/big.png"), page(100, 100)));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_replaces_entry() {
        let mut cache = PageCache::new(PrefetchConfig::default());
        let path = PathBuf::from("/p/1.png");
        cache.insert(path.clone(), page(10, 10));
        cache.insert(path.clone(), page(20, 20));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 1_600);
        assert_eq!(cache.get(&path).expect("cached").width, 20);
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = PageCache::new(PrefetchConfig::default());
        cache.insert(PathBuf::from("/p/1.png"), page(10, 10));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }

    #[test]
    fn config_clamps_values() {
        let low = PrefetchConfig::new(0, 0, 100);
        assert_eq!(low.max_bytes, MIN_CACHE_MAX_BYTES);
        assert_eq!(low.max_images, MIN_CACHE_MAX_IMAGES);
        assert_eq!(low.prefetch_count, MAX_PREFETCH_COUNT);

        let high = PrefetchConfig::new(usize::MAX, usize::MAX, 1);
        assert_eq!(high.max_bytes, MAX_CACHE_MAX_BYTES);
        assert_eq!(high.max_images, MAX_CACHE_MAX_IMAGES);
        assert!(high.enabled);
    }

    #[test]
    fn disabled_config_does_not_prefetch() {
        let config = PrefetchConfig::disabled();
        assert!(!config.enabled);
        assert_eq!(config.prefetch_count, 0);
    }
}
