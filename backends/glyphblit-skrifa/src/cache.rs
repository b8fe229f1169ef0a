//! Per-font cache of rasterized glyphs
//!
//! A font is loaded at one size, so a glyph is identified by its index and
//! the render mode alone. Entries are evicted least-recently-used first.

use glyphblit_core::types::{GlyphId, GlyphMetrics, RasterizedGlyph, RenderMode};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

type GlyphKey = (GlyphId, RenderMode);

/// Bounded LRU of rasterized glyphs with hit/miss counters
pub struct GlyphCache {
    entries: Mutex<LruCache<GlyphKey, RasterizedGlyph>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl GlyphCache {
    /// Returns `None` for a zero capacity, meaning caching is disabled
    pub fn new(capacity: usize) -> Option<Self> {
        let capacity = NonZeroUsize::new(capacity)?;
        Some(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        })
    }

    pub fn get(&self, glyph: GlyphId, mode: RenderMode) -> Option<RasterizedGlyph> {
        let found = self.entries.lock().get(&(glyph, mode)).cloned();
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Metrics of a glyph cached in either mode, without touching counters
    /// or recency
    pub fn peek_metrics(&self, glyph: GlyphId) -> Option<GlyphMetrics> {
        let entries = self.entries.lock();
        [RenderMode::AntiAliased, RenderMode::Mono]
            .iter()
            .find_map(|&mode| entries.peek(&(glyph, mode)).map(|g| g.metrics))
    }

    pub fn insert(&self, glyph: GlyphId, mode: RenderMode, rasterized: RasterizedGlyph) {
        self.entries.lock().put((glyph, mode), rasterized);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn stats(&self) -> GlyphCacheStats {
        let entries = self.entries.lock();
        GlyphCacheStats {
            len: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of cache usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCacheStats {
    pub len: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl GlyphCacheStats {
    /// Fraction of lookups served from the cache, 0.0 before any lookup
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
