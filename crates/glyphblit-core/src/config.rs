//! Engine configuration
//!
//! Settings shared by glyph source backends. Defaults are sensible for
//! interactive use; `GLYPHBLIT_GLYPH_CACHE` overrides the glyph cache size
//! at startup:
//!
//! ```bash
//! GLYPHBLIT_GLYPH_CACHE=0 ./my_app   # disable glyph caching
//! ```

use crate::error::{BlitError, Result};

/// Environment variable holding the glyph cache capacity
pub const GLYPH_CACHE_ENV: &str = "GLYPHBLIT_GLYPH_CACHE";

const DEFAULT_GLYPH_CACHE_CAPACITY: usize = 256;

/// Knobs for a font engine context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Rasterized glyphs kept per font; 0 disables the cache
    pub glyph_cache_capacity: usize,
}

impl EngineConfig {
    /// Defaults overridden by the environment
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(GLYPH_CACHE_ENV) {
            match parse_capacity(&raw) {
                Ok(capacity) => {
                    log::info!("Glyph cache capacity set to {} via {}", capacity, GLYPH_CACHE_ENV);
                    config.glyph_cache_capacity = capacity;
                },
                Err(e) => log::warn!("Ignoring {}: {}", GLYPH_CACHE_ENV, e),
            }
        }
        config
    }

    pub fn with_glyph_cache_capacity(mut self, capacity: usize) -> Self {
        self.glyph_cache_capacity = capacity;
        self
    }

    pub fn caching_enabled(&self) -> bool {
        self.glyph_cache_capacity > 0
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            glyph_cache_capacity: DEFAULT_GLYPH_CACHE_CAPACITY,
        }
    }
}

/// Parse a cache capacity as given on the command line or environment
pub fn parse_capacity(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| BlitError::Config(format!("invalid glyph cache capacity '{}'", raw)))
}
