//! Pure Rust glyph source built on skrifa and zeno
//!
//! A [`FontEngine`] is the explicit context fonts are loaded through. It
//! carries the [`EngineConfig`] and hands out [`SkrifaFont`]s, each bound to
//! one face at one pixel size. Fonts are independent of the engine once
//! loaded, and of each other.
//!
//! ```rust,no_run
//! use glyphblit::{measure, rasterize_text, RenderMode};
//! use glyphblit_skrifa::FontEngine;
//!
//! let engine = FontEngine::from_env();
//! let font = engine.load_font_file("DejaVuSans.ttf", 16.0)?;
//! let bbox = measure(&font, "Hello")?;
//! let surface = rasterize_text(&font, "Hello", RenderMode::AntiAliased)?;
//! # Ok::<(), glyphblit::BlitError>(())
//! ```
//!
//! Outlines are drawn unhinted, so glyph metrics are fractional 26.6 values
//! scaled straight from font units. Kerning comes from the legacy `kern`
//! table only and is grid-fitted to whole pixels.

pub mod cache;
pub mod kern;
pub mod raster;

use std::path::Path;

use glyphblit_core::{
    error::{FontLoadError, GlyphSourceError, Result},
    traits::GlyphSource,
    types::{FontInfo, GlyphId, GlyphMetrics, RasterizedGlyph, RenderMode, VerticalMetrics},
    EngineConfig, F26Dot6,
};
use read_fonts::types::Tag;
use skrifa::{
    instance::{LocationRef, Size},
    outline::DrawSettings,
    string::StringId,
    MetadataProvider,
};

pub use cache::{GlyphCache, GlyphCacheStats};
pub use kern::KernTable;
use raster::{GlyphOutline, OutlineBuilder};

/// Pixel size below which kerning is attenuated before rounding
pub const KERN_FULL_PPEM: i32 = 25;

/// Grid-fit a scaled kerning delta
///
/// Below [`KERN_FULL_PPEM`] the delta shrinks by `ppem / 25`; the result is
/// then rounded to a whole pixel, so small adjustments vanish at small
/// sizes instead of costing a pixel each.
pub fn grid_fit_kerning(delta: F26Dot6, ppem: i32) -> F26Dot6 {
    let delta = if ppem < KERN_FULL_PPEM {
        delta.mul_div(ppem, KERN_FULL_PPEM)
    } else {
        delta
    };
    delta.round()
}

/// Context that loads fonts with a shared configuration
#[derive(Debug, Clone, Default)]
pub struct FontEngine {
    config: EngineConfig,
}

impl FontEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configured from `GLYPHBLIT_GLYPH_CACHE` and defaults
    pub fn from_env() -> Self {
        Self::with_config(EngineConfig::from_env())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Load the first face of `data` at `size` pixels per em
    pub fn load_font(&self, data: Vec<u8>, size: f32) -> Result<SkrifaFont> {
        self.load_font_index(data, 0, size)
    }

    /// Load face `face_index` of a font or collection
    pub fn load_font_index(&self, data: Vec<u8>, face_index: u32, size: f32) -> Result<SkrifaFont> {
        SkrifaFont::new(data, face_index, size, &self.config)
    }

    /// Read a font file and load its first face
    pub fn load_font_file(&self, path: impl AsRef<Path>, size: f32) -> Result<SkrifaFont> {
        self.load_font_file_index(path, 0, size)
    }

    /// Read a font file and load face `face_index` of it
    ///
    /// A missing file is `FileNotFound`; any other read failure is passed
    /// on as an I/O error.
    pub fn load_font_file_index(
        &self,
        path: impl AsRef<Path>,
        face_index: u32,
        size: f32,
    ) -> Result<SkrifaFont> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FontLoadError::FileNotFound(path.display().to_string()).into()
            } else {
                glyphblit_core::BlitError::Io(e)
            }
        })?;
        log::debug!("Read {} bytes from {}", data.len(), path.display());
        self.load_font_index(data, face_index, size)
    }
}

/// One face at one pixel size
///
/// Owns the font bytes and reparses the table directory on demand, which
/// is cheap compared to outline work.
pub struct SkrifaFont {
    data: Vec<u8>,
    face_index: u32,
    size: f32,
    units_per_em: u16,
    vertical: VerticalMetrics,
    info: FontInfo,
    kern: KernTable,
    cache: Option<GlyphCache>,
}

impl std::fmt::Debug for SkrifaFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkrifaFont")
            .field("face_index", &self.face_index)
            .field("size", &self.size)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl SkrifaFont {
    fn new(data: Vec<u8>, face_index: u32, size: f32, config: &EngineConfig) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontLoadError::InvalidSize(size).into());
        }

        let font =
            skrifa::FontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let metrics = font.metrics(Size::new(size), LocationRef::default());
        let vertical = VerticalMetrics::new(
            F26Dot6::from_float(metrics.ascent.ceil()),
            F26Dot6::from_float(metrics.descent.floor()),
        );

        let kern = font
            .table_data(Tag::new(b"kern"))
            .and_then(|table| {
                let parsed = KernTable::parse(table.as_ref());
                if parsed.is_none() {
                    log::warn!("Ignoring unreadable kern table");
                }
                parsed
            })
            .unwrap_or_default();

        let name = |id: StringId| {
            font.localized_strings(id)
                .english_or_first()
                .map(|s| s.to_string())
        };
        let info = FontInfo {
            family: name(StringId::FAMILY_NAME),
            style: name(StringId::SUBFAMILY_NAME),
            ascent: vertical.ascender_pixels(),
            descent: -vertical.descender.pixel(),
            glyph_count: metrics.glyph_count as u32,
            has_kerning: !kern.is_empty(),
        };
        let units_per_em = metrics.units_per_em;

        log::info!(
            "Loaded {} {} at {}px: {} glyphs, {} kerning pairs",
            info.family.as_deref().unwrap_or("<unnamed>"),
            info.style.as_deref().unwrap_or(""),
            size,
            info.glyph_count,
            kern.len()
        );

        Ok(Self {
            data,
            face_index,
            size,
            units_per_em,
            vertical,
            info,
            kern,
            cache: GlyphCache::new(config.glyph_cache_capacity),
        })
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn kern_table(&self) -> &KernTable {
        &self.kern
    }

    /// Cache usage, `None` when caching is disabled
    pub fn cache_stats(&self) -> Option<GlyphCacheStats> {
        self.cache.as_ref().map(GlyphCache::stats)
    }

    fn font_ref(&self) -> Result<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(&self.data, self.face_index)
            .map_err(|_| GlyphSourceError::InvalidFont.into())
    }

    fn check_glyph(&self, glyph: GlyphId) -> Result<()> {
        if glyph >= self.info.glyph_count {
            return Err(GlyphSourceError::GlyphNotFound(glyph).into());
        }
        Ok(())
    }

    fn outline(&self, font: &skrifa::FontRef<'_>, glyph: GlyphId) -> Result<GlyphOutline> {
        let outlines = font.outline_glyphs();
        let outline = outlines
            .get(skrifa::GlyphId::new(glyph))
            .ok_or(GlyphSourceError::GlyphNotFound(glyph))?;

        let mut builder = OutlineBuilder::new();
        let settings = DrawSettings::unhinted(Size::new(self.size), LocationRef::default());
        outline
            .draw(settings, &mut builder)
            .map_err(|_| GlyphSourceError::OutlineFailed(glyph))?;
        Ok(builder.finish())
    }

    fn metrics_for(
        &self,
        font: &skrifa::FontRef<'_>,
        glyph: GlyphId,
        outline: &GlyphOutline,
    ) -> Result<GlyphMetrics> {
        let advance = font
            .glyph_metrics(Size::new(self.size), LocationRef::default())
            .advance_width(skrifa::GlyphId::new(glyph))
            .ok_or(GlyphSourceError::GlyphNotFound(glyph))?;

        let mut metrics = GlyphMetrics {
            advance: F26Dot6::from_float(advance),
            ..Default::default()
        };
        if let Some(bounds) = outline.bounds {
            metrics.bearing_x = F26Dot6::from_float(bounds.x0 as f32);
            metrics.width = F26Dot6::from_float(bounds.width() as f32);
            metrics.height = F26Dot6::from_float(bounds.height() as f32);
        }
        if let Some(grid) = outline.pixel_box() {
            metrics.bitmap_left = grid.left;
            metrics.bitmap_top = grid.top();
        }
        Ok(metrics)
    }
}

impl GlyphSource for SkrifaFont {
    fn vertical_metrics(&self) -> VerticalMetrics {
        self.vertical
    }

    fn has_kerning(&self) -> bool {
        self.info.has_kerning
    }

    fn glyph_index(&self, ch: char) -> GlyphId {
        self.font_ref()
            .ok()
            .and_then(|font| font.charmap().map(ch))
            .map(|id| id.to_u32())
            .unwrap_or(glyphblit_core::types::MISSING_GLYPH)
    }

    fn kerning(&self, left: GlyphId, right: GlyphId) -> Result<F26Dot6> {
        let Some(value) = self.kern.get(left, right) else {
            return Ok(F26Dot6::ZERO);
        };
        let scale = self.size / self.units_per_em.max(1) as f32;
        let scaled = F26Dot6::from_float(value as f32 * scale);
        Ok(grid_fit_kerning(scaled, self.size.round() as i32))
    }

    fn glyph_metrics(&self, glyph: GlyphId) -> Result<GlyphMetrics> {
        self.check_glyph(glyph)?;
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.peek_metrics(glyph)) {
            return Ok(cached);
        }
        let font = self.font_ref()?;
        let outline = self.outline(&font, glyph)?;
        self.metrics_for(&font, glyph, &outline)
    }

    fn rasterize(&self, glyph: GlyphId, mode: RenderMode) -> Result<RasterizedGlyph> {
        self.check_glyph(glyph)?;
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(glyph, mode)) {
            return Ok(hit);
        }

        let font = self.font_ref()?;
        let outline = self.outline(&font, glyph)?;
        let rasterized = RasterizedGlyph {
            metrics: self.metrics_for(&font, glyph, &outline)?,
            bitmap: outline.rasterize(mode),
        };
        log::trace!(
            "Rasterized glyph {} ({:?}): {}x{}",
            glyph,
            mode,
            rasterized.bitmap.width,
            rasterized.bitmap.rows
        );

        if let Some(cache) = &self.cache {
            cache.insert(glyph, mode, rasterized.clone());
        }
        Ok(rasterized)
    }

    fn info(&self) -> FontInfo {
        self.info.clone()
    }
}
