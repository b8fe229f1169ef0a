//! In-memory glyph source for unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use glyphblit_core::{
    error::{GlyphSourceError, Result},
    traits::GlyphSource,
    types::*,
    F26Dot6,
};

#[derive(Clone)]
pub(crate) struct MockGlyph {
    pub metrics: GlyphMetrics,
    pub coverage: GlyphBitmap,
    pub mono: GlyphBitmap,
}

impl MockGlyph {
    /// A glyph with whole-pixel metrics and a solid ink box
    pub fn solid(advance: i32, bearing_x: i32, width: u32, rows: u32, top: i32, value: u8) -> Self {
        let pitch = BitmapFormat::Mono.min_pitch(width);
        let mut mono = vec![0u8; pitch * rows as usize];
        for row in 0..rows as usize {
            for col in 0..width as usize {
                mono[row * pitch + col / 8] |= 0x80 >> (col % 8);
            }
        }
        Self {
            metrics: GlyphMetrics {
                advance: F26Dot6::from_int(advance),
                bearing_x: F26Dot6::from_int(bearing_x),
                width: F26Dot6::from_int(width as i32),
                height: F26Dot6::from_int(rows as i32),
                bitmap_left: bearing_x,
                bitmap_top: top,
            },
            coverage: GlyphBitmap {
                width,
                rows,
                pitch: width as usize,
                format: BitmapFormat::Gray8,
                buffer: vec![value; width as usize * rows as usize],
            },
            mono: GlyphBitmap {
                width,
                rows,
                pitch,
                format: BitmapFormat::Mono,
                buffer: mono,
            },
        }
    }

    pub fn with_metrics(mut self, metrics: GlyphMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_coverage(mut self, width: u32, rows: u32, buffer: Vec<u8>) -> Self {
        self.coverage = GlyphBitmap {
            width,
            rows,
            pitch: width as usize,
            format: BitmapFormat::Gray8,
            buffer,
        };
        self
    }

    pub fn with_mono(mut self, width: u32, rows: u32, pitch: usize, buffer: Vec<u8>) -> Self {
        self.mono = GlyphBitmap {
            width,
            rows,
            pitch,
            format: BitmapFormat::Mono,
            buffer,
        };
        self
    }
}

pub(crate) struct MockFont {
    pub vertical: VerticalMetrics,
    pub cmap: HashMap<char, GlyphId>,
    pub glyphs: HashMap<GlyphId, MockGlyph>,
    pub kerning: Option<HashMap<(GlyphId, GlyphId), F26Dot6>>,
    pub broken: Option<GlyphId>,
    pub kerning_calls: AtomicUsize,
}

impl MockFont {
    /// ascender 12px, descender -4px
    pub fn new() -> Self {
        Self {
            vertical: VerticalMetrics::new(F26Dot6::from_int(12), F26Dot6::from_int(-4)),
            cmap: HashMap::new(),
            glyphs: HashMap::new(),
            kerning: None,
            broken: None,
            kerning_calls: AtomicUsize::new(0),
        }
    }

    pub fn glyph(mut self, ch: char, id: GlyphId, glyph: MockGlyph) -> Self {
        self.cmap.insert(ch, id);
        self.glyphs.insert(id, glyph);
        self
    }

    /// Glyph 0 is what unmapped characters resolve to
    pub fn notdef(mut self, glyph: MockGlyph) -> Self {
        self.glyphs.insert(MISSING_GLYPH, glyph);
        self
    }

    pub fn kern(mut self, left: GlyphId, right: GlyphId, delta: F26Dot6) -> Self {
        self.kerning
            .get_or_insert_with(HashMap::new)
            .insert((left, right), delta);
        self
    }

    pub fn broken_glyph(mut self, id: GlyphId) -> Self {
        self.broken = Some(id);
        self
    }

    pub fn kerning_calls(&self) -> usize {
        self.kerning_calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, glyph: GlyphId) -> Result<&MockGlyph> {
        if self.broken == Some(glyph) {
            return Err(GlyphSourceError::OutlineFailed(glyph).into());
        }
        self.glyphs
            .get(&glyph)
            .ok_or_else(|| GlyphSourceError::GlyphNotFound(glyph).into())
    }
}

impl GlyphSource for MockFont {
    fn vertical_metrics(&self) -> VerticalMetrics {
        self.vertical
    }

    fn has_kerning(&self) -> bool {
        self.kerning.is_some()
    }

    fn glyph_index(&self, ch: char) -> GlyphId {
        self.cmap.get(&ch).copied().unwrap_or(MISSING_GLYPH)
    }

    fn kerning(&self, left: GlyphId, right: GlyphId) -> Result<F26Dot6> {
        self.kerning_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .kerning
            .as_ref()
            .and_then(|pairs| pairs.get(&(left, right)).copied())
            .unwrap_or(F26Dot6::ZERO))
    }

    fn glyph_metrics(&self, glyph: GlyphId) -> Result<GlyphMetrics> {
        Ok(self.lookup(glyph)?.metrics)
    }

    fn rasterize(&self, glyph: GlyphId, mode: RenderMode) -> Result<RasterizedGlyph> {
        let found = self.lookup(glyph)?;
        let bitmap = match mode {
            RenderMode::AntiAliased => found.coverage.clone(),
            RenderMode::Mono => found.mono.clone(),
        };
        Ok(RasterizedGlyph {
            metrics: found.metrics,
            bitmap,
        })
    }

    fn info(&self) -> FontInfo {
        FontInfo {
            family: Some("Mock".to_string()),
            style: Some("Regular".to_string()),
            ascent: self.vertical.ascender_pixels(),
            descent: -self.vertical.descender.pixel(),
            glyph_count: self.glyphs.len() as u32,
            has_kerning: self.has_kerning(),
        }
    }
}
