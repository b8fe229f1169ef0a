//! Glyphblit Core: the vocabulary shared by layout, compositing and font backends
//!
//! Text reaches pixels in two passes: a layout pass walks the characters,
//! resolves glyphs and kerning, and accumulates a pen position; a compositing
//! pass repeats that walk while blending each glyph bitmap into a buffer.
//! This crate holds what both passes, and every font backend, agree on:
//!
//! - [`fixed::F26Dot6`] - 26.6 fixed point and the round-up pixel rule
//! - [`traits::GlyphSource`] - a loaded font at a fixed pixel size
//! - [`traits::Surface`] - a writable 8-bit pixel buffer
//! - [`types`] - metrics, bitmaps and measurement results
//! - [`error`] - the error taxonomy
//! - [`config::EngineConfig`] - settings for font engine contexts

pub mod config;
pub mod error;
pub mod fixed;
pub mod surface;
pub mod traits;

pub use config::EngineConfig;
pub use error::{BlitError, Result};
pub use fixed::F26Dot6;
pub use surface::GraySurface;
pub use traits::{GlyphSource, Surface};

/// Data passed between glyph sources, layout and compositing
pub mod types {
    use crate::fixed::F26Dot6;

    /// Index of a glyph within a font
    pub type GlyphId = u32;

    /// The "no glyph" index returned for unmapped characters
    pub const MISSING_GLYPH: GlyphId = 0;

    /// How glyphs are rasterized and blended
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum RenderMode {
        /// 8-bit coverage, blended with `max`
        #[default]
        AntiAliased,
        /// 1-bit packed rows, stamped as opaque mask
        Mono,
    }

    impl RenderMode {
        /// Maps the boolean "mask" flag of the render interface to a mode
        pub fn from_mask(mask: bool) -> Self {
            if mask {
                RenderMode::Mono
            } else {
                RenderMode::AntiAliased
            }
        }
    }

    /// Font-wide vertical metrics at the font's pixel size
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VerticalMetrics {
        /// Distance from baseline to top of the line box (positive)
        pub ascender: F26Dot6,
        /// Distance from baseline to bottom of the line box (usually negative)
        pub descender: F26Dot6,
    }

    impl VerticalMetrics {
        pub const fn new(ascender: F26Dot6, descender: F26Dot6) -> Self {
            Self {
                ascender,
                descender,
            }
        }

        /// Line height in whole pixels, rounded up
        pub fn height_pixels(&self) -> i32 {
            (self.ascender - self.descender).pixel()
        }

        /// Baseline offset from the top of the line box, rounded up
        pub fn ascender_pixels(&self) -> i32 {
            self.ascender.pixel()
        }
    }

    /// Per-glyph metrics
    ///
    /// Advance, bearing and extent are 26.6; the bitmap placement is in
    /// whole pixels relative to the pen position and baseline.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GlyphMetrics {
        pub advance: F26Dot6,
        pub bearing_x: F26Dot6,
        pub width: F26Dot6,
        pub height: F26Dot6,
        /// Left edge of the bitmap relative to the pen
        pub bitmap_left: i32,
        /// Top edge of the bitmap above the baseline
        pub bitmap_top: i32,
    }

    impl GlyphMetrics {
        /// Space left after the ink, negative when the glyph overhangs its advance
        pub fn right_overflow(&self) -> F26Dot6 {
            self.advance - self.width - self.bearing_x
        }
    }

    /// Pixel layout of a glyph bitmap
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum BitmapFormat {
        /// One coverage byte per pixel
        Gray8,
        /// One bit per pixel, 8 per byte, most significant bit first
        Mono,
    }

    impl BitmapFormat {
        /// Smallest row stride that can hold `width` pixels
        pub const fn min_pitch(self, width: u32) -> usize {
            match self {
                BitmapFormat::Gray8 => width as usize,
                BitmapFormat::Mono => (width as usize + 7) / 8,
            }
        }
    }

    impl From<RenderMode> for BitmapFormat {
        fn from(mode: RenderMode) -> Self {
            match mode {
                RenderMode::AntiAliased => BitmapFormat::Gray8,
                RenderMode::Mono => BitmapFormat::Mono,
            }
        }
    }

    /// A rasterized glyph image
    ///
    /// Rows are `pitch` bytes apart, which may be more than the format needs
    /// for `width` pixels.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GlyphBitmap {
        pub width: u32,
        pub rows: u32,
        pub pitch: usize,
        pub format: BitmapFormat,
        pub buffer: Vec<u8>,
    }

    impl GlyphBitmap {
        /// A zero-sized bitmap, used for blank glyphs such as spaces
        pub fn empty(format: BitmapFormat) -> Self {
            Self {
                width: 0,
                rows: 0,
                pitch: 0,
                format,
                buffer: Vec::new(),
            }
        }

        pub fn is_empty(&self) -> bool {
            self.width == 0 || self.rows == 0
        }

        /// Bytes of row `y`, or `None` if the buffer is too short
        pub fn row(&self, y: u32) -> Option<&[u8]> {
            let start = y as usize * self.pitch;
            let len = self.format.min_pitch(self.width);
            self.buffer.get(start..start + len)
        }
    }

    /// Metrics plus bitmap, as returned by a rasterizing lookup
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RasterizedGlyph {
        pub metrics: GlyphMetrics,
        pub bitmap: GlyphBitmap,
    }

    /// Result of measuring a string, in whole pixels
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BoundingBox {
        pub width: i32,
        pub height: i32,
        /// How far the first glyph overhangs the pen origin to the left
        pub x_offset: i32,
        /// Always 0: vertical offsets are not derived from glyph content
        pub y_offset: i32,
    }

    impl BoundingBox {
        /// `(width, height, x_offset, y_offset)`
        pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
            (self.width, self.height, self.x_offset, self.y_offset)
        }
    }

    /// ABC widths of a glyph in pixels: left bearing, ink width, right bearing
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct GlyphAbc {
        pub a: f64,
        pub b: f64,
        pub c: f64,
    }

    /// Face-level attributes
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct FontInfo {
        pub family: Option<String>,
        pub style: Option<String>,
        /// Pixels above the baseline, rounded up
        pub ascent: i32,
        /// Pixels below the baseline, positive downward
        pub descent: i32,
        pub glyph_count: u32,
        pub has_kerning: bool,
    }
}
