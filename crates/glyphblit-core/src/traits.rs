//! The two seams of the engine
//!
//! - [`GlyphSource`] - a loaded font at a fixed pixel size
//! - [`Surface`] - a row-addressable 8-bit pixel buffer
//!
//! Layout and compositing only ever talk to fonts and pixels through these
//! traits, so any font engine or image type can sit behind them.

use crate::{error::Result, fixed::F26Dot6, types::*};

/// A loaded font at a fixed pixel size
///
/// Implementations own font parsing, charmap lookup, kerning tables and
/// rasterization. They are read-only for the duration of a layout or render
/// call; any caching is internal to the implementation.
///
/// ```ignore
/// struct MyFont;
///
/// impl GlyphSource for MyFont {
///     fn vertical_metrics(&self) -> VerticalMetrics {
///         VerticalMetrics::new(F26Dot6::from_int(12), F26Dot6::from_int(-4))
///     }
///
///     fn glyph_index(&self, ch: char) -> GlyphId {
///         if ch.is_ascii() { ch as u32 } else { 0 }
///     }
///     // ...
/// }
/// ```
pub trait GlyphSource: Send + Sync {
    /// Ascender and descender in 26.6, queried once per call
    fn vertical_metrics(&self) -> VerticalMetrics;

    /// Whether the font carries pairwise kerning data
    fn has_kerning(&self) -> bool {
        false
    }

    /// Resolve a character to a glyph index
    ///
    /// Returns [`MISSING_GLYPH`] when the charmap has no entry. Index 0 is a
    /// real glyph for advance purposes, it only disables kerning.
    fn glyph_index(&self, ch: char) -> GlyphId;

    /// Horizontal kerning adjustment for an ordered glyph pair
    ///
    /// Only called when both indices are non-zero and
    /// [`has_kerning`](Self::has_kerning) is true.
    fn kerning(&self, _left: GlyphId, _right: GlyphId) -> Result<F26Dot6> {
        Ok(F26Dot6::ZERO)
    }

    /// Metrics without rasterizing the glyph
    fn glyph_metrics(&self, glyph: GlyphId) -> Result<GlyphMetrics>;

    /// Metrics plus a bitmap in the format selected by `mode`
    fn rasterize(&self, glyph: GlyphId, mode: RenderMode) -> Result<RasterizedGlyph>;

    /// Face-level attributes
    fn info(&self) -> FontInfo;
}

/// A destination for compositing: single-channel 8-bit rows
pub trait Surface {
    /// Number of pixels per row
    fn width(&self) -> u32;

    /// Number of rows
    fn height(&self) -> u32;

    /// Mutable access to row `y`, at least `width()` bytes long
    ///
    /// Callers never pass `y >= height()`.
    fn row_mut(&mut self, y: u32) -> &mut [u8];
}
