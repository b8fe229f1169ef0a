//! Glyphblit: measure text and composite glyphs into 8-bit buffers
//!
//! Two passes share one pen-and-kerning walk:
//!
//! 1. [`measure`] accumulates advances in 26.6 and returns a tight
//!    [`BoundingBox`](types::BoundingBox)
//! 2. [`render`] rasterizes each glyph and blends it into a
//!    [`Surface`](glyphblit_core::Surface), either anti-aliased or as a
//!    1-bit mask
//!
//! Any font engine implementing [`GlyphSource`](glyphblit_core::GlyphSource)
//! can drive them.
//!
//! ```rust,no_run
//! use glyphblit::{measure, render, GraySurface, RenderMode};
//! # fn load_font() -> Box<dyn glyphblit::GlyphSource> { unimplemented!() }
//!
//! let font = load_font();
//! let bbox = measure(font.as_ref(), "Hello")?;
//! let mut surface = GraySurface::new(bbox.width as u32, bbox.height as u32)?;
//! render(font.as_ref(), "Hello", &mut surface, RenderMode::AntiAliased)?;
//! # Ok::<(), glyphblit::BlitError>(())
//! ```

pub mod composite;
pub mod layout;

#[cfg(test)]
mod mock;

pub use composite::{render, render_chars_at, render_mask, CompositingTarget};
pub use glyphblit_core::{
    error, fixed, traits, types, BlitError, EngineConfig, F26Dot6, GlyphSource, GraySurface,
    Result, Surface,
};
pub use layout::{decode_text, glyph_abc, measure, measure_chars, PenState};
pub use types::RenderMode;

/// Measure `text`, allocate a zeroed surface of that size and render into it
///
/// The pen starts at the measured left overhang, so whole pixels of ink left
/// of the origin stay inside the surface; the partial pixel of a fractional
/// overhang is clipped. The surface is at least 1x1. Nothing is
/// returned on failure, which makes this the atomic way to render.
pub fn rasterize_text<S: GlyphSource + ?Sized>(
    font: &S,
    text: &str,
    mode: RenderMode,
) -> Result<GraySurface> {
    let bbox = measure(font, text)?;
    let width = bbox.width.max(1) as u32;
    let height = bbox.height.max(1) as u32;
    let mut surface = GraySurface::new(width, height)?;
    render_chars_at(font, text.chars(), &mut surface, mode, bbox.x_offset)?;
    Ok(surface)
}
