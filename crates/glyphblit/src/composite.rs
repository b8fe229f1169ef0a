//! Glyph compositor: blending glyph bitmaps into a surface
//!
//! Rendering repeats the layout walk, but asks the glyph source for a
//! bitmap as well as metrics and keeps the pen in whole pixels: kerning is
//! floored to a pixel and each glyph advances by its own rounded-up
//! advance. Two blend rules are supported:
//!
//! - **anti-aliased**: `dst = max(dst, coverage)`, so overlapping glyphs
//!   never darken each other
//! - **mono**: set bits stamp 255, clear bits leave the pixel untouched
//!
//! Every glyph is clipped against the surface before any pixel is touched.

use glyphblit_core::{
    error::{GlyphSourceError, Result},
    traits::{GlyphSource, Surface},
    types::{BitmapFormat, GlyphBitmap, RasterizedGlyph, RenderMode},
    F26Dot6,
};

use crate::layout::PenState;

/// Value written for a set bit in mono mode
const MASK_OPAQUE: u8 = 255;

/// A surface borrowed for the duration of one render call
///
/// `xsize` and `ysize` are captured once and bound every write.
pub struct CompositingTarget<'a, T: Surface + ?Sized> {
    surface: &'a mut T,
    xsize: i32,
    ysize: i32,
}

impl<'a, T: Surface + ?Sized> CompositingTarget<'a, T> {
    pub fn new(surface: &'a mut T) -> Self {
        let xsize = clamp_dim(surface.width());
        let ysize = clamp_dim(surface.height());
        Self {
            surface,
            xsize,
            ysize,
        }
    }

    pub fn xsize(&self) -> i32 {
        self.xsize
    }

    pub fn ysize(&self) -> i32 {
        self.ysize
    }

    /// Blend `bitmap` with its top-left corner at `(xx, yy)`
    ///
    /// Parts outside the surface are skipped; a glyph entirely outside is a
    /// no-op. The blend rule follows the bitmap's format.
    pub fn composite(&mut self, bitmap: &GlyphBitmap, xx: i32, yy: i32) -> Result<()> {
        if bitmap.is_empty() {
            return Ok(());
        }
        check_bitmap(bitmap)?;

        let width = clamp_dim(bitmap.width);
        let x0 = xx.saturating_neg().max(0);
        let x1 = width.min(self.xsize.saturating_sub(xx));
        if x1 <= x0 {
            log::trace!("glyph at x={} clipped horizontally", xx);
            return Ok(());
        }

        let rows = clamp_dim(bitmap.rows);
        let y0 = yy.saturating_neg().max(0);
        let y1 = rows.min(self.ysize.saturating_sub(yy));
        if y1 <= y0 {
            log::trace!("glyph at y={} clipped vertically", yy);
            return Ok(());
        }

        for row in y0..y1 {
            let Some(source) = bitmap.row(row as u32) else {
                break;
            };
            let target = self.surface.row_mut((row + yy) as u32);
            match bitmap.format {
                BitmapFormat::Gray8 => blend_coverage(source, target, xx, x0, x1),
                BitmapFormat::Mono => stamp_mono(source, target, xx, x0, x1),
            }
        }
        Ok(())
    }
}

fn clamp_dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Reject bitmaps whose buffer cannot hold `rows` rows at `pitch`
fn check_bitmap(bitmap: &GlyphBitmap) -> Result<()> {
    let min_pitch = bitmap.format.min_pitch(bitmap.width);
    let needed = (bitmap.rows as usize - 1)
        .checked_mul(bitmap.pitch)
        .and_then(|n| n.checked_add(min_pitch));
    match needed {
        Some(needed) if bitmap.pitch >= min_pitch && bitmap.buffer.len() >= needed => Ok(()),
        _ => Err(GlyphSourceError::Backend(format!(
            "malformed {:?} bitmap: {}x{} pitch {} in {} bytes",
            bitmap.format,
            bitmap.width,
            bitmap.rows,
            bitmap.pitch,
            bitmap.buffer.len()
        ))
        .into()),
    }
}

/// `dst = max(dst, src)` over columns `x0..x1` of the glyph
fn blend_coverage(source: &[u8], target: &mut [u8], xx: i32, x0: i32, x1: i32) {
    let src = &source[x0 as usize..x1 as usize];
    let dst = &mut target[(xx + x0) as usize..(xx + x1) as usize];
    for (d, &s) in dst.iter_mut().zip(src) {
        if *d < s {
            *d = s;
        }
    }
}

/// Stamp set bits of an MSB-first packed row over columns `x0..x1`
fn stamp_mono(source: &[u8], target: &mut [u8], xx: i32, x0: i32, x1: i32) {
    for j in x0..x1 {
        let j = j as usize;
        if source[j >> 3] & (0x80 >> (j & 7)) != 0 {
            target[xx as usize + j] = MASK_OPAQUE;
        }
    }
}

/// Render `text` into `surface`, starting with the pen at x = 0
///
/// Glyphs hang from the baseline at `PIXEL(ascender)` below the top row.
/// A glyph source failure stops rendering; glyphs already blended stay in
/// the surface.
pub fn render<S, T>(font: &S, text: &str, surface: &mut T, mode: RenderMode) -> Result<()>
where
    S: GlyphSource + ?Sized,
    T: Surface + ?Sized,
{
    render_chars_at(font, text.chars(), surface, mode, 0)
}

/// [`render`] with the mode given as a mask flag: `true` selects mono
pub fn render_mask<S, T>(font: &S, text: &str, surface: &mut T, mask: bool) -> Result<()>
where
    S: GlyphSource + ?Sized,
    T: Surface + ?Sized,
{
    render(font, text, surface, RenderMode::from_mask(mask))
}

/// Render a character sequence with the pen starting at `origin_x` pixels
pub fn render_chars_at<S, T, I>(
    font: &S,
    chars: I,
    surface: &mut T,
    mode: RenderMode,
    origin_x: i32,
) -> Result<()>
where
    S: GlyphSource + ?Sized,
    T: Surface + ?Sized,
    I: IntoIterator<Item = char>,
{
    let ascender = font.vertical_metrics().ascender_pixels();
    let kerning = font.has_kerning();
    let mut target = CompositingTarget::new(surface);

    let mut pen = PenState {
        x: F26Dot6::from_int(origin_x),
        last_glyph: None,
    };
    let mut count = 0usize;

    for ch in chars {
        let (glyph, delta) = pen.next_glyph(font, kerning, ch)?;
        pen.x += F26Dot6::from_int(delta.to_int());

        let RasterizedGlyph { metrics, bitmap } = font.rasterize(glyph, mode)?;
        let xx = pen.x.to_int() + metrics.bitmap_left;
        let yy = ascender - metrics.bitmap_top;
        target.composite(&bitmap, xx, yy)?;

        pen.x += F26Dot6::from_int(metrics.advance.pixel());
        count += 1;
    }

    log::debug!(
        "rendered {} glyphs ({:?}) into {}x{}",
        count,
        mode,
        target.xsize(),
        target.ysize()
    );
    Ok(())
}
