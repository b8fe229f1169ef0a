//! Layout accumulator: measuring a run of text
//!
//! Walks characters left to right, resolving each to a glyph, applying
//! pairwise kerning, and accumulating the pen position in 26.6. The result
//! is a tight box: a left overhang on the first glyph and a right overhang
//! on the last glyph both widen it.

use glyphblit_core::{
    error::{BlitError, Result},
    traits::GlyphSource,
    types::{BoundingBox, GlyphAbc, GlyphId, MISSING_GLYPH},
    F26Dot6,
};

/// Pen position and kerning context for one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenState {
    pub x: F26Dot6,
    /// `None` until the first glyph has been placed
    pub last_glyph: Option<GlyphId>,
}

impl PenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `ch` and return its glyph index with the kerning delta
    /// against the previous glyph.
    ///
    /// Kerning is strictly pairwise. It is zero on the first glyph, when
    /// `kerning` is off, or when either glyph of the pair is missing.
    /// The pen itself is not moved; measurement and rendering apply the
    /// delta differently.
    pub fn next_glyph<S: GlyphSource + ?Sized>(
        &mut self,
        font: &S,
        kerning: bool,
        ch: char,
    ) -> Result<(GlyphId, F26Dot6)> {
        let glyph = font.glyph_index(ch);
        let delta = match self.last_glyph {
            Some(last) if kerning && last != MISSING_GLYPH && glyph != MISSING_GLYPH => {
                font.kerning(last, glyph)?
            },
            _ => F26Dot6::ZERO,
        };
        self.last_glyph = Some(glyph);
        Ok((glyph, delta))
    }
}

/// Measure `text`
///
/// See [`measure_chars`].
pub fn measure<S: GlyphSource + ?Sized>(font: &S, text: &str) -> Result<BoundingBox> {
    measure_chars(font, text.chars())
}

/// Measure a sequence of characters
///
/// The width accumulates advances and kerning in 26.6 and rounds up once at
/// the end. A negative left bearing on the first glyph is added to the width
/// and its magnitude, `-PIXEL(bearing)`, is reported as `x_offset`; a
/// negative right overflow on the last glyph is added to the width. The height comes from the font's ascender and
/// descender alone, so an empty sequence still has the line height.
pub fn measure_chars<S, I>(font: &S, chars: I) -> Result<BoundingBox>
where
    S: GlyphSource + ?Sized,
    I: IntoIterator<Item = char>,
{
    let vertical = font.vertical_metrics();
    let kerning = font.has_kerning();

    let mut pen = PenState::new();
    let mut first_bearing = None;
    let mut last_metrics = None;
    let mut count = 0usize;

    for ch in chars {
        let (glyph, delta) = pen.next_glyph(font, kerning, ch)?;
        pen.x += delta;

        let metrics = font.glyph_metrics(glyph)?;
        if first_bearing.is_none() {
            first_bearing = Some(metrics.bearing_x);
        }
        pen.x += metrics.advance;
        last_metrics = Some(metrics);
        count += 1;
    }

    let mut x = pen.x;
    let mut x_offset = 0;

    if let Some(bearing) = first_bearing.filter(|b| b.is_negative()) {
        x -= bearing;
        // Round-up of a negative value: -1.5px reports an overhang of 1
        x_offset = -bearing.pixel();
    }

    if let Some(overflow) = last_metrics
        .map(|m| m.right_overflow())
        .filter(|o| o.is_negative())
    {
        x -= overflow;
    }

    let bbox = BoundingBox {
        width: x.pixel(),
        height: vertical.height_pixels(),
        x_offset,
        y_offset: 0,
    };
    log::trace!("measured {} glyphs: {:?}", count, bbox);
    Ok(bbox)
}

/// ABC widths of the first character of `text`
///
/// `a` is the left bearing, `b` the ink width and `c` the space left after
/// the ink, all in fractional pixels. Empty text yields zeros.
pub fn glyph_abc<S: GlyphSource + ?Sized>(font: &S, text: &str) -> Result<GlyphAbc> {
    let Some(ch) = text.chars().next() else {
        return Ok(GlyphAbc::default());
    };

    let metrics = font.glyph_metrics(font.glyph_index(ch))?;
    Ok(GlyphAbc {
        a: to_pixels(metrics.bearing_x),
        b: to_pixels(metrics.width),
        c: to_pixels(metrics.right_overflow()),
    })
}

fn to_pixels(v: F26Dot6) -> f64 {
    v.raw() as f64 / 64.0
}

/// Decode caller-supplied bytes as text
///
/// Layout only accepts text; anything that is not valid UTF-8 is rejected
/// before a glyph is looked up.
pub fn decode_text(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes)
        .map_err(|e| BlitError::InvalidInput(format!("expected UTF-8 text: {}", e)))
}
