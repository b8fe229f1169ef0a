//! Outline capture and rasterization
//!
//! skrifa draws a glyph into [`OutlineBuilder`], which records the outline
//! twice: as SVG path data for zeno's rasterizer and as a kurbo path for
//! exact bounds. Coordinates are already scaled to pixels and y-up.

use glyphblit_core::types::{BitmapFormat, GlyphBitmap, RenderMode};
use kurbo::Shape;
use zeno::Mask;

/// Coverage at or above this becomes an inked bit in mono mode
pub const MONO_THRESHOLD: u8 = 128;

/// Pen that captures a drawn outline
#[derive(Default)]
pub struct OutlineBuilder {
    commands: Vec<String>,
    path: kurbo::BezPath,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> GlyphOutline {
        let bounds = if self.path.elements().is_empty() {
            None
        } else {
            Some(self.path.bounding_box()).filter(|b| {
                b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite()
            })
        };
        GlyphOutline {
            svg: self.commands.join(" "),
            bounds,
        }
    }
}

impl skrifa::outline::OutlinePen for OutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(format!("M {:.2},{:.2}", x, y));
        self.path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(format!("L {:.2},{:.2}", x, y));
        self.path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands
            .push(format!("Q {:.2},{:.2} {:.2},{:.2}", cx, cy, x, y));
        self.path.quad_to((cx as f64, cy as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(format!(
            "C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cx0, cy0, cx1, cy1, x, y
        ));
        self.path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.commands.push("Z".to_string());
        self.path.close_path();
    }
}

/// A captured outline in pixel units
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline {
    pub svg: String,
    /// Ink bounds; `None` for glyphs without contours such as a space
    pub bounds: Option<kurbo::Rect>,
}

/// Integer pixel grid covering an outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub left: i32,
    pub bottom: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelBox {
    /// Rows above the baseline to the top of the box
    pub fn top(&self) -> i32 {
        self.bottom + self.height as i32
    }
}

impl GlyphOutline {
    /// Smallest pixel grid containing the ink, `None` when there is no area
    pub fn pixel_box(&self) -> Option<PixelBox> {
        let b = self.bounds?;
        let left = b.x0.floor() as i32;
        let bottom = b.y0.floor() as i32;
        let right = b.x1.ceil() as i32;
        let top = b.y1.ceil() as i32;
        if right <= left || top <= bottom {
            return None;
        }
        Some(PixelBox {
            left,
            bottom,
            width: (right - left) as u32,
            height: (top - bottom) as u32,
        })
    }

    /// Rasterize into a top-down bitmap in the format `mode` asks for
    pub fn rasterize(&self, mode: RenderMode) -> GlyphBitmap {
        let format = BitmapFormat::from(mode);
        let Some(grid) = self.pixel_box() else {
            return GlyphBitmap::empty(format);
        };

        let (width, height) = (grid.width, grid.height);
        let mut coverage = vec![0u8; width as usize * height as usize];
        let _placement = Mask::new(self.svg.as_str())
            .size(width, height)
            .offset((-grid.left, -grid.bottom))
            .render_into(&mut coverage, None);
        flip_rows(&mut coverage, width as usize);

        match mode {
            RenderMode::AntiAliased => GlyphBitmap {
                width,
                rows: height,
                pitch: width as usize,
                format,
                buffer: coverage,
            },
            RenderMode::Mono => {
                let (pitch, buffer) = pack_mono(&coverage, width as usize);
                GlyphBitmap {
                    width,
                    rows: height,
                    pitch,
                    format,
                    buffer,
                }
            },
        }
    }
}

/// Turn y-up rows into y-down rows in place
fn flip_rows(buffer: &mut [u8], width: usize) {
    if width == 0 {
        return;
    }
    let rows = buffer.len() / width;
    for y in 0..rows / 2 {
        let (upper, lower) = buffer.split_at_mut((rows - 1 - y) * width);
        upper[y * width..(y + 1) * width].swap_with_slice(&mut lower[..width]);
    }
}

/// Threshold 8-bit coverage into MSB-first 1-bit rows
///
/// Returns the row pitch in bytes alongside the packed buffer.
pub fn pack_mono(coverage: &[u8], width: usize) -> (usize, Vec<u8>) {
    let pitch = BitmapFormat::Mono.min_pitch(width as u32);
    if width == 0 {
        return (pitch, Vec::new());
    }
    let rows = coverage.len() / width;
    let mut packed = vec![0u8; pitch * rows];
    for (y, row) in coverage.chunks_exact(width).enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if value >= MONO_THRESHOLD {
                packed[y * pitch + x / 8] |= 0x80 >> (x & 7);
            }
        }
    }
    (pitch, packed)
}
