//! Owned grayscale pixel buffer

use crate::error::{Result, SurfaceError};
use crate::traits::Surface;

/// Row-major single-channel 8-bit image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraySurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GraySurface {
    /// A zero-filled surface
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// A surface with every pixel set to `value`
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![value; len],
        })
    }

    /// Wraps existing pixel data, which must be exactly `width * height` bytes
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(SurfaceError::BufferSize {
                expected,
                actual: pixels.len(),
            }
            .into());
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn byte_len(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| SurfaceError::InvalidDimensions { width, height }.into())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

impl Surface for GraySurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.width as usize;
        &mut self.pixels[start..start + self.width as usize]
    }
}
