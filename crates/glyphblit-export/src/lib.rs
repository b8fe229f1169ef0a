//! Encoders that turn a rendered [`GraySurface`] into file bytes
//!
//! Surfaces hold coverage, so 0 is background and 255 is full ink. PGM and
//! PNG keep those values as gray levels; PBM thresholds them into bits.

use std::io::Write;
use std::path::Path;

use glyphblit_core::{
    error::{ExportError, Result},
    GraySurface,
};

pub mod png;

pub use png::PngExporter;

/// Coverage at or above this is written as a set PBM bit
pub const PBM_THRESHOLD: u8 = 128;

/// Serializes a surface into one file format
pub trait Exporter {
    fn name(&self) -> &'static str;

    fn export(&self, surface: &GraySurface) -> Result<Vec<u8>>;

    /// File extension without the dot
    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}

/// Pick an exporter from a file name's extension (case-insensitive)
pub fn exporter_for_path(path: impl AsRef<Path>) -> Result<Box<dyn Exporter>> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "pgm" => Ok(Box::new(PnmExporter::pgm())),
        "pbm" => Ok(Box::new(PnmExporter::pbm())),
        "png" => Ok(Box::new(PngExporter::new())),
        other => Err(ExportError::FormatNotSupported(format!(
            "unknown output extension '{}' (expected pgm, pbm or png)",
            other
        ))
        .into()),
    }
}

/// Netpbm exporter writing the plain (ASCII) variants
#[derive(Debug, Clone, Copy)]
pub struct PnmExporter {
    format: PnmFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnmFormat {
    /// `P1`, one bit per pixel with 1 = ink
    Pbm,
    /// `P2`, gray levels 0..=255
    Pgm,
}

impl PnmExporter {
    pub fn new(format: PnmFormat) -> Self {
        Self { format }
    }

    pub fn pgm() -> Self {
        Self::new(PnmFormat::Pgm)
    }

    pub fn pbm() -> Self {
        Self::new(PnmFormat::Pbm)
    }

    pub fn format(&self) -> PnmFormat {
        self.format
    }
}

impl Exporter for PnmExporter {
    fn name(&self) -> &'static str {
        self.extension()
    }

    fn export(&self, surface: &GraySurface) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        let (width, height) = (surface.width(), surface.height());

        match self.format {
            PnmFormat::Pgm => {
                writeln!(&mut output, "P2")?;
                writeln!(&mut output, "{} {}", width, height)?;
                writeln!(&mut output, "255")?;
                for y in 0..height {
                    for value in surface.row(y) {
                        write!(&mut output, "{} ", value)?;
                    }
                    writeln!(&mut output)?;
                }
            },
            PnmFormat::Pbm => {
                writeln!(&mut output, "P1")?;
                writeln!(&mut output, "{} {}", width, height)?;
                for y in 0..height {
                    for &value in surface.row(y) {
                        let bit = u8::from(value >= PBM_THRESHOLD);
                        write!(&mut output, "{} ", bit)?;
                    }
                    writeln!(&mut output)?;
                }
            },
        }

        log::debug!("Encoded {}x{} surface as {}", width, height, self.name());
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        match self.format {
            PnmFormat::Pbm => "pbm",
            PnmFormat::Pgm => "pgm",
        }
    }

    fn mime_type(&self) -> &'static str {
        match self.format {
            PnmFormat::Pbm => "image/x-portable-bitmap",
            PnmFormat::Pgm => "image/x-portable-graymap",
        }
    }
}

impl Default for PnmExporter {
    fn default() -> Self {
        Self::pgm()
    }
}
