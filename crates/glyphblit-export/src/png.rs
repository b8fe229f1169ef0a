//! PNG export through the `image` crate

use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ExtendedColorType, ImageEncoder,
};

use glyphblit_core::{
    error::{ExportError, Result},
    GraySurface,
};

use crate::Exporter;

/// 8-bit grayscale PNG, one sample per surface pixel
#[derive(Debug, Clone, Copy, Default)]
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, surface: &GraySurface) -> Result<Vec<u8>> {
        let mut png_data = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut png_data, CompressionType::Default, FilterType::Sub);
        encoder
            .write_image(
                surface.pixels(),
                surface.width(),
                surface.height(),
                ExtendedColorType::L8,
            )
            .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

        log::debug!(
            "Encoded {}x{} surface as PNG ({} bytes)",
            surface.width(),
            surface.height(),
            png_data.len()
        );
        Ok(png_data)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_png_signature_and_header() {
        let surface = GraySurface::from_pixels(3, 2, vec![0, 128, 255, 255, 128, 0]).unwrap();
        let bytes = PngExporter::new().export(&surface).unwrap();

        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        assert_eq!(&bytes[12..16], b"IHDR");
        assert_eq!(u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]), 3);
        assert_eq!(u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]), 2);
        // Bit depth 8, color type 0 (grayscale)
        assert_eq!((bytes[24], bytes[25]), (8, 0));
    }

    #[test]
    fn test_png_metadata() {
        let exporter = PngExporter::new();
        assert_eq!(exporter.extension(), "png");
        assert_eq!(exporter.mime_type(), "image/png");
    }
}
