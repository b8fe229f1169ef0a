//! `glyphblit render`

use anyhow::{Context, Result};
use glyphblit::{rasterize_text, RenderMode};
use glyphblit_export::exporter_for_path;

use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs) -> Result<()> {
    // Reject an unknown extension before any font work
    let exporter = exporter_for_path(&args.output)?;
    let font = super::load_font(&args.font)?;
    let text = super::read_text(&args.text)?;

    let mode = RenderMode::from_mask(args.mono);
    let surface = rasterize_text(&font, &text, mode)?;
    let bytes = exporter.export(&surface)?;
    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if let Some(stats) = font.cache_stats() {
        log::debug!(
            "Glyph cache: {} entries, {:.0}% hits",
            stats.len,
            stats.hit_rate() * 100.0
        );
    }
    println!(
        "Rendered {}x{} {:?} to {} ({})",
        surface.width(),
        surface.height(),
        mode,
        args.output.display(),
        exporter.mime_type()
    );
    Ok(())
}
