//! `glyphblit info`

use anyhow::Result;
use glyphblit::GlyphSource;
use serde::Serialize;

use crate::cli::InfoArgs;

#[derive(Debug, Serialize)]
struct InfoReport {
    family: Option<String>,
    style: Option<String>,
    size: f32,
    ascent: i32,
    descent: i32,
    glyph_count: u32,
    has_kerning: bool,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let font = super::load_font(&args.font)?;
    let info = font.info();
    let report = InfoReport {
        family: info.family,
        style: info.style,
        size: font.size(),
        ascent: info.ascent,
        descent: info.descent,
        glyph_count: info.glyph_count,
        has_kerning: info.has_kerning,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Family:      {}", report.family.as_deref().unwrap_or("-"));
    println!("Style:       {}", report.style.as_deref().unwrap_or("-"));
    println!("Size:        {}px", report.size);
    println!("Ascent:      {}", report.ascent);
    println!("Descent:     {}", report.descent);
    println!("Glyphs:      {}", report.glyph_count);
    println!("Kerning:     {}", if report.has_kerning { "yes" } else { "no" });
    Ok(())
}
