//! Subcommand implementations and the helpers they share

pub mod info;
pub mod measure;
pub mod render;

use anyhow::{bail, Context, Result};
use glyphblit::{decode_text, EngineConfig};
use glyphblit_skrifa::{FontEngine, SkrifaFont};

use crate::cli::{FontArgs, TextArgs};

/// Load the requested face with environment defaults and flag overrides
pub fn load_font(args: &FontArgs) -> Result<SkrifaFont> {
    let mut config = EngineConfig::from_env();
    if let Some(capacity) = args.glyph_cache {
        config = config.with_glyph_cache_capacity(capacity);
    }
    let engine = FontEngine::with_config(config);

    let font = engine
        .load_font_file_index(&args.font_file, args.face_index, args.size)
        .with_context(|| format!("Failed to load {}", args.font_file.display()))?;
    Ok(font)
}

/// The text argument, or the contents of `--text-file` decoded as UTF-8
pub fn read_text(args: &TextArgs) -> Result<String> {
    if let Some(path) = &args.text_file {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read text file {}", path.display()))?;
        let text = decode_text(&bytes)
            .with_context(|| format!("Text file {} is not UTF-8", path.display()))?;
        return Ok(text.trim_end_matches(|c| c == '\r' || c == '\n').to_string());
    }
    match &args.text {
        Some(text) => Ok(text.clone()),
        None => bail!("no text given: pass TEXT or --text-file"),
    }
}
