//! Command-line argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Glyphblit - measure and render lines of text with a TrueType/OpenType font
#[derive(Parser, Debug)]
#[command(name = "glyphblit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still applies)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display face attributes of a font
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Print the bounding box of a line of text
    #[command(alias = "m")]
    Measure(MeasureArgs),

    /// Render a line of text to a PGM, PBM or PNG file
    #[command(alias = "r")]
    Render(RenderArgs),
}

/// Which font to load and how
#[derive(Args, Debug)]
pub struct FontArgs {
    /// Font file path (.ttf, .otf, .ttc)
    #[arg(short = 'f', long = "font-file")]
    pub font_file: PathBuf,

    /// Pixel size (pixels per em)
    #[arg(short = 's', long = "size", default_value_t = 16.0)]
    pub size: f32,

    /// Face index within a collection
    #[arg(short = 'y', long = "face-index", default_value_t = 0)]
    pub face_index: u32,

    /// Rasterized glyphs to cache; 0 disables (default from GLYPHBLIT_GLYPH_CACHE)
    #[arg(long = "glyph-cache")]
    pub glyph_cache: Option<usize>,
}

/// Where the text comes from
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to lay out
    #[arg(conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the text from a UTF-8 file instead
    #[arg(short = 'T', long = "text-file")]
    pub text_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub font: FontArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct MeasureArgs {
    #[command(flatten)]
    pub font: FontArgs,

    #[command(flatten)]
    pub text: TextArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Also report ABC widths of the first character
    #[arg(long)]
    pub abc: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub font: FontArgs,

    #[command(flatten)]
    pub text: TextArgs,

    /// Output file; the format follows the extension (pgm, pbm, png)
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Render a 1-bit mask instead of anti-aliased coverage
    #[arg(long)]
    pub mono: bool,
}
