//! `glyphblit measure`

use anyhow::Result;
use glyphblit::{glyph_abc, measure, types::GlyphAbc};
use serde::Serialize;

use crate::cli::MeasureArgs;

#[derive(Debug, Serialize)]
struct MeasureReport {
    width: i32,
    height: i32,
    x_offset: i32,
    y_offset: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    abc: Option<AbcReport>,
}

#[derive(Debug, Serialize)]
struct AbcReport {
    a: f64,
    b: f64,
    c: f64,
}

impl From<GlyphAbc> for AbcReport {
    fn from(abc: GlyphAbc) -> Self {
        Self {
            a: abc.a,
            b: abc.b,
            c: abc.c,
        }
    }
}

pub fn run(args: &MeasureArgs) -> Result<()> {
    let font = super::load_font(&args.font)?;
    let text = super::read_text(&args.text)?;

    let bbox = measure(&font, &text)?;
    let abc = if args.abc {
        Some(glyph_abc(&font, &text)?.into())
    } else {
        None
    };
    let report = MeasureReport {
        width: bbox.width,
        height: bbox.height,
        x_offset: bbox.x_offset,
        y_offset: bbox.y_offset,
        abc,
    };

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!(
        "{} {} {} {}",
        report.width, report.height, report.x_offset, report.y_offset
    );
    if let Some(abc) = &report.abc {
        println!("abc {} {} {}", abc.a, abc.b, abc.c);
    }
    Ok(())
}
