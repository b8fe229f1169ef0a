//! End-to-end tests against a font assembled in memory

use glyphblit::{
    measure, rasterize_text, render, types::MISSING_GLYPH, EngineConfig, F26Dot6, GlyphSource,
    GraySurface, RenderMode,
};
use glyphblit_skrifa::{FontEngine, SkrifaFont};
use glyphblit_testfont::{test_font, KERN_AV};

fn load(with_kern: bool) -> SkrifaFont {
    load_at(with_kern, 10.0)
}

fn load_at(with_kern: bool, size: f32) -> SkrifaFont {
    FontEngine::new()
        .load_font(test_font(with_kern), size)
        .unwrap()
}

#[test]
fn test_face_info() {
    let font = load(true);
    let info = font.info();
    assert_eq!(info.family, None);
    assert_eq!(info.glyph_count, 3);
    assert_eq!((info.ascent, info.descent), (8, 2));
    assert!(info.has_kerning);

    assert!(!load(false).info().has_kerning);
}

#[test]
fn test_vertical_metrics_scale_to_size() {
    let vertical = load(false).vertical_metrics();
    assert_eq!(vertical.ascender, F26Dot6::from_int(8));
    assert_eq!(vertical.descender, F26Dot6::from_int(-2));
    assert_eq!(vertical.height_pixels(), 10);
}

#[test]
fn test_charmap() {
    let font = load(false);
    assert_eq!(font.glyph_index('A'), 1);
    assert_eq!(font.glyph_index('V'), 2);
    assert_eq!(font.glyph_index('z'), MISSING_GLYPH);
}

#[test]
fn test_glyph_metrics() {
    let font = load(false);
    let metrics = font.glyph_metrics(1).unwrap();
    assert_eq!(metrics.advance, F26Dot6::from_int(7));
    assert_eq!(metrics.bearing_x, F26Dot6::from_int(1));
    assert_eq!(metrics.width, F26Dot6::from_int(5));
    assert_eq!(metrics.height, F26Dot6::from_int(7));
    assert_eq!((metrics.bitmap_left, metrics.bitmap_top), (1, 7));

    let notdef = font.glyph_metrics(0).unwrap();
    assert_eq!(notdef.advance, F26Dot6::from_int(5));
    assert_eq!(notdef.width, F26Dot6::ZERO);

    assert!(font.glyph_metrics(3).is_err());
}

#[test]
fn test_kerning_scaled_from_font_units() {
    let font = load(true);
    assert_eq!(font.kern_table().get(1, 2), Some(KERN_AV));
    assert_eq!(font.kerning(1, 2).unwrap(), F26Dot6::from_int(-1));
    assert_eq!(font.kerning(2, 1).unwrap(), F26Dot6::ZERO);
}

#[test]
fn test_kerning_is_grid_fitted_at_fractional_sizes() {
    // -250 units at 13px is -3.25px; attenuated by 13/25 and rounded: -2px
    let font = load_at(true, 13.0);
    assert_eq!(font.kerning(1, 2).unwrap(), F26Dot6::from_int(-2));
    // No attenuation from 25px: -7.5px rounds to -7px
    assert_eq!(load_at(true, 30.0).kerning(1, 2).unwrap(), F26Dot6::from_int(-7));
}

#[test]
fn test_fractional_size_measure_and_render_use_fitted_kerning() {
    let kerned = load_at(true, 13.0);
    let plain = load_at(false, 13.0);
    // Advances are 9.1px: 2 * 582 - 128 = 1036 -> 17, unkerned 1164 -> 19
    assert_eq!(measure(&kerned, "AV").unwrap().width, 17);
    assert_eq!(measure(&plain, "AV").unwrap().width, 19);

    // 'V' lands exactly two columns further left than without kerning
    let with = rasterize_text(&kerned, "AV", RenderMode::AntiAliased).unwrap();
    let without = rasterize_text(&plain, "AV", RenderMode::AntiAliased).unwrap();
    assert_eq!(with.height(), without.height());
    for y in 0..with.height() {
        for x in 9..with.width() {
            assert_eq!(with.pixel(x, y), without.pixel(x + 2, y), "({x}, {y})");
        }
    }
    assert!((0..with.height()).any(|y| with.pixel(12, y) == Some(255)));
}

#[test]
fn test_measure_with_and_without_kerning() {
    assert_eq!(measure(&load(true), "AV").unwrap().as_tuple(), (13, 10, 0, 0));
    assert_eq!(measure(&load(false), "AV").unwrap().as_tuple(), (14, 10, 0, 0));
    // Unmapped characters use glyph 0 and still advance
    assert_eq!(measure(&load(true), "AzV").unwrap().width, 19);
}

#[test]
fn test_render_places_glyphs_on_baseline() {
    let font = load(true);
    let mut surface = GraySurface::new(13, 10).unwrap();
    render(&font, "AV", &mut surface, RenderMode::AntiAliased).unwrap();

    // 'A' covers columns 1..6, 'V' is pulled left by the kern to 7..12;
    // both span rows 1..8 under an 8px ascender
    assert_eq!(surface.pixel(3, 4), Some(255));
    assert_eq!(surface.pixel(9, 4), Some(255));
    assert_eq!(surface.pixel(0, 4), Some(0));
    assert_eq!(surface.pixel(6, 4), Some(0));
    assert_eq!(surface.pixel(12, 4), Some(0));
    assert_eq!(surface.pixel(3, 0), Some(0));
    assert_eq!(surface.pixel(3, 9), Some(0));
}

#[test]
fn test_mono_render_is_binary() {
    let surface = rasterize_text(&load(true), "AV", RenderMode::Mono).unwrap();
    assert_eq!((surface.width(), surface.height()), (13, 10));
    assert!(surface.pixels().iter().all(|&v| v == 0 || v == 255));
    assert_eq!(surface.pixel(3, 4), Some(255));
    assert_eq!(surface.pixel(6, 4), Some(0));
}

#[test]
fn test_glyph_cache_serves_repeats() {
    let font = load(false);
    rasterize_text(&font, "AAAA", RenderMode::AntiAliased).unwrap();
    let stats = font.cache_stats().unwrap();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.len, 1);
}

#[test]
fn test_disabled_cache() {
    let engine = FontEngine::with_config(EngineConfig::default().with_glyph_cache_capacity(0));
    let font = engine.load_font(test_font(false), 10.0).unwrap();
    rasterize_text(&font, "AA", RenderMode::Mono).unwrap();
    assert!(font.cache_stats().is_none());
}

#[test]
fn test_face_index_out_of_range() {
    let err = FontEngine::new()
        .load_font_index(test_font(false), 3, 10.0)
        .unwrap_err();
    assert!(err.to_string().contains("Invalid font data"));
}
