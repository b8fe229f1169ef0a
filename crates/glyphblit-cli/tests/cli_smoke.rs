//! CLI smoke tests
//!
//! Runs the `glyphblit` binary for each subcommand against a font assembled
//! in memory, plus the failure paths (missing font, bad extension, bad text).

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use glyphblit_testfont::test_font;

fn glyphblit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_glyphblit"))
}

/// A fresh path in the temp dir
fn temp_path(name: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("glyphblit_test_{}_{}_{}", std::process::id(), id, name))
}

fn font_file() -> PathBuf {
    let path = temp_path("font.ttf");
    fs::write(&path, test_font(true)).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    glyphblit().args(args).output().expect("failed to run glyphblit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["info", "measure", "render"] {
        assert!(text.contains(command), "help should list {command}");
    }
}

#[test]
fn test_render_help() {
    let output = run(&["render", "--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("--mono"));
}

#[test]
fn test_missing_font_file() {
    let output = run(&["measure", "--font-file", "/nonexistent/font.ttf", "Hello"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Font file not found"));
}

#[test]
fn test_directory_as_font_is_not_reported_missing() {
    let dir = std::env::temp_dir();
    let output = run(&["info", "--font-file", dir.to_str().unwrap()]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("IO error"), "{err}");
    assert!(!err.contains("Font file not found"), "{err}");
}

#[test]
fn test_invalid_font_data() {
    let path = temp_path("garbage.ttf");
    fs::write(&path, b"not a font").unwrap();
    let output = run(&["info", "--font-file", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid font data"));
    let _ = fs::remove_file(path);
}

#[test]
fn test_info() {
    let font = font_file();
    let output = run(&["info", "--font-file", font.to_str().unwrap(), "--size", "10"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Glyphs:      3"));
    assert!(text.contains("Kerning:     yes"));

    let output = run(&["info", "-f", font.to_str().unwrap(), "-s", "10", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ascent"], 8);
    assert_eq!(json["descent"], 2);
    let _ = fs::remove_file(font);
}

#[test]
fn test_measure() {
    let font = font_file();
    let font = font.to_str().unwrap();
    let output = run(&["measure", "-f", font, "-s", "10", "AV"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "13 10 0 0");

    let output = run(&["measure", "-f", font, "-s", "10", "--json", "--abc", "A"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["width"], 7);
    assert_eq!(json["abc"]["b"], 5.0);
}

#[test]
fn test_measure_text_file_must_be_utf8() {
    let font = font_file();
    let text = temp_path("text.txt");
    fs::write(&text, [0x41, 0xff, 0xfe]).unwrap();
    let output = run(&[
        "measure",
        "-f",
        font.to_str().unwrap(),
        "--text-file",
        text.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not UTF-8"));

    fs::write(&text, "AV\n").unwrap();
    let output = run(&[
        "measure",
        "-f",
        font.to_str().unwrap(),
        "-s",
        "10",
        "-T",
        text.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "13 10 0 0");
}

#[test]
fn test_render_pgm_and_png() {
    let font = font_file();
    let font = font.to_str().unwrap();

    let pgm = temp_path("out.pgm");
    let output = run(&["render", "-f", font, "-s", "10", "-o", pgm.to_str().unwrap(), "AV"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = fs::read_to_string(&pgm).unwrap();
    assert!(text.starts_with("P2\n13 10\n255\n"));

    let png = temp_path("out.png");
    let output = run(&["render", "-f", font, "-s", "10", "-o", png.to_str().unwrap(), "AV"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(&fs::read(&png).unwrap()[1..4], b"PNG");
}

#[test]
fn test_render_mono_pbm() {
    let font = font_file();
    let pbm = temp_path("out.pbm");
    let output = run(&[
        "render",
        "-f",
        font.to_str().unwrap(),
        "-s",
        "10",
        "--mono",
        "-o",
        pbm.to_str().unwrap(),
        "A",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = fs::read_to_string(&pbm).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P1"));
    assert_eq!(lines.next(), Some("7 10"));
    // Row 0 is above the ink, row 1 starts the 5px wide square
    assert_eq!(lines.next(), Some("0 0 0 0 0 0 0 "));
    assert_eq!(lines.next(), Some("0 1 1 1 1 1 0 "));
}

#[test]
fn test_render_rejects_unknown_extension() {
    let font = font_file();
    let out = temp_path("out.bmp");
    let output = run(&["render", "-f", font.to_str().unwrap(), "-o", out.to_str().unwrap(), "A"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Format not supported"));
    assert!(!out.exists());
}
