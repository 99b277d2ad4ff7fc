use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use cistercian::Manifest;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn run_cistercian(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cistercian"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("run cistercian")
}

#[test]
fn render_text_for_zero_is_a_bare_stem() {
    let dir = tempdir().unwrap();
    let output = run_cistercian(&["render", "0"], dir.path());
    assert!(output.status.success(), "process failed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines.iter().all(|line| *line == "      |      "), "{stdout}");
}

#[test]
fn render_svg_goes_to_stdout() {
    let dir = tempdir().unwrap();
    let output = run_cistercian(
        &["render", "1234", "--format", "svg", "--stroke-color", "#c00"],
        dir.path(),
    );
    assert!(output.status.success(), "process failed: {output:?}");

    let svg = String::from_utf8_lossy(&output.stdout);
    assert!(svg.contains("<svg"), "expected svg root element: {svg}");
    assert!(svg.contains(r##"stroke="#cc0000""##), "{svg}");
    assert_eq!(svg.matches("<line").count(), 5);
}

#[test]
fn rendered_png_reads_back() {
    let dir = tempdir().unwrap();
    let output = run_cistercian(
        &["render", "4723", "--format", "png", "-o", "out/glyph.png"],
        dir.path(),
    );
    assert!(output.status.success(), "process failed: {output:?}");
    assert!(dir.path().join("out/glyph.png").is_file());

    for layout in ["auto", "painted"] {
        let output = run_cistercian(&["read", "out/glyph.png", "--layout", layout], dir.path());
        assert!(output.status.success(), "process failed: {output:?}");
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "4723");
    }
}

#[test]
fn stamped_png_reads_back_at_its_scale() {
    let dir = tempdir().unwrap();
    let render = run_cistercian(
        &["render", "8159", "--format", "stamp", "--scale", "8", "-o", "s.png"],
        dir.path(),
    );
    assert!(render.status.success(), "process failed: {render:?}");

    let read = run_cistercian(
        &["read", "s.png", "--layout", "stamped", "--scale", "8"],
        dir.path(),
    );
    assert!(read.status.success(), "process failed: {read:?}");
    assert_eq!(String::from_utf8_lossy(&read.stdout).trim(), "8159");
}

#[test]
fn thick_png_reads_back_with_detected_layout() {
    let dir = tempdir().unwrap();
    for n in ["14", "4723"] {
        let render = run_cistercian(
            &["render", n, "--format", "png", "--stroke-width", "30", "-o", "thick.png"],
            dir.path(),
        );
        assert!(render.status.success(), "process failed: {render:?}");

        let read = run_cistercian(&["read", "thick.png"], dir.path());
        assert!(read.status.success(), "process failed: {read:?}");
        assert_eq!(String::from_utf8_lossy(&read.stdout).trim(), n);
    }
}

#[test]
fn default_stamp_reads_back() {
    let dir = tempdir().unwrap();
    let render = run_cistercian(&["render", "8159", "--format", "stamp", "-o", "s.png"], dir.path());
    assert!(render.status.success(), "process failed: {render:?}");

    let read = run_cistercian(&["read", "s.png", "--layout", "stamped"], dir.path());
    assert!(read.status.success(), "process failed: {read:?}");
    assert_eq!(String::from_utf8_lossy(&read.stdout).trim(), "8159");
}

#[test]
fn oversized_png_canvas_is_rejected() {
    let dir = tempdir().unwrap();
    let output = run_cistercian(
        &[
            "render", "5", "--format", "png", "--width", "4000000000", "--height", "4000000000",
            "-o", "huge.png",
        ],
        dir.path(),
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds the 16384px limit"), "{stderr}");
    assert!(!dir.path().join("huge.png").exists());
}

#[test]
fn png_without_output_path_fails() {
    let dir = tempdir().unwrap();
    let output = run_cistercian(&["render", "5", "--format", "png"], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("-o PATH"));
}

#[test]
fn rejects_out_of_range_and_non_numeric_input() {
    let dir = tempdir().unwrap();
    for bad in ["10000", "-1", "abc", "12.5", "99999999999999999999"] {
        let output = run_cistercian(&["render", bad], dir.path());
        assert!(!output.status.success(), "accepted {bad}");
        assert!(output.stdout.is_empty(), "wrote output for {bad}");
    }
    for too_big in ["10000", "99999999999999999999"] {
        let output = run_cistercian(&["render", too_big], dir.path());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("outside the representable range"), "{stderr}");
    }
}

#[test]
fn batch_writes_manifest() {
    let dir = tempdir().unwrap();
    let output = run_cistercian(
        &["batch", "1", "20", "300", "-o", "glyphs", "--form", "svg"],
        dir.path(),
    );
    assert!(output.status.success(), "process failed: {output:?}");

    let manifest = Manifest::load(&dir.path().join("glyphs/manifest.json")).unwrap();
    let files: Vec<_> = manifest.entries.iter().map(|e| e.file.clone()).collect();
    assert_eq!(files, vec!["0001.svg", "0020.svg", "0300.svg"]);
    for file in files {
        assert!(fs::read_to_string(dir.path().join("glyphs").join(file))
            .unwrap()
            .contains("<svg"));
    }
}

#[test]
fn inspect_lists_digits_and_strokes() {
    let dir = tempdir().unwrap();
    let output = run_cistercian(&["inspect", "9999"], dir.path());
    assert!(output.status.success(), "process failed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Number 9999\n"), "{stdout}");
    assert!(stdout.contains("Strokes (13):"), "{stdout}");
    assert!(stdout.contains("(0.500, 0.000) -> (0.500, 1.000)"), "{stdout}");
}
