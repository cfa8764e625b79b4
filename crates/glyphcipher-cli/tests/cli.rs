//! End-to-end tests for the `glyphcipher` binary.
//!
//! ```bash
//! cargo test -p glyphcipher-cli --test cli
//! ```

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::tempdir;

fn glyphcipher(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyphcipher"))
        .args(args)
        .output()
        .expect("failed to run glyphcipher")
}

fn json_of(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn translate_prints_glyphs() {
    let output = glyphcipher(&["translate", "Hi"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("𑀯⨁"), "stdout: {}", stdout);
}

#[test]
fn translate_json_envelope() {
    let output = glyphcipher(&["translate", "a b!", "--json"]);
    assert!(output.status.success());

    let json = json_of(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["input"], "a b!");
    assert_eq!(json["result"]["translated"], "𓂀 Ꙫ!");
}

#[test]
fn encode_json_sequence_and_colors() {
    let output = glyphcipher(&["encode", "Hi", "--json"]);
    assert!(output.status.success());

    let json = json_of(&output);
    let sequence: Vec<i64> = serde_json::from_value(json["result"]["sequence"].clone()).unwrap();
    assert_eq!(sequence, vec![0x1102F - 64, 0x2A01 - 64]);

    let colors: Vec<String> = serde_json::from_value(json["result"]["colors"].clone()).unwrap();
    assert_eq!(colors, vec!["rgb(255, 0, 0)", "rgb(0, 255, 255)"]);
}

#[test]
fn encode_phi_flag_is_reported() {
    let output = glyphcipher(&["encode", "abc", "--phi", "2.0", "--json"]);
    assert!(output.status.success());
    assert_eq!(json_of(&output)["result"]["phi"], 2.0);
}

#[test]
fn invalid_config_exits_nonzero() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "cipher": { "phi": 1.6 }, "bogus": true }"#).unwrap();

    let output = glyphcipher(&["--config", path_str(&config), "encode", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

#[test]
fn invalid_config_json_failure_envelope() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "tones": { "gain": 3.0 } }"#).unwrap();

    let output = glyphcipher(&["--config", path_str(&config), "encode", "abc", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let json = json_of(&output);
    assert_eq!(json["success"], false);
    assert!(json["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("tones.gain"));
}

#[test]
fn oversized_tone_duration_is_rejected() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        format!(r#"{{ "tones": {{ "duration_ms": {} }} }}"#, u64::MAX),
    )
    .unwrap();
    let wav = dir.path().join("tones.wav");

    let output = glyphcipher(&[
        "--config",
        path_str(&config),
        "sound",
        "ab",
        "--out",
        path_str(&wav),
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let json = json_of(&output);
    assert_eq!(json["errors"][0]["code"], "CFG_001");
    assert!(!wav.exists());
}

#[test]
fn oversized_point_radius_is_rejected() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "chart": { "point_radius": 4000000000 } }"#).unwrap();

    let output = glyphcipher(&[
        "--config",
        path_str(&config),
        "plot",
        "ab",
        "--out-dir",
        path_str(dir.path()),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("chart.point_radius"));
}

#[test]
fn plot_writes_chart_and_shape() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("plots");

    let output = glyphcipher(&["plot", "golden", "--out-dir", path_str(&out_dir), "--json"]);
    assert!(output.status.success());

    let png = fs::File::open(out_dir.join("chart.png")).unwrap();
    let reader = png::Decoder::new(png).read_info().unwrap();
    assert_eq!(reader.info().width, 800);
    assert_eq!(reader.info().height, 480);

    let svg = fs::read_to_string(out_dir.join("shape.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<circle").count(), 6);

    let chart: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("chart.json")).unwrap()).unwrap();
    assert_eq!(chart["points"].as_array().unwrap().len(), 6);
}

#[test]
fn plot_is_deterministic() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    for out in [&first, &second] {
        let output = glyphcipher(&["plot", "same input", "--out-dir", path_str(out)]);
        assert!(output.status.success());
    }

    assert_eq!(
        fs::read(first.join("chart.png")).unwrap(),
        fs::read(second.join("chart.png")).unwrap()
    );
    assert_eq!(
        fs::read_to_string(first.join("shape.svg")).unwrap(),
        fs::read_to_string(second.join("shape.svg")).unwrap()
    );
}

#[test]
fn sound_writes_wav() {
    let dir = tempdir().unwrap();
    let wav = dir.path().join("tones.wav");

    let output = glyphcipher(&["sound", "abcd", "--out", path_str(&wav), "--json"]);
    assert!(output.status.success());

    let json = json_of(&output);
    assert_eq!(json["result"]["tones"].as_array().unwrap().len(), 4);

    let reader = hound::WavReader::open(&wav).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    // Four tones staggered by 500 ms, each 500 ms long.
    assert_eq!(reader.duration(), 88200);
}

#[test]
fn sound_realtime_conflicts_with_json() {
    let output = glyphcipher(&["sound", "a", "--realtime", "--json"]);
    assert!(!output.status.success());
}

#[test]
fn symbols_lists_alphabet() {
    let output = glyphcipher(&["symbols", "--json"]);
    assert!(output.status.success());

    let json = json_of(&output);
    let rows = json["result"].as_array().unwrap();
    assert_eq!(rows.len(), 26);
    assert_eq!(rows[0]["letter"], "A");
    assert_eq!(rows[0]["glyph"], "𓂀");
    assert_eq!(rows[25]["letter"], "Z");
}
