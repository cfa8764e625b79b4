//! Plot command implementation
//!
//! Encodes text and writes `chart.png`, `chart.json` and `shape.svg`.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphcipher_core::encode;
use glyphcipher_render::png::PngConfig;
use glyphcipher_render::{shape_svg, ChartData, ChartSlot, RasterChartSurface};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, JsonOutput, PlotResult};
use crate::config::load_config;

pub const CHART_PNG: &str = "chart.png";
pub const CHART_JSON: &str = "chart.json";
pub const SHAPE_SVG: &str = "shape.svg";

/// Run the plot command
///
/// # Arguments
/// * `text` - Text to encode
/// * `config_path` - Optional JSON config file
/// * `phi` - Optional phi override
/// * `out_dir` - Output directory (default: current directory)
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    text: &str,
    config_path: Option<&str>,
    phi: Option<f64>,
    out_dir: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let out_dir = out_dir.unwrap_or(".");

    if json_output {
        return match generate(text, config_path, phi, Path::new(out_dir)) {
            Ok(result) => {
                JsonOutput::success(result).print()?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                JsonOutput::<PlotResult>::failure(JsonError::from_anyhow(
                    error_codes::FILE_WRITE,
                    &e,
                ))
                .print()?;
                Ok(ExitCode::from(1))
            }
        };
    }

    println!("{} {}", "Plotting:".cyan().bold(), text);
    let result = generate(text, config_path, phi, Path::new(out_dir))?;

    println!("{} {}", "Translated:".dimmed(), result.translated);
    println!("{} {}", "Phi:".dimmed(), result.phi);
    if result.points.is_empty() {
        println!(
            "  {} empty sequence, chart and shape are blank",
            "!!".yellow()
        );
    }
    println!("  {} {}", "ok".green(), result.chart_png);
    println!("  {} {}", "ok".green(), result.chart_json);
    println!("  {} {}", "ok".green(), result.shape_svg);
    println!("{} {}", "PNG hash:".dimmed(), &result.png_hash[..16]);

    Ok(ExitCode::SUCCESS)
}

/// Encodes `text` and writes all plot artifacts into `out_dir`.
pub fn generate(
    text: &str,
    config_path: Option<&str>,
    phi: Option<f64>,
    out_dir: &Path,
) -> Result<PlotResult> {
    let config = load_config(config_path, phi)?;
    let encoding = encode(text, &config.cipher);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let data = ChartData::from_sequence(&encoding.sequence, &config.chart);
    let mut slot = ChartSlot::new(RasterChartSurface::new(&config.chart));
    let chart = slot.replace(&data)?;
    let (png_bytes, png_hash) = chart.to_png(&PngConfig::default())?;

    let png_path = out_dir.join(CHART_PNG);
    fs::write(&png_path, &png_bytes)
        .with_context(|| format!("Failed to write {}", png_path.display()))?;

    let json_path = out_dir.join(CHART_JSON);
    let chart_json = serde_json::to_string_pretty(&data)?;
    fs::write(&json_path, chart_json)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;

    let svg_path = out_dir.join(SHAPE_SVG);
    fs::write(&svg_path, shape_svg(&encoding.sequence, &config.shape))
        .with_context(|| format!("Failed to write {}", svg_path.display()))?;

    Ok(PlotResult {
        translated: encoding.translated,
        phi: encoding.phi,
        chart_png: png_path.display().to_string(),
        chart_json: json_path.display().to_string(),
        shape_svg: svg_path.display().to_string(),
        png_hash,
        points: data.points,
    })
}
