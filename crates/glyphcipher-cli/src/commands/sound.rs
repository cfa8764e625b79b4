//! Sound command implementation
//!
//! Encodes text and renders its tone sequence to a WAV file, optionally also
//! playing the schedule in real time.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphcipher_audio::{render_wav, spawn_playback, tone_schedule, Tone};
use glyphcipher_core::encode;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, JsonOutput, SoundResult};
use crate::config::load_config;

/// Run the sound command
///
/// # Arguments
/// * `text` - Text to encode
/// * `config_path` - Optional JSON config file
/// * `phi` - Optional phi override
/// * `out` - WAV output path
/// * `realtime` - Also play the schedule live, printing each tone
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    text: &str,
    config_path: Option<&str>,
    phi: Option<f64>,
    out: &str,
    realtime: bool,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        return match generate(text, config_path, phi, Path::new(out)) {
            Ok(result) => {
                JsonOutput::success(result).print()?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                JsonOutput::<SoundResult>::failure(JsonError::from_anyhow(
                    error_codes::FILE_WRITE,
                    &e,
                ))
                .print()?;
                Ok(ExitCode::from(1))
            }
        };
    }

    println!("{} {}", "Sounding:".cyan().bold(), text);
    let result = generate(text, config_path, phi, Path::new(out))?;

    println!("{} {}", "Translated:".dimmed(), result.translated);
    println!("{} {}", "Phi:".dimmed(), result.phi);
    if result.tones.is_empty() {
        println!("  {} empty sequence, nothing to play", "!!".yellow());
        return Ok(ExitCode::SUCCESS);
    }
    println!(
        "  {} {} ({} tones, {:.2}s)",
        "ok".green(),
        result.wav,
        result.tones.len(),
        result.duration_seconds
    );
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    if realtime {
        play_realtime(result.tones)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Encodes `text` and writes its tone sequence to `out`.
pub fn generate(
    text: &str,
    config_path: Option<&str>,
    phi: Option<f64>,
    out: &Path,
) -> Result<SoundResult> {
    let config = load_config(config_path, phi)?;
    let encoding = encode(text, &config.cipher);
    let wav = render_wav(&encoding.sequence, &config.tones)?;
    let tones = tone_schedule(&encoding.sequence, &config.tones);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(out, &wav.wav_data)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    Ok(SoundResult {
        translated: encoding.translated,
        phi: encoding.phi,
        wav: out.display().to_string(),
        pcm_hash: wav.pcm_hash.clone(),
        sample_rate: wav.sample_rate,
        duration_seconds: wav.duration_seconds(),
        tones,
    })
}

/// Plays the schedule on a current-thread runtime until it ends or Ctrl-C.
fn play_realtime(tones: Vec<Tone>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start playback runtime")?;

    let report = runtime.block_on(async move {
        let handle = spawn_playback(tones, |tone: &Tone| {
            println!(
                "  {} #{:<3} {:>10} -> {:>7.1} Hz",
                "~".cyan(),
                tone.index,
                tone.value,
                tone.frequency
            );
        });
        let canceller = handle.canceller();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                canceller.cancel();
            }
        });
        handle.wait().await
    })?;

    if report.cancelled {
        println!(
            "{} stopped after {} tones",
            "CANCELLED".yellow().bold(),
            report.played
        );
    } else {
        println!("{} played {} tones", "DONE".green().bold(), report.played);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_wav() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("tones.wav");
        let result = generate("abc", None, None, &out).unwrap();

        assert_eq!(result.tones.len(), 3);
        assert!((result.duration_seconds - 1.5).abs() < 1e-9);

        let reader = hound::WavReader::open(&out).unwrap();
        assert_eq!(reader.spec().sample_rate, 44100);
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("bad.json");
        fs::write(&config, r#"{ "tones": { "gain": 2.0 } }"#).unwrap();

        let err = generate(
            "abc",
            config.to_str(),
            None,
            &dir.path().join("tones.wav"),
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("tones.gain"));
    }
}
