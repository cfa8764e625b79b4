//! Rendered WAV file.

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::pcm::{pcm_bytes, to_pcm16};
use crate::error::AudioResult;

/// Rendered WAV file plus the facts callers usually report.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    pub sample_rate: u32,
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples as a 16-bit PCM WAV file.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> AudioResult<Self> {
        let pcm = to_pcm16(samples);
        let spec = WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut wav_data = Vec::with_capacity(44 + pcm.len() * 2);
        let mut writer = WavWriter::new(Cursor::new(&mut wav_data), spec)?;
        for &sample in &pcm {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;

        Ok(Self {
            wav_data,
            pcm_hash: blake3::hash(&pcm_bytes(&pcm)).to_hex().to_string(),
            sample_rate,
            num_samples: pcm.len(),
        })
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
