//! Tone schedule.
//!
//! Each cipher value becomes one tone. Frequencies are a linear map of the
//! value's position within the sequence's own min/max; tone `i` starts at
//! `i * stagger_ms`.

use serde::{Deserialize, Serialize};

use glyphcipher_core::{normalize, CipherSequence, ToneParams};

/// One scheduled tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Position of the source value in the sequence.
    pub index: usize,
    /// Source cipher value.
    pub value: i64,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Start offset from the beginning of playback, in milliseconds.
    pub start_ms: u64,
    /// Length of the tone, in milliseconds.
    pub duration_ms: u64,
    /// Linear gain.
    pub gain: f64,
}

impl Tone {
    /// End offset in milliseconds, saturating at `u64::MAX`.
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }
}

/// Maps a value in `[min, max]` to `[min_frequency, max_frequency]`.
///
/// A degenerate range maps to the middle of the frequency range.
pub fn value_to_frequency(value: f64, min: f64, max: f64, params: &ToneParams) -> f64 {
    let n = normalize(value, min, max);
    params.min_frequency + n * (params.max_frequency - params.min_frequency)
}

/// Builds the tone schedule for a sequence. An empty sequence has no tones.
pub fn tone_schedule(sequence: &CipherSequence, params: &ToneParams) -> Vec<Tone> {
    let Some((min, max)) = sequence.bounds() else {
        return Vec::new();
    };

    sequence
        .iter()
        .map(|(index, value)| Tone {
            index,
            value,
            frequency: value_to_frequency(value as f64, min as f64, max as f64, params),
            start_ms: (index as u64).saturating_mul(params.stagger_ms),
            duration_ms: params.duration_ms,
            gain: params.gain,
        })
        .collect()
}
