//! Offline rendering of a tone schedule.
//!
//! Tones are plain sines at a fixed gain, summed into one mono buffer. A short
//! linear ramp at each end of a tone keeps the cuts from clicking.

use glyphcipher_core::{CipherSequence, ToneParams};

use crate::error::{AudioError, AudioResult};
use crate::oscillator::{sine, PhaseAccumulator};
use crate::tone::{tone_schedule, Tone};
use crate::wav::WavResult;

/// Longest schedule [`render_tones`] will mix, in milliseconds (ten minutes).
pub const MAX_RENDER_MS: u64 = 600_000;

fn ms_to_samples(ms: f64, sample_rate: u32) -> usize {
    (ms * sample_rate as f64 / 1000.0).round() as usize
}

/// Mixes `tones` into a mono buffer long enough to hold the last one.
pub fn render_tones(tones: &[Tone], params: &ToneParams) -> AudioResult<Vec<f64>> {
    if params.sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate {
            rate: params.sample_rate,
        });
    }
    if !(params.declick_ms >= 0.0 && params.declick_ms.is_finite()) {
        return Err(AudioError::invalid_param(
            "declick_ms",
            "must be non-negative",
        ));
    }

    let sample_rate = params.sample_rate;
    let end_ms = tones.iter().map(Tone::end_ms).max().unwrap_or(0);
    if end_ms > MAX_RENDER_MS {
        return Err(AudioError::invalid_param(
            "tones",
            format!("schedule runs {} ms, limit is {} ms", end_ms, MAX_RENDER_MS),
        ));
    }
    let mut output = vec![0.0; ms_to_samples(end_ms as f64, sample_rate)];

    for tone in tones {
        let start = ms_to_samples(tone.start_ms as f64, sample_rate);
        let len = ms_to_samples(tone.duration_ms as f64, sample_rate);
        let ramp = ms_to_samples(params.declick_ms, sample_rate).min(len / 2);
        let mut phase = PhaseAccumulator::new(sample_rate as f64);

        for i in 0..len {
            let Some(slot) = output.get_mut(start + i) else {
                break;
            };
            let edge = i.min(len - 1 - i);
            let fade = if ramp > 0 && edge < ramp {
                edge as f64 / ramp as f64
            } else {
                1.0
            };
            *slot += tone.gain * fade * sine(phase.advance(tone.frequency));
        }
    }

    Ok(output)
}

/// Renders a sequence straight to a WAV file in memory.
pub fn render_wav(sequence: &CipherSequence, params: &ToneParams) -> AudioResult<WavResult> {
    let tones = tone_schedule(sequence, params);
    let samples = render_tones(&tones, params)?;
    WavResult::from_mono(&samples, params.sample_rate)
}
