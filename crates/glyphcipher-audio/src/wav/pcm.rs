//! Float to 16-bit PCM conversion.

/// Converts samples in `[-1, 1]` to 16-bit PCM, clipping anything outside
/// that range. NaN becomes silence.
pub fn to_pcm16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&sample| {
            let clipped = if sample.is_nan() { 0.0 } else { sample.clamp(-1.0, 1.0) };
            (clipped * i16::MAX as f64).round() as i16
        })
        .collect()
}

/// Little-endian bytes of a PCM buffer, as stored in the `data` chunk.
pub fn pcm_bytes(pcm: &[i16]) -> Vec<u8> {
    pcm.iter().flat_map(|s| s.to_le_bytes()).collect()
}
