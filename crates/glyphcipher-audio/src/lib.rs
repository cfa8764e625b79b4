//! GlyphCipher Audio Backend
//!
//! Turns a [`CipherSequence`](glyphcipher_core::CipherSequence) into a sequence
//! of sine tones: each value is mapped linearly into a frequency range
//! (200-1000 Hz by default) and tones start at a fixed stagger.
//!
//! # Example
//!
//! ```
//! use glyphcipher_audio::render_wav;
//! use glyphcipher_core::{encode, CipherParams, ToneParams};
//!
//! let encoding = encode("phi", &CipherParams::default());
//! let wav = render_wav(&encoding.sequence, &ToneParams::default()).unwrap();
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`tone`] - value-to-frequency mapping and the tone schedule
//! - [`oscillator`] - phase accumulator and sine generator
//! - [`synth`] - offline rendering of a schedule to samples
//! - [`wav`] - deterministic WAV writer
//! - [`player`] - real-time, cancellable playback on a Tokio task

pub mod error;
pub mod oscillator;
pub mod player;
pub mod synth;
pub mod tone;
pub mod wav;

pub use error::{AudioError, AudioResult};
pub use player::{spawn_playback, Canceller, PlaybackHandle, PlaybackReport, ToneSink};
pub use synth::{render_tones, render_wav, MAX_RENDER_MS};
pub use tone::{tone_schedule, value_to_frequency, Tone};
pub use wav::WavResult;
