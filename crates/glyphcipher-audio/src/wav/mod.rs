//! WAV encoding.
//!
//! Samples are clipped to 16-bit PCM and written through `hound`. The output
//! carries no timestamps or extra chunks, so the same samples always produce
//! the same bytes.

mod pcm;
mod result;


pub use pcm::{pcm_bytes, to_pcm16};
pub use result::WavResult;
