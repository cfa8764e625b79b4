//! Phase accumulator and sine oscillator.

use std::f64::consts::TAU;

/// Tracks oscillator phase in radians, wrapped to `[0, 2pi)`.
#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    phase: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Returns the current phase, then advances by one sample at `frequency`.
    pub fn advance(&mut self, frequency: f64) -> f64 {
        let current = self.phase;
        self.phase += TAU * frequency / self.sample_rate;
        if self.phase >= TAU {
            self.phase %= TAU;
        }
        current
    }
}

/// Sine of a phase in radians.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}
