//! Sine wave source.

use crate::Signal;
use std::f64::consts::PI;

/// A sine wave sampled every `dt` seconds.
///
/// Phase is kept in `[0.0, 1.0)` and stays continuous across calls.
///
/// # Examples
///
/// ```
/// use butter2d::{Signal, SineWave};
///
/// // 1 Hz sampled at 100 Hz
/// let mut wave = SineWave::new(1.0, 0.01);
/// assert_eq!(wave.next_sample(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SineWave {
    /// Current phase (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency * dt)
    phase_increment: f64,
    amplitude: f64,
}

impl SineWave {
    /// Creates a unit-amplitude sine of `frequency` Hz sampled every `dt`
    /// seconds.
    pub fn new(frequency: f64, dt: f64) -> Self {
        Self {
            phase: 0.0,
            phase_increment: frequency * dt,
            amplitude: 1.0,
        }
    }

    /// Sets the peak amplitude (builder style).
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Gets the peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl Signal for SineWave {
    fn next_sample(&mut self) -> f64 {
        let sample = self.amplitude * (self.phase * 2.0 * PI).sin();

        self.phase += self.phase_increment;
        self.phase -= self.phase.floor();

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_period_peaks() {
        // 1 Hz at dt = 0.25: samples at 0, 90, 180, 270 degrees
        let mut wave = SineWave::new(1.0, 0.25).with_amplitude(2.0);
        assert_eq!(wave.amplitude(), 2.0);
        let samples: Vec<f64> = (0..4).map(|_| wave.next_sample()).collect();

        assert!(samples[0].abs() < 1e-12);
        assert!((samples[1] - 2.0).abs() < 1e-12);
        assert!(samples[2].abs() < 1e-12);
        assert!((samples[3] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_phase_stays_wrapped() {
        let mut wave = SineWave::new(30.0, 0.01);
        for _ in 0..1000 {
            let sample = wave.next_sample();
            assert!(sample.abs() <= 1.0);
            assert!((0.0..1.0).contains(&wave.phase));
        }
    }
}
