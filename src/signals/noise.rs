//! White noise source, for simulating sensor noise.

use crate::Signal;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform white noise in `[-amplitude, amplitude]`.
///
/// # Examples
///
/// ```
/// use butter2d::{Signal, WhiteNoise};
///
/// let mut noise = WhiteNoise::seeded(0.1, 42);
/// assert!(noise.next_sample().abs() <= 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct WhiteNoise<R: Rng = StdRng> {
    amplitude: f64,
    rng: R,
}

impl WhiteNoise<StdRng> {
    /// Creates a reproducible noise source from `seed`.
    pub fn seeded(amplitude: f64, seed: u64) -> Self {
        Self::with_rng(amplitude, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a noise source with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak absolute value of the noise
    /// * `rng` - Random number generator to use
    ///
    /// # Examples
    ///
    /// ```
    /// use butter2d::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(0.2, rng);
    /// assert!(noise.next_sample().abs() <= 0.2);
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        Self { amplitude, rng }
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.amplitude * self.rng.gen_range(-1.0..=1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_range() {
        let mut noise = WhiteNoise::seeded(0.5, 7);
        for _ in 0..1000 {
            let sample = noise.next_sample();
            assert!((-0.5..=0.5).contains(&sample), "out of range: {}", sample);
        }
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let mut a = WhiteNoise::seeded(1.0, 1234);
        let mut b = WhiteNoise::seeded(1.0, 1234);
        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn test_noise_mean_near_zero() {
        let mut noise = WhiteNoise::seeded(1.0, 99);
        let mut buffer = vec![0.0; 10_000];
        noise.process(&mut buffer);

        let mean = buffer.iter().sum::<f64>() / buffer.len() as f64;
        assert!(mean.abs() < 0.05, "mean {}", mean);
    }
}
