//! Signal adapter that smooths a source through a Butterworth filter.

use crate::config::FilterConfig;
use crate::error::Result;
use crate::filters::Butterworth2d;
use crate::signals::Signal;

/// A [`Signal`] that pulls samples from `source` and returns them low-passed.
///
/// Every call to `next_sample()` advances both the source and the filter's
/// streaming history by one step, so the source must produce samples at the
/// filter's configured `dt`.
///
/// # Examples
///
/// ```
/// use butter2d::{FilterConfig, Signal, SignalExt, SineWave};
///
/// let sensor = SineWave::new(0.5, 0.01);
/// let mut smoothed = sensor.butterworth_lowpass(&FilterConfig::new(0.01, 2.0))?;
/// let sample = smoothed.next_sample();
/// # Ok::<(), butter2d::FilterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LowPass<S: Signal> {
    source: S,
    filter: Butterworth2d,
}

impl<S: Signal> LowPass<S> {
    /// Creates a smoothed signal with a freshly designed filter.
    ///
    /// # Arguments
    ///
    /// * `source` - Signal to smooth, sampled at `config.dt`
    /// * `config` - Filter design parameters
    pub fn new(source: S, config: &FilterConfig) -> Result<Self> {
        Ok(Self {
            source,
            filter: Butterworth2d::from_config(config)?,
        })
    }

    /// Wraps a source around an existing filter, keeping its history.
    pub fn with_filter(source: S, filter: Butterworth2d) -> Self {
        Self { source, filter }
    }

    /// Gets the wrapped filter.
    pub fn filter(&self) -> &Butterworth2d {
        &self.filter
    }

    /// Redesigns the filter, discarding its history. The source is untouched.
    pub fn reconfigure(&mut self, config: &FilterConfig) -> Result<()> {
        self.filter.initialize(config.dt, config.f_cutoff_hz)
    }

    /// Splits the adapter back into its source and filter.
    pub fn into_inner(self) -> (S, Butterworth2d) {
        (self.source, self.filter)
    }
}

impl<S: Signal> Signal for LowPass<S> {
    fn next_sample(&mut self) -> f64 {
        let u0 = self.source.next_sample();
        self.filter.filter(u0)
    }

    fn process(&mut self, buffer: &mut [f64]) {
        self.source.process(buffer);
        self.filter.filter_slice(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{ConstantSignal, SineWave};

    #[test]
    fn test_matches_direct_filtering() {
        let config = FilterConfig::new(0.01, 3.0);
        let mut smoothed = LowPass::new(SineWave::new(8.0, 0.01), &config).unwrap();

        let mut source = SineWave::new(8.0, 0.01);
        let mut filter = Butterworth2d::from_config(&config).unwrap();

        for _ in 0..200 {
            assert_eq!(smoothed.next_sample(), filter.filter(source.next_sample()));
        }
    }

    #[test]
    fn test_process_matches_next_sample() {
        let config = FilterConfig::new(0.01, 3.0);
        let mut by_sample = LowPass::new(SineWave::new(4.0, 0.01), &config).unwrap();
        let mut by_buffer = by_sample.clone();

        let expected: Vec<f64> = (0..128).map(|_| by_sample.next_sample()).collect();
        let mut actual = vec![0.0; 128];
        by_buffer.process(&mut actual);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_constant_source_converges() {
        let mut smoothed =
            LowPass::new(ConstantSignal(2.5), &FilterConfig::new(0.01, 5.0)).unwrap();

        let mut last = 0.0;
        for _ in 0..500 {
            last = smoothed.next_sample();
        }
        assert!((last - 2.5).abs() < 1e-9, "got {}", last);
    }

    #[test]
    fn test_with_filter_continues_history() {
        let mut warmed = Butterworth2d::new(0.01, 4.0).unwrap();
        for u in [1.0, 3.0, -2.0, 0.5, 2.0] {
            warmed.filter(u);
        }
        let mut reference = warmed.clone();
        let mut cold = Butterworth2d::new(0.01, 4.0).unwrap();

        let mut smoothed = LowPass::with_filter(ConstantSignal(1.5), warmed);
        let first = smoothed.next_sample();
        assert_eq!(first, reference.filter(1.5));
        assert_ne!(first, cold.filter(1.5));

        for _ in 0..20 {
            assert_eq!(smoothed.next_sample(), reference.filter(1.5));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = LowPass::new(ConstantSignal(1.0), &FilterConfig::new(0.01, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_reconfigure_discards_history() {
        let mut smoothed =
            LowPass::new(ConstantSignal(1.0), &FilterConfig::new(0.01, 5.0)).unwrap();
        for _ in 0..10 {
            smoothed.next_sample();
        }

        let config = FilterConfig::new(0.02, 1.0);
        smoothed.reconfigure(&config).unwrap();
        assert_eq!(smoothed.filter(), &Butterworth2d::from_config(&config).unwrap());

        let (source, _) = smoothed.into_inner();
        assert_eq!(source, ConstantSignal(1.0));
    }
}
