//! Second-order Butterworth low-pass filter.
//!
//! The analog prototype `wc^2 / (s^2 + sqrt(2) wc s + wc^2)` is discretized
//! with the bilinear transform `s = n (z - 1) / (z + 1)`, `n = 2 / dt`, giving
//! a single biquad section evaluated in Direct Form I.
//!
//! Two state policies coexist:
//! - streaming ([`Butterworth2d::filter`]) keeps a persistent history that
//!   starts from zero and advances one sample per call;
//! - batch ([`Butterworth2d::filt_vector`], [`Butterworth2d::filtfilt_vector`])
//!   builds a fresh history primed with the buffer's first sample and never
//!   touches the streaming history.

use std::f64::consts::{PI, SQRT_2};

use log::{debug, trace, warn};

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};

/// Relative deviation from `dt` tolerated in timestamp spacing before warning.
const TIMESTAMP_TOLERANCE: f64 = 0.01;

/// Unnormalized biquad coefficients.
///
/// `a0` divides the whole difference equation instead of being folded into
/// the other terms, so each field matches the bilinear-transform derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
}

impl Coefficients {
    /// Designs the low-pass section for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfig`] when `dt` or `f_cutoff_hz` is
    /// not finite and strictly positive, and [`FilterError::DegenerateDesign`]
    /// when the parameters are so extreme that the coefficients are no longer
    /// finite or `a0`/`b0` collapse to zero.
    pub fn design(config: &FilterConfig) -> Result<Self> {
        config.validate()?;
        let coefficients = Self::bilinear(config.dt, config.f_cutoff_hz);
        if !coefficients.is_usable() {
            return Err(FilterError::DegenerateDesign {
                dt: config.dt,
                f_cutoff_hz: config.f_cutoff_hz,
            });
        }
        Ok(coefficients)
    }

    fn is_usable(&self) -> bool {
        let all_finite = [self.a0, self.a1, self.a2, self.b0, self.b1, self.b2]
            .iter()
            .all(|c| c.is_finite());
        all_finite && self.a0 > 0.0 && self.b0 > 0.0
    }

    // Unchecked; `design` rejects results that overflowed or underflowed.
    fn bilinear(dt: f64, f_cutoff_hz: f64) -> Self {
        let wc = 2.0 * PI * f_cutoff_hz;
        let n = 2.0 / dt;

        let b0 = wc * wc;
        Self {
            a0: n * n + SQRT_2 * wc * n + wc * wc,
            a1: 2.0 * wc * wc - 2.0 * n * n,
            a2: n * n - SQRT_2 * wc * n + wc * wc,
            b0,
            b1: 2.0 * b0,
            b2: b0,
        }
    }

    /// Gain at zero frequency, `H(z = 1)`. Unity for every valid design.
    pub fn dc_gain(&self) -> f64 {
        (self.b0 + self.b1 + self.b2) / (self.a0 + self.a1 + self.a2)
    }
}

/// The last two inputs and outputs of the recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct State {
    u1: f64,
    u2: f64,
    y1: f64,
    y2: f64,
}

impl State {
    /// History as if `value` had been held forever.
    fn primed(value: f64) -> Self {
        Self {
            u1: value,
            u2: value,
            y1: value,
            y2: value,
        }
    }

    #[inline]
    fn step(&mut self, c: &Coefficients, u0: f64) -> f64 {
        let y0 = (c.b2 * self.u2 + c.b1 * self.u1 + c.b0 * u0 - c.a2 * self.y2 - c.a1 * self.y1)
            / c.a0;

        self.y2 = self.y1;
        self.y1 = y0;
        self.u2 = self.u1;
        self.u1 = u0;

        y0
    }
}

/// A second-order Butterworth low-pass filter for scalar signals.
///
/// One instance filters one channel. The streaming methods take `&mut self`,
/// so a live history can never be shared between two signal sources without
/// the caller serializing access. Batch methods take `&self` and leave the
/// streaming history alone.
///
/// # Examples
///
/// ```
/// use butter2d::Butterworth2d;
///
/// let mut filter = Butterworth2d::new(0.01, 2.0)?;
/// let smoothed: Vec<f64> = [1.0, 1.2, 0.9, 1.1].iter().map(|&u| filter.filter(u)).collect();
/// assert_eq!(smoothed.len(), 4);
///
/// let mut recorded = vec![1.0, 1.2, 0.9, 1.1, 1.0];
/// filter.filtfilt_vector(&mut recorded)?;
/// # Ok::<(), butter2d::FilterError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Butterworth2d {
    config: FilterConfig,
    coefficients: Coefficients,
    state: State,
}

impl Butterworth2d {
    /// Creates a filter for sampling interval `dt` (seconds) and cutoff
    /// `f_cutoff_hz` (Hz), with zeroed history.
    pub fn new(dt: f64, f_cutoff_hz: f64) -> Result<Self> {
        Self::from_config(&FilterConfig::new(dt, f_cutoff_hz))
    }

    /// Creates a filter from a [`FilterConfig`], with zeroed history.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let coefficients = Coefficients::design(config)?;
        debug!(
            "butterworth2d: dt={} f_cutoff_hz={} coefficients={:?}",
            config.dt, config.f_cutoff_hz, coefficients
        );
        Ok(Self {
            config: *config,
            coefficients,
            state: State::default(),
        })
    }

    /// Redesigns the filter and discards the streaming history.
    ///
    /// On error the filter is left exactly as it was.
    pub fn initialize(&mut self, dt: f64, f_cutoff_hz: f64) -> Result<()> {
        *self = Self::new(dt, f_cutoff_hz)?;
        Ok(())
    }

    /// Zeroes the streaming history, keeping the current design.
    pub fn reset(&mut self) {
        self.state = State::default();
    }

    /// Gets the design parameters the filter was built from.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Gets the current biquad coefficients.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Filters one sample, advancing the streaming history by one step.
    ///
    /// Samples must arrive in chronological order. Constant time, no
    /// allocation, no branches.
    #[inline]
    pub fn filter(&mut self, u0: f64) -> f64 {
        self.state.step(&self.coefficients, u0)
    }

    /// Streams every sample of `samples` through [`filter`](Self::filter),
    /// in place.
    pub fn filter_slice(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.state.step(&self.coefficients, *sample);
        }
    }

    /// Filters a recorded buffer in place, front to back.
    ///
    /// The recursion starts from a history primed with `samples[0]` rather
    /// than zero, which removes the cold-start transient. Sampling is assumed
    /// uniform at the configured `dt`.
    ///
    /// # Errors
    ///
    /// [`FilterError::EmptyInput`] if `samples` is empty.
    pub fn filt_vector(&self, samples: &mut [f64]) -> Result<()> {
        let first = *samples.first().ok_or(FilterError::EmptyInput)?;
        trace!("butterworth2d: filt_vector over {} samples", samples.len());
        self.run(State::primed(first), samples);
        Ok(())
    }

    /// Zero-phase filtering: forward and backward passes, averaged.
    ///
    /// Each pass has its own primed history, so the phase lag of one pass
    /// cancels the other's. Needs the whole buffer and one extra copy of it.
    ///
    /// # Errors
    ///
    /// [`FilterError::EmptyInput`] if `samples` is empty.
    pub fn filtfilt_vector(&self, samples: &mut [f64]) -> Result<()> {
        if samples.is_empty() {
            return Err(FilterError::EmptyInput);
        }
        trace!("butterworth2d: filtfilt_vector over {} samples", samples.len());

        let mut backward = samples.to_vec();
        backward.reverse();

        self.run(State::primed(samples[0]), samples);
        self.run(State::primed(backward[0]), &mut backward);
        backward.reverse();

        for (forward, backward) in samples.iter_mut().zip(&backward) {
            *forward = (*forward + backward) * 0.5;
        }
        Ok(())
    }

    /// [`filt_vector`](Self::filt_vector) with a parallel timestamp sequence.
    ///
    /// Timestamps never enter the computation; they are only checked for
    /// length and for spacing consistent with `dt`. A warning is logged when
    /// the spacing drifts, since the coefficients assume uniform sampling.
    pub fn filt_vector_timed(&self, timestamps: &[f64], samples: &mut [f64]) -> Result<()> {
        self.check_timestamps(timestamps, samples)?;
        self.filt_vector(samples)
    }

    /// [`filtfilt_vector`](Self::filtfilt_vector) with a parallel timestamp
    /// sequence. See [`filt_vector_timed`](Self::filt_vector_timed).
    pub fn filtfilt_vector_timed(&self, timestamps: &[f64], samples: &mut [f64]) -> Result<()> {
        self.check_timestamps(timestamps, samples)?;
        self.filtfilt_vector(samples)
    }

    fn run(&self, mut state: State, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = state.step(&self.coefficients, *sample);
        }
    }

    fn check_timestamps(&self, timestamps: &[f64], samples: &[f64]) -> Result<()> {
        if timestamps.len() != samples.len() {
            return Err(FilterError::LengthMismatch {
                timestamps: timestamps.len(),
                samples: samples.len(),
            });
        }

        let dt = self.config.dt;
        if let Some(pair) = timestamps
            .windows(2)
            .find(|pair| ((pair[1] - pair[0]) - dt).abs() > dt * TIMESTAMP_TOLERANCE)
        {
            warn!(
                "butterworth2d: timestamp spacing {} at t={} differs from dt={}; \
                 filtering assumes uniform sampling",
                pair[1] - pair[0],
                pair[0],
                dt
            );
        }
        Ok(())
    }
}

impl Default for Butterworth2d {
    /// `dt = 0.1`, `f_cutoff_hz = 10.0`.
    fn default() -> Self {
        let config = FilterConfig::default();
        Self {
            config,
            coefficients: Coefficients::bilinear(config.dt, config.f_cutoff_hz),
            state: State::default(),
        }
    }
}
