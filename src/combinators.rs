//! Signal combinators for building and smoothing composite signals.
//!
//! Typical use is composing a clean reference with noise to simulate a
//! sensor, then attaching a low-pass filter to the result.

use crate::config::FilterConfig;
use crate::error::Result;
use crate::filters::LowPass;
use crate::Signal;

/// Adds two signals together (mixing).
///
/// # Examples
///
/// ```
/// use butter2d::{ConstantSignal, Signal, combinators::Add};
///
/// let mut sum = Add::new(ConstantSignal(1.0), ConstantSignal(2.0));
/// assert_eq!(sum.next_sample(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct Add<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Add<A, B> {
    /// Creates a new Add combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Add<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() + self.b.next_sample()
    }
}

/// Scales a signal by a fixed factor.
#[derive(Debug, Clone)]
pub struct Gain<S: Signal> {
    pub source: S,
    pub gain: f64,
}

impl<S: Signal> Signal for Gain<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() * self.gain
    }
}

/// Adds a fixed offset to a signal (DC bias).
#[derive(Debug, Clone)]
pub struct Offset<S: Signal> {
    pub source: S,
    pub offset: f64,
}

impl<S: Signal> Signal for Offset<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() + self.offset
    }
}

/// Extension trait providing combinator methods for all signals.
pub trait SignalExt: Signal + Sized {
    /// Adds this signal to another signal.
    fn add<S: Signal>(self, other: S) -> Add<Self, S> {
        Add { a: self, b: other }
    }

    /// Applies a gain factor to this signal.
    fn gain(self, gain: f64) -> Gain<Self> {
        Gain { source: self, gain }
    }

    /// Adds an offset to this signal.
    fn offset(self, offset: f64) -> Offset<Self> {
        Offset {
            source: self,
            offset,
        }
    }

    /// Streams this signal through a second-order Butterworth low-pass.
    ///
    /// # Errors
    ///
    /// Fails if `config` is not a valid design.
    fn butterworth_lowpass(self, config: &FilterConfig) -> Result<LowPass<Self>> {
        LowPass::new(self, config)
    }
}

impl<T: Signal> SignalExt for T {}
