//! The `Signal` trait and the constant source.

/// Common interface for anything that yields one sample per time step.
///
/// Implemented by sources (sine, noise, constants), by combinators, and by
/// [`LowPass`](crate::filters::LowPass), so a smoothed signal can itself be
/// fed into further processing.
pub trait Signal {
    /// Produces the next sample.
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// A signal that always returns the same value.
///
/// # Examples
///
/// ```
/// use butter2d::{ConstantSignal, Signal};
///
/// let mut level = ConstantSignal(0.5);
/// assert_eq!(level.next_sample(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal(pub f64);

impl Signal for ConstantSignal {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl From<f64> for ConstantSignal {
    fn from(value: f64) -> Self {
        ConstantSignal(value)
    }
}
