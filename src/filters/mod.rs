//! Low-pass filter implementations.
//!
//! - [`Butterworth2d`]: the second-order Butterworth engine, for raw `f64`
//!   samples and recorded buffers
//! - [`LowPass`]: wraps any [`Signal`](crate::Signal) and streams it through a
//!   [`Butterworth2d`]

mod butterworth;
mod lowpass;

pub use butterworth::{Butterworth2d, Coefficients};
pub use lowpass::LowPass;
