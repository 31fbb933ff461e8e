//! butter2d - second-order Butterworth low-pass filtering for scalar signals
//!
//! The core is [`Butterworth2d`], a bilinear-transform biquad that smooths
//! a live stream one sample at a time or filters a recorded buffer, with a
//! zero-phase forward-backward mode for offline use. Around it sit a small
//! [`Signal`] abstraction and a few sources for composing test inputs.

pub mod combinators;
pub mod config;
pub mod error;
pub mod filters;
pub mod signals;

// Re-export commonly used types at the crate root
pub use combinators::{Add, Gain, Offset, SignalExt};
pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use filters::{Butterworth2d, Coefficients, LowPass};
#[cfg(feature = "noise")]
pub use signals::WhiteNoise;
pub use signals::{ConstantSignal, Signal, SineWave};
