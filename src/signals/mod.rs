//! Sample sources.
//!
//! This module provides the `Signal` trait that the filters consume and
//! produce, plus a few simple sources used to build test and simulation
//! inputs:
//! - `ConstantSignal` for a fixed value
//! - `SineWave` for a pure tone at a given sampling interval
//! - `WhiteNoise` for uniform noise (requires the `noise` feature)

mod signal;
#[cfg(feature = "noise")]
mod noise;
mod sine;

pub use signal::{ConstantSignal, Signal};
#[cfg(feature = "noise")]
pub use noise::WhiteNoise;
pub use sine::SineWave;
