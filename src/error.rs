//! Error types for filter configuration and batch input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A design parameter was zero, negative, or not finite.
    #[error("invalid filter parameter `{name}`: {value} (must be finite and > 0)")]
    InvalidConfig { name: &'static str, value: f64 },

    /// Parameters were individually valid but the derived coefficients
    /// overflowed, underflowed, or left `a0` non-positive.
    #[error("degenerate filter design for dt={dt}, f_cutoff_hz={f_cutoff_hz}")]
    DegenerateDesign { dt: f64, f_cutoff_hz: f64 },

    #[error("cannot filter an empty sample buffer")]
    EmptyInput,

    #[error("timestamp count {timestamps} does not match sample count {samples}")]
    LengthMismatch { timestamps: usize, samples: usize },
}

pub type Result<T> = std::result::Result<T, FilterError>;
