//! Design parameters for the Butterworth low-pass filter.

use crate::error::{FilterError, Result};

/// Sampling interval and cutoff frequency a filter is designed from.
///
/// The filter assumes uniform sampling at `dt`. Coefficients are a pure
/// function of these two values.
///
/// # Examples
///
/// ```
/// use butter2d::FilterConfig;
///
/// let config = FilterConfig::new(0.01, 2.0);
/// assert!(config.validate().is_ok());
/// assert!((config.sample_rate_hz() - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    /// Sampling interval in seconds
    pub dt: f64,
    /// Cutoff frequency in Hz
    pub f_cutoff_hz: f64,
}

impl FilterConfig {
    /// Default sampling interval in seconds.
    pub const DEFAULT_DT: f64 = 0.1;
    /// Default cutoff frequency in Hz.
    pub const DEFAULT_CUTOFF_HZ: f64 = 10.0;

    /// Creates a configuration. Nothing is checked until [`validate`](Self::validate).
    pub fn new(dt: f64, f_cutoff_hz: f64) -> Self {
        Self { dt, f_cutoff_hz }
    }

    /// Checks that both parameters are finite and strictly positive.
    ///
    /// The first offending parameter is reported; nothing is clamped or
    /// replaced.
    pub fn validate(&self) -> Result<()> {
        check_positive("dt", self.dt)?;
        check_positive("f_cutoff_hz", self.f_cutoff_hz)
    }

    /// Gets the sampling rate implied by `dt`, in Hz.
    pub fn sample_rate_hz(&self) -> f64 {
        1.0 / self.dt
    }

    /// Gets the Nyquist frequency, half the sampling rate, in Hz.
    pub fn nyquist_hz(&self) -> f64 {
        0.5 / self.dt
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DT, Self::DEFAULT_CUTOFF_HZ)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidConfig { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FilterConfig::default();
        assert_eq!(config.dt, 0.1);
        assert_eq!(config.f_cutoff_hz, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dt() {
        for dt in [0.0, -0.1] {
            let err = FilterConfig::new(dt, 1.0).validate().unwrap_err();
            assert_eq!(err, FilterError::InvalidConfig { name: "dt", value: dt });
        }
    }

    #[test]
    fn test_rejects_non_positive_cutoff() {
        let err = FilterConfig::new(0.01, -3.0).validate().unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidConfig {
                name: "f_cutoff_hz",
                value: -3.0
            }
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(FilterConfig::new(f64::NAN, 1.0).validate().is_err());
        assert!(FilterConfig::new(0.01, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_dt_checked_before_cutoff() {
        let err = FilterConfig::new(0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, FilterError::InvalidConfig { name: "dt", .. }));
    }

    #[test]
    fn test_derived_rates() {
        let config = FilterConfig::new(0.001, 50.0);
        assert!((config.sample_rate_hz() - 1000.0).abs() < 1e-9);
        assert!((config.nyquist_hz() - 500.0).abs() < 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_from_json() {
        let config: FilterConfig =
            serde_json::from_str(r#"{ "dt": 0.02, "f_cutoff_hz": 3.5 }"#).unwrap();
        assert_eq!(config, FilterConfig::new(0.02, 3.5));
    }
}
