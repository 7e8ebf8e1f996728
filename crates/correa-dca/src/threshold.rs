//! Validated decision threshold.

use std::fmt;

use crate::error::DcaError;

/// A decision threshold strictly inside (0, 1).
///
/// Net benefit is undefined at 0 and 1: the threshold odds `t / (1 - t)`
/// divide by zero at 1 and the whole statistic collapses at 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Create a threshold, rejecting anything outside the open interval (0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`DcaError::ThresholdOutOfRange`] if `value <= 0`, `value >= 1`,
    /// or `value` is NaN.
    pub fn new(value: f64) -> Result<Self, DcaError> {
        // Written as a positive check so NaN falls through to the error.
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(DcaError::ThresholdOutOfRange { threshold: value })
        }
    }

    /// Create a threshold without validation. For internal use where the value
    /// is known to lie inside (0, 1).
    pub(crate) fn new_unchecked(value: f64) -> Self {
        debug_assert!(value > 0.0 && value < 1.0, "threshold must lie inside (0, 1)");
        Self(value)
    }

    /// Return the raw threshold value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Threshold odds `t / (1 - t)`: the weight of one false positive relative
    /// to one true positive at this threshold.
    #[must_use]
    pub fn odds(self) -> f64 {
        self.0 / (1.0 - self.0)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = DcaError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            Threshold::new(0.0),
            Err(DcaError::ThresholdOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_one() {
        assert!(matches!(
            Threshold::new(1.0),
            Err(DcaError::ThresholdOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_nan() {
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn rejects_negative_and_above_one() {
        assert!(Threshold::new(-0.2).is_err());
        assert!(Threshold::new(1.5).is_err());
    }

    #[test]
    fn odds_at_half_is_one() {
        let t = Threshold::new(0.5).unwrap();
        assert!((t.odds() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn odds_at_quarter() {
        let t = Threshold::new(0.25).unwrap();
        assert!((t.odds() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn try_from_f64() {
        let t: Result<Threshold, _> = 0.3.try_into();
        assert_eq!(t.unwrap().value(), 0.3);
    }
}
