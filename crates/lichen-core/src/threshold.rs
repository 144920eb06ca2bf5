//! The open-interval survive/birth threshold.

use crate::error::ThresholdError;

/// A pair of bounds defining the open interval of neighbour-weight
/// sums that sustains or creates life.
///
/// The same interval governs both transitions: a live cell survives iff
/// its neighbour weight is within, and a dead cell is born iff its
/// neighbour weight is within. This symmetry is a deliberate property
/// of the rule, unlike classic Life's separate survive/birth sets.
///
/// Invariant: `min < max`, both finite. Enforced at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    min: f64,
    max: f64,
}

impl Threshold {
    /// Create a threshold, validating the bounds.
    ///
    /// Returns `Err(ThresholdError::NonFinite)` if either bound is NaN
    /// or infinite, `Err(ThresholdError::InvertedBounds)` if
    /// `min >= max`. An inverted or empty interval would admit no
    /// weight at all, silently killing every cell; it is rejected
    /// here instead.
    pub fn new(min: f64, max: f64) -> Result<Self, ThresholdError> {
        if !min.is_finite() {
            return Err(ThresholdError::NonFinite { value: min });
        }
        if !max.is_finite() {
            return Err(ThresholdError::NonFinite { value: max });
        }
        if min >= max {
            return Err(ThresholdError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound, excluded from the interval.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound, excluded from the interval.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` lies strictly inside the interval.
    ///
    /// Both endpoints are excluded: a weight exactly equal to `min` or
    /// `max` is not within.
    pub fn within(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }
}
