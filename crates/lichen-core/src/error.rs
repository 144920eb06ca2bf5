//! Construction-time error types for the core value types.
//!
//! The simulation core has no recoverable-error surface during normal
//! operation; everything that can fail, fails when a value is built.

use std::error::Error;
use std::fmt;

/// Errors from [`Threshold::new`](crate::Threshold::new).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThresholdError {
    /// `min >= max` — the open interval would be empty or inverted and
    /// no neighbour weight could ever be within it.
    InvertedBounds {
        /// The supplied lower bound.
        min: f64,
        /// The supplied upper bound.
        max: f64,
    },
    /// A bound is NaN or infinite.
    NonFinite {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { min, max } => {
                write!(f, "threshold min ({min}) must be below max ({max})")
            }
            Self::NonFinite { value } => {
                write!(f, "threshold bound must be finite, got {value}")
            }
        }
    }
}

impl Error for ThresholdError {}

/// Errors from [`WeightKernel::new`](crate::WeightKernel::new).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KernelError {
    /// The diagonal weight is NaN, infinite, or negative.
    InvalidDiagonal {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDiagonal { value } => {
                write!(f, "diagonal weight must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for KernelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_error_display() {
        let msg = ThresholdError::InvertedBounds { min: 3.0, max: 2.0 }.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("below"));
    }

    #[test]
    fn kernel_error_display() {
        let msg = KernelError::InvalidDiagonal { value: -1.0 }.to_string();
        assert!(msg.contains("-1"));
    }
}
