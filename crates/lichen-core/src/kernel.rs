//! The neighbour weighting kernel.

use crate::error::KernelError;

/// Per-neighbour contribution weights for the Moore neighbourhood.
///
/// Orthogonal neighbours (same row or same column) always contribute
/// `1.0`; diagonal neighbours contribute the configurable fractional
/// weight. The fractional diagonal is what distinguishes this rule from
/// classic integer-counting Life: it admits thresholds that no integer
/// neighbour count can hit.
///
/// Reference configurations use `0.5` and `0.49` for the diagonal;
/// `0.5` is the default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightKernel {
    diagonal: f64,
}

impl WeightKernel {
    /// The weight of an orthogonal alive neighbour.
    pub const ORTHOGONAL: f64 = 1.0;

    /// The default diagonal weight.
    pub const DEFAULT_DIAGONAL: f64 = 0.5;

    /// Create a kernel with the given diagonal weight.
    ///
    /// Returns `Err(KernelError::InvalidDiagonal)` if the weight is
    /// NaN, infinite, or negative.
    pub fn new(diagonal: f64) -> Result<Self, KernelError> {
        if !diagonal.is_finite() || diagonal < 0.0 {
            return Err(KernelError::InvalidDiagonal { value: diagonal });
        }
        Ok(Self { diagonal })
    }

    /// The weight of a diagonal alive neighbour.
    pub fn diagonal(&self) -> f64 {
        self.diagonal
    }
}

impl Default for WeightKernel {
    fn default() -> Self {
        Self {
            diagonal: Self::DEFAULT_DIAGONAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_diagonal_is_half() {
        assert_eq!(WeightKernel::default().diagonal(), 0.5);
    }

    #[test]
    fn new_accepts_reference_values() {
        assert_eq!(WeightKernel::new(0.5).unwrap().diagonal(), 0.5);
        assert_eq!(WeightKernel::new(0.49).unwrap().diagonal(), 0.49);
    }

    #[test]
    fn new_rejects_negative() {
        assert!(matches!(
            WeightKernel::new(-0.1),
            Err(KernelError::InvalidDiagonal { .. })
        ));
    }

    #[test]
    fn new_rejects_nan_and_infinity() {
        assert!(WeightKernel::new(f64::NAN).is_err());
        assert!(WeightKernel::new(f64::INFINITY).is_err());
    }
}
