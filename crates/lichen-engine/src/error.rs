//! Engine construction error types.

use lichen_core::{KernelError, ThresholdError};
use std::error::Error;
use std::fmt;

/// Errors from [`Engine`](crate::Engine) construction.
///
/// All of them are construction-time and fatal; once an engine exists,
/// [`advance`](crate::Engine::advance) is total and never errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineError {
    /// The threshold interval failed validation.
    Threshold(ThresholdError),
    /// The weighting kernel failed validation.
    Kernel(KernelError),
    /// An initializer's declared dimensions disagree with the grid's
    /// actual extents.
    DimensionMismatch {
        /// Dimensions the initializer declared.
        declared: (u32, u32),
        /// Dimensions the grid actually has.
        actual: (u32, u32),
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Threshold(e) => write!(f, "threshold: {e}"),
            Self::Kernel(e) => write!(f, "kernel: {e}"),
            Self::DimensionMismatch { declared, actual } => write!(
                f,
                "initializer declared {}x{} but grid is {}x{}",
                declared.0, declared.1, actual.0, actual.1,
            ),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Threshold(e) => Some(e),
            Self::Kernel(e) => Some(e),
            Self::DimensionMismatch { .. } => None,
        }
    }
}

impl From<ThresholdError> for EngineError {
    fn from(e: ThresholdError) -> Self {
        Self::Threshold(e)
    }
}

impl From<KernelError> for EngineError {
    fn from(e: KernelError) -> Self {
        Self::Kernel(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_display_names_both_sizes() {
        let msg = EngineError::DimensionMismatch {
            declared: (3, 4),
            actual: (3, 3),
        }
        .to_string();
        assert!(msg.contains("3x4"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn wrapped_errors_are_chained() {
        let err = EngineError::from(ThresholdError::InvertedBounds { min: 2.0, max: 1.0 });
        assert!(Error::source(&err).is_some());
    }
}
