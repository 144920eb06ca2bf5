//! Simulation configuration and validation.

use crate::error::EngineError;
use lichen_core::{Threshold, WeightKernel};

/// Tunable parameters for a simulation run.
///
/// Plain numeric fields so a driver can populate them from whatever
/// surface it likes; [`validate`](SimConfig::validate) turns them into
/// the checked value types the engine holds. Defaults mirror the
/// reference configuration: threshold `(1.99, 2.99)`, diagonal weight
/// `0.5`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Lower threshold bound, excluded from the interval.
    pub threshold_min: f64,
    /// Upper threshold bound, excluded from the interval.
    pub threshold_max: f64,
    /// Weight contributed by each alive diagonal neighbour.
    pub diagonal_weight: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            threshold_min: 1.99,
            threshold_max: 2.99,
            diagonal_weight: WeightKernel::DEFAULT_DIAGONAL,
        }
    }
}

impl SimConfig {
    /// Validate the configuration into checked value types.
    ///
    /// Returns `Err(EngineError::Threshold)` for an inverted, empty, or
    /// non-finite threshold interval, `Err(EngineError::Kernel)` for a
    /// NaN, infinite, or negative diagonal weight.
    pub fn validate(&self) -> Result<(Threshold, WeightKernel), EngineError> {
        let threshold = Threshold::new(self.threshold_min, self.threshold_max)?;
        let kernel = WeightKernel::new(self.diagonal_weight)?;
        Ok((threshold, kernel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lichen_core::ThresholdError;

    #[test]
    fn default_config_validates() {
        let (threshold, kernel) = SimConfig::default().validate().unwrap();
        assert_eq!(threshold.min(), 1.99);
        assert_eq!(threshold.max(), 2.99);
        assert_eq!(kernel.diagonal(), 0.5);
    }

    #[test]
    fn inverted_threshold_is_rejected() {
        let cfg = SimConfig {
            threshold_min: 3.0,
            threshold_max: 2.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(EngineError::Threshold(ThresholdError::InvertedBounds { .. }))
        ));
    }

    #[test]
    fn bad_diagonal_weight_is_rejected() {
        let cfg = SimConfig {
            diagonal_weight: f64::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(EngineError::Kernel(_))));
    }

    #[test]
    fn reference_variant_weights_validate() {
        for w in [0.5, 0.49] {
            let cfg = SimConfig {
                diagonal_weight: w,
                ..SimConfig::default()
            };
            assert!(cfg.validate().is_ok(), "diagonal_weight={w}");
        }
    }
}
