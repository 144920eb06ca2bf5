//! The double-buffered simulation engine.

use crate::config::SimConfig;
use crate::error::EngineError;
use crate::rule;
use lichen_core::{Coord, Generation, Threshold, WeightKernel};
use lichen_grid::{FieldFill, Grid};

/// Owns the current grid and advances it one generation at a time.
///
/// Two grid buffers alternate between "current" (readable) and
/// "staging" (written during an advance) roles. [`Engine::advance`]
/// computes every cell of the staging buffer from the current buffer,
/// then swaps the two — so each update sees a complete snapshot of the
/// prior generation and never a partially updated one.
///
/// The engine is single-threaded by construction: `advance` takes
/// `&mut self`, which rules out concurrent steps or reads mid-step.
pub struct Engine {
    current: Grid,
    staging: Grid,
    threshold: Threshold,
    kernel: WeightKernel,
    generation: Generation,
}

impl Engine {
    /// Create an engine from an initializer's output.
    ///
    /// Validates `config` and checks the initializer's declared
    /// dimensions against the grid's actual extents, returning
    /// `Err(EngineError::DimensionMismatch)` if they disagree.
    pub fn new(fill: FieldFill, config: &SimConfig) -> Result<Self, EngineError> {
        if !fill.dimensions_consistent() {
            return Err(EngineError::DimensionMismatch {
                declared: (fill.x_size, fill.y_size),
                actual: (fill.grid.x_size(), fill.grid.y_size()),
            });
        }
        Self::from_grid(fill.grid, config)
    }

    /// Create an engine directly from a grid.
    ///
    /// For callers that built the grid themselves and have no separate
    /// dimension declaration to check.
    pub fn from_grid(grid: Grid, config: &SimConfig) -> Result<Self, EngineError> {
        let (threshold, kernel) = config.validate()?;
        let staging = grid.clone();
        Ok(Self {
            current: grid,
            staging,
            threshold,
            kernel,
            generation: Generation(0),
        })
    }

    /// Advance the simulation by one generation.
    ///
    /// Total: always succeeds for any grid the engine was constructed
    /// with. Every neighbour lookup reads the prior generation; the
    /// fully computed next grid replaces the current one atomically
    /// (a buffer swap, no reallocation).
    pub fn advance(&mut self) {
        for coord in self.current.coords() {
            let weight = rule::neighbour_weight(&self.current, coord, &self.kernel);
            self.staging.set(coord, rule::next_state(&self.threshold, weight));
        }
        std::mem::swap(&mut self.current, &mut self.staging);
        self.generation = self.generation.next();
    }

    /// Weighted sum of alive Moore neighbours around `(x, y)` in the
    /// current generation.
    pub fn neighbour_weight(&self, x: i32, y: i32) -> f64 {
        rule::neighbour_weight(&self.current, Coord::new(x, y), &self.kernel)
    }

    /// Read-only view of the present grid state.
    pub fn current_grid(&self) -> &Grid {
        &self.current
    }

    /// The number of generations advanced so far.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The threshold governing survival and birth.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The neighbour weighting kernel.
    pub fn kernel(&self) -> WeightKernel {
        self.kernel
    }

    /// Grid width in cells.
    pub fn x_size(&self) -> u32 {
        self.current.x_size()
    }

    /// Grid height in cells.
    pub fn y_size(&self) -> u32 {
        self.current.y_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lichen_core::ThresholdError;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn config(min: f64, max: f64, w: f64) -> SimConfig {
        SimConfig {
            threshold_min: min,
            threshold_max: max,
            diagonal_weight: w,
        }
    }

    // ── Construction tests ──────────────────────────────────────

    #[test]
    fn new_accepts_consistent_fill() {
        let fill = FieldFill::from_grid(Grid::new(4, 4).unwrap());
        let engine = Engine::new(fill, &SimConfig::default()).unwrap();
        assert_eq!(engine.x_size(), 4);
        assert_eq!(engine.generation(), Generation(0));
    }

    #[test]
    fn new_rejects_dimension_mismatch() {
        let fill = FieldFill {
            grid: Grid::new(3, 3).unwrap(),
            x_size: 3,
            y_size: 5,
        };
        assert!(matches!(
            Engine::new(fill, &SimConfig::default()),
            Err(EngineError::DimensionMismatch {
                declared: (3, 5),
                actual: (3, 3),
            })
        ));
    }

    #[test]
    fn new_rejects_inverted_threshold() {
        let fill = FieldFill::from_grid(Grid::new(3, 3).unwrap());
        let result = Engine::new(fill, &config(2.99, 1.99, 0.5));
        assert!(matches!(
            result,
            Err(EngineError::Threshold(ThresholdError::InvertedBounds { .. }))
        ));
    }

    // ── Update rule tests ───────────────────────────────────────

    #[test]
    fn isolated_cell_dies_in_one_step() {
        let grid = Grid::from_fn(5, 5, |coord| coord == c(2, 2)).unwrap();
        let mut engine = Engine::from_grid(grid, &config(0.0, 10.0, 0.5)).unwrap();
        // Weight 0.0 sits on the open interval's lower endpoint, so
        // even this all-admitting threshold kills an isolated cell.
        engine.advance();
        assert!(!engine.current_grid().is_alive(c(2, 2)));
    }

    #[test]
    fn lone_corner_cell_pattern_dies_out() {
        // Scenario: 3x3, only (1, 0) alive, w = 0.5, threshold
        // (1.99, 3.49). Every cell's weight is at most 1.0, which is
        // below the interval, so the whole pattern dies in one step.
        let grid = Grid::from_fn(3, 3, |coord| coord == c(1, 0)).unwrap();
        let mut engine = Engine::from_grid(grid, &config(1.99, 3.49, 0.5)).unwrap();
        assert_eq!(engine.neighbour_weight(1, 1), 1.0);
        assert_eq!(engine.neighbour_weight(0, 0), 1.0);
        engine.advance();
        assert_eq!(engine.current_grid().live_count(), 0);
        assert_eq!(engine.generation(), Generation(1));
    }

    #[test]
    fn advance_reads_only_the_prior_snapshot() {
        // A vertical line under (1.99, 3.49): the centre survives
        // (weight 2.0) and the side midpoints are born (1.0 orthogonal
        // + two diagonals at 0.5). If updates leaked within a step the
        // side midpoints would see already-killed line ends and come
        // out differently.
        let grid = Grid::from_fn(3, 3, |coord| coord.x == 1).unwrap();
        let mut engine = Engine::from_grid(grid, &config(1.99, 3.49, 0.5)).unwrap();
        assert_eq!(engine.neighbour_weight(1, 1), 2.0);
        assert_eq!(engine.neighbour_weight(0, 1), 2.0);
        engine.advance();
        let g = engine.current_grid();
        assert!(g.is_alive(c(1, 1)), "centre survives");
        assert!(g.is_alive(c(0, 1)), "west midpoint born");
        assert!(g.is_alive(c(2, 1)), "east midpoint born");
        assert!(!g.is_alive(c(1, 0)), "line end dies");
        assert!(!g.is_alive(c(1, 2)), "line end dies");
        assert_eq!(g.live_count(), 3);
    }

    #[test]
    fn narrower_threshold_kills_the_line() {
        // Same line, but an interval the weight 2.0 cannot enter:
        // the fractional diagonals leave every cell outside (2.99, 3.49).
        let grid = Grid::from_fn(3, 3, |coord| coord.x == 1).unwrap();
        let mut engine = Engine::from_grid(grid, &config(2.99, 3.49, 0.5)).unwrap();
        engine.advance();
        assert_eq!(engine.current_grid().live_count(), 0);
    }

    #[test]
    fn generation_counts_steps() {
        let grid = Grid::new(4, 4).unwrap();
        let mut engine = Engine::from_grid(grid, &SimConfig::default()).unwrap();
        for expected in 1..=5u64 {
            engine.advance();
            assert_eq!(engine.generation(), Generation(expected));
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let grid = Grid::new(6, 4).unwrap();
        let mut engine = Engine::from_grid(grid, &SimConfig::default()).unwrap();
        engine.advance();
        assert_eq!(engine.current_grid().live_count(), 0);
    }

    #[test]
    fn dimensions_never_change() {
        let grid = Grid::new(7, 3).unwrap();
        let mut engine = Engine::from_grid(grid, &SimConfig::default()).unwrap();
        for _ in 0..10 {
            engine.advance();
        }
        assert_eq!(engine.x_size(), 7);
        assert_eq!(engine.y_size(), 3);
    }
}
