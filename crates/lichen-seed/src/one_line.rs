//! Fixed-pattern field initializer: one vertical line.

use crate::source::{FieldSource, SeedError};
use lichen_grid::{FieldFill, Grid};

/// Produces a hardcoded 3x3 grid with the middle column alive.
///
/// A cell is alive iff its x-coordinate equals 1, ignoring any
/// requested size. Deterministic, so useful for testing the update
/// rule in isolation from random fills.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneLine;

impl OneLine {
    /// The fixed grid extent on both axes.
    pub const SIZE: u32 = 3;
}

impl FieldSource for OneLine {
    fn fill_field(&self) -> Result<FieldFill, SeedError> {
        let grid = Grid::from_fn(Self::SIZE, Self::SIZE, |coord| coord.x == 1)?;
        Ok(FieldFill::from_grid(grid))
    }
}
