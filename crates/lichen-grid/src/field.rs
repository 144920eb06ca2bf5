//! The [`FieldFill`] initializer contract.

use crate::grid::Grid;

/// A freshly initialized grid plus the dimensions its producer declared.
///
/// Field initializers return the populated grid together with the
/// extents they claim it has; the declared values are required to match
/// the grid's actual dimensions. The engine checks this contract at
/// construction rather than trusting it, surfacing a mismatch as an
/// error instead of silent out-of-bounds reads.
#[derive(Clone, Debug)]
pub struct FieldFill {
    /// The populated initial grid.
    pub grid: Grid,
    /// Declared width in cells.
    pub x_size: u32,
    /// Declared height in cells.
    pub y_size: u32,
}

impl FieldFill {
    /// Wrap a grid with declared dimensions taken from its actual extents.
    ///
    /// Initializers that build the grid themselves cannot get the
    /// declaration wrong this way.
    pub fn from_grid(grid: Grid) -> Self {
        let x_size = grid.x_size();
        let y_size = grid.y_size();
        Self {
            grid,
            x_size,
            y_size,
        }
    }

    /// Whether the declared dimensions match the grid's actual extents.
    pub fn dimensions_consistent(&self) -> bool {
        self.x_size == self.grid.x_size() && self.y_size == self.grid.y_size()
    }
}
