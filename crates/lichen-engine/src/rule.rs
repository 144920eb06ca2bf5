//! The weighted-neighbour update rule.

use lichen_core::{Coord, Threshold, WeightKernel};
use lichen_grid::Grid;

/// Weighted sum of alive Moore neighbours around `coord`.
///
/// Orthogonal alive neighbours contribute [`WeightKernel::ORTHOGONAL`]
/// each, diagonal alive neighbours contribute the kernel's diagonal
/// weight. Out-of-range offsets contribute 0 — the boundary is closed
/// and nothing wraps. For `k` orthogonal and `m` diagonal alive
/// neighbours the result is exactly `k * 1.0 + m * w`.
pub fn neighbour_weight(grid: &Grid, coord: Coord, kernel: &WeightKernel) -> f64 {
    let mut weight = 0.0;
    for nb in coord.orthogonal_neighbours() {
        if grid.is_alive(nb) {
            weight += WeightKernel::ORTHOGONAL;
        }
    }
    for nb in coord.diagonal_neighbours() {
        if grid.is_alive(nb) {
            weight += kernel.diagonal();
        }
    }
    weight
}

/// Next state of a cell with the given neighbour weight.
///
/// The rule is symmetric in survive/birth: a live cell survives and a
/// dead cell is born under exactly the same condition, so the current
/// state does not appear here. A weight on either threshold endpoint
/// is outside the open interval and yields a dead cell.
pub fn next_state(threshold: &Threshold, weight: f64) -> bool {
    threshold.within(weight)
}
