//! The [`Grid`] container.

use crate::error::GridError;
use lichen_core::{Cell, Coord, NeighbourList};

/// A two-dimensional array of alive/dead cells, addressed `[x][y]`.
///
/// Dimensions are fixed at construction and never change. Every
/// coordinate in `[0, x_size) x [0, y_size)` maps to exactly one cell;
/// coordinates outside that range are permanently dead and contribute
/// nothing to neighbour sums (closed, non-wrapping boundary).
///
/// Storage is a single flat boolean vector in x-major order. Each
/// generation the engine computes a full replacement grid from the old
/// one; cells carry no identity across generations beyond their
/// position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    x_size: u32,
    y_size: u32,
    cells: Vec<bool>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-dead grid with the given dimensions.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(x_size: u32, y_size: u32) -> Result<Self, GridError> {
        if x_size == 0 || y_size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if x_size > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "x_size",
                value: x_size,
                max: Self::MAX_DIM,
            });
        }
        if y_size > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "y_size",
                value: y_size,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            x_size,
            y_size,
            cells: vec![false; (x_size as usize) * (y_size as usize)],
        })
    }

    /// Create a grid whose cell states come from `state(coord)`.
    pub fn from_fn(
        x_size: u32,
        y_size: u32,
        mut state: impl FnMut(Coord) -> bool,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(x_size, y_size)?;
        for x in 0..x_size as i32 {
            for y in 0..y_size as i32 {
                let coord = Coord::new(x, y);
                let alive = state(coord);
                grid.set(coord, alive);
            }
        }
        Ok(grid)
    }

    /// Width in cells.
    pub fn x_size(&self) -> u32 {
        self.x_size
    }

    /// Height in cells.
    pub fn y_size(&self) -> u32 {
        self.y_size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.x_size as usize) * (self.y_size as usize)
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.x_size as i32
            && coord.y < self.y_size as i32
    }

    fn index(&self, coord: Coord) -> usize {
        (coord.x as usize) * (self.y_size as usize) + (coord.y as usize)
    }

    /// The state at `coord`, or `None` if out of range.
    pub fn get(&self, coord: Coord) -> Option<bool> {
        if self.contains(coord) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Whether the cell at `coord` is alive.
    ///
    /// Out-of-range coordinates are permanently dead, so this is total:
    /// it returns `false` rather than an error beyond the boundary.
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Set the state at `coord`. Returns `false` (and writes nothing)
    /// if the coordinate is out of range.
    pub fn set(&mut self, coord: Coord, alive: bool) -> bool {
        if !self.contains(coord) {
            return false;
        }
        let idx = self.index(coord);
        self.cells[idx] = alive;
        true
    }

    /// The in-range Moore neighbours of `coord`, in offset-table order.
    ///
    /// Edge cells have 5, corner cells 3. Nothing wraps.
    pub fn bounded_neighbours(&self, coord: Coord) -> NeighbourList {
        coord
            .moore_neighbours()
            .into_iter()
            .filter(|nb| self.contains(*nb))
            .collect()
    }

    /// All in-range coordinates in x-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let (xs, ys) = (self.x_size as i32, self.y_size as i32);
        (0..xs).flat_map(move |x| (0..ys).map(move |y| Coord::new(x, y)))
    }

    /// All cells as value snapshots, in x-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.coords()
            .map(move |coord| Cell::new(coord, self.cells[self.index(coord)]))
    }

    /// Number of alive cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
