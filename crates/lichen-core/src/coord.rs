//! Grid coordinates, cells, and the Moore neighbourhood offset tables.

use smallvec::SmallVec;
use std::fmt;

/// The 4 orthogonal offsets: W, E, N, S.
///
/// An orthogonal neighbour shares a row or a column with the centre
/// cell and contributes full weight to the neighbour sum.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The 4 diagonal offsets: NW, NE, SW, SE.
///
/// Diagonal neighbours contribute the fractional kernel weight.
pub const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Neighbour list sized for the full Moore neighbourhood.
pub type NeighbourList = SmallVec<[Coord; 8]>;

/// A grid position. Immutable once assigned to a cell.
///
/// Coordinates are signed so that neighbour arithmetic at the grid
/// boundary stays in range; positions outside the grid are permanently
/// dead and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate displaced by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The 4 orthogonal neighbours, unbounded.
    pub fn orthogonal_neighbours(self) -> [Coord; 4] {
        ORTHOGONAL_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// The 4 diagonal neighbours, unbounded.
    pub fn diagonal_neighbours(self) -> [Coord; 4] {
        DIAGONAL_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// All 8 Moore neighbours, unbounded.
    ///
    /// Callers are responsible for bounds filtering; the coordinate
    /// itself knows nothing about grid extents.
    pub fn moore_neighbours(self) -> NeighbourList {
        ORTHOGONAL_OFFSETS
            .iter()
            .chain(DIAGONAL_OFFSETS.iter())
            .map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A grid position plus its alive/dead state.
///
/// Cells are value snapshots: they have no identity beyond their
/// coordinate, and a fresh set is produced each generation. The grid is
/// the sole owner of cell state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The cell's position.
    pub coord: Coord,
    /// Whether the cell is alive.
    pub alive: bool,
}

impl Cell {
    /// Create a cell from its position and state.
    pub const fn new(coord: Coord, alive: bool) -> Self {
        Self { coord, alive }
    }
}
