//! The [`FieldSource`] trait and initializer error type.

use lichen_grid::{FieldFill, GridError};
use std::error::Error;
use std::fmt;

/// The capability of producing an initial grid.
///
/// Implementors return the populated grid together with its declared
/// dimensions ([`FieldFill`]); the declared values must match the
/// grid's actual extents. Exactly two implementations exist —
/// [`RandomField`](crate::RandomField) and [`OneLine`](crate::OneLine);
/// no deeper hierarchy is warranted.
pub trait FieldSource {
    /// Produce the generation-0 grid.
    fn fill_field(&self) -> Result<FieldFill, SeedError>;
}

/// Errors from field initializer construction and filling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// Rareness modulus below 2 — the predicate `draw % rareness == 1`
    /// degenerates (modulo by zero, or a constant outcome).
    InvalidRareness {
        /// The supplied rareness.
        rareness: u32,
    },
    /// Grid construction failed.
    Grid(GridError),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRareness { rareness } => {
                write!(f, "rareness must be at least 2, got {rareness}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SeedError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
