//! Core types for the Lichen life simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared across the workspace: coordinates and cells,
//! the survive/birth threshold, the neighbour weighting kernel, the
//! generation counter, and the construction-time error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;
pub mod kernel;
pub mod threshold;

pub use coord::{Cell, Coord, NeighbourList, DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS};
pub use error::{KernelError, ThresholdError};
pub use id::Generation;
pub use kernel::WeightKernel;
pub use threshold::Threshold;
