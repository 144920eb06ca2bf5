//! Lichen: a weighted-neighbour variant of Conway's Game of Life.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Lichen sub-crates. For most users, adding `lichen` as a
//! single dependency is sufficient.
//!
//! The rule differs from classic Life in two ways: alive neighbours
//! are summed with weights (orthogonal `1.0`, diagonal a configurable
//! fraction, `0.5` by default), and a single open interval
//! `(min, max)` governs both survival and birth.
//!
//! # Quick start
//!
//! ```rust
//! use lichen::prelude::*;
//!
//! // A sparse random 32x32 field, deterministic for the seed.
//! let fill = RandomField::builder()
//!     .x_size(32)
//!     .y_size(32)
//!     .rareness(4)
//!     .seed(7)
//!     .build()
//!     .unwrap()
//!     .fill_field()
//!     .unwrap();
//!
//! let mut engine = Engine::new(
//!     fill,
//!     &SimConfig {
//!         threshold_min: 1.99,
//!         threshold_max: 3.49,
//!         diagonal_weight: 0.5,
//!     },
//! )
//! .unwrap();
//!
//! engine.advance();
//! assert_eq!(engine.generation(), Generation(1));
//! let _alive_now = engine.current_grid().live_count();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lichen-core` | `Coord`, `Cell`, `Threshold`, `WeightKernel`, `Generation` |
//! | [`grid`] | `lichen-grid` | The `Grid` container and `FieldFill` contract |
//! | [`seed`] | `lichen-seed` | Field initializers (`RandomField`, `OneLine`) |
//! | [`engine`] | `lichen-engine` | The double-buffered `Engine` and `SimConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`lichen-core`).
pub use lichen_core as types;

/// Grid storage and the initializer contract (`lichen-grid`).
pub use lichen_grid as grid;

/// Field initializers (`lichen-seed`).
pub use lichen_seed as seed;

/// The simulation engine (`lichen-engine`).
pub use lichen_engine as engine;

/// Common imports for typical Lichen usage.
///
/// ```rust
/// use lichen::prelude::*;
/// ```
pub mod prelude {
    pub use lichen_core::{Cell, Coord, Generation, Threshold, WeightKernel};
    pub use lichen_engine::{Engine, EngineError, SimConfig};
    pub use lichen_grid::{FieldFill, Grid, GridError};
    pub use lichen_seed::{FieldSource, OneLine, RandomField, SeedError};
}
