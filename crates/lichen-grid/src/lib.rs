//! Fixed-size boolean grid storage for Lichen simulations.
//!
//! [`Grid`] is the single owner of cell state: a two-dimensional array
//! of alive/dead booleans with fixed dimensions and a closed,
//! non-wrapping boundary. [`FieldFill`] carries a freshly initialized
//! grid together with the dimensions its initializer declared for it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;

pub use error::GridError;
pub use field::FieldFill;
pub use grid::Grid;
