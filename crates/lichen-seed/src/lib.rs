//! Field initializers for Lichen simulations.
//!
//! A field initializer produces the generation-0 grid. Two are
//! provided behind the [`FieldSource`] trait:
//!
//! - [`RandomField`] — uniform random fill with a configurable
//!   rareness modulus, seeded for deterministic replay.
//! - [`OneLine`] — a fixed 3x3 pattern with the middle column alive,
//!   for exercising the update rule in isolation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod one_line;
pub mod random;
pub mod source;

pub use one_line::OneLine;
pub use random::{RandomField, RandomFieldBuilder};
pub use source::{FieldSource, SeedError};
