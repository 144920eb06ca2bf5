//! Generation-update engine for the Lichen life simulation.
//!
//! [`Engine`] owns the current grid and advances it one generation at a
//! time under the weighted-neighbour rule: each cell's next state is
//! decided by whether the weighted sum of its alive Moore neighbours
//! falls strictly inside the configured open threshold interval — the
//! same interval for survival and for birth.
//!
//! Updates are simultaneous: every neighbour lookup within one
//! [`Engine::advance`] reads the prior generation's snapshot, held in
//! one of two buffers that swap roles each step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod rule;

pub use config::SimConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use rule::{neighbour_weight, next_state};
