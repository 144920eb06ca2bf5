//! Uniform random field initializer.
//!
//! Each cell draws an integer uniformly from `[0, rareness]` inclusive
//! and is alive iff `draw % rareness == 1`, giving roughly a
//! `1/rareness` chance of life per cell, independent across cells.
//!
//! Respects the determinism contract: the fill uses a seeded ChaCha8
//! RNG, so the same builder configuration always produces the same
//! field.
//!
//! Constructed via the builder pattern: [`RandomField::builder`].

use crate::source::{FieldSource, SeedError};
use lichen_grid::{FieldFill, Grid, GridError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A uniform random field initializer.
///
/// Produces an `x_size` by `y_size` grid where each cell is alive with
/// probability roughly `1/rareness` (exactly `1/(rareness + 1)` given
/// the inclusive draw range, which the reference behaviour preserves).
#[derive(Clone, Debug)]
pub struct RandomField {
    x_size: u32,
    y_size: u32,
    rareness: u32,
    seed: u64,
}

/// Builder for [`RandomField`].
///
/// Required fields: `x_size` and `y_size`.
pub struct RandomFieldBuilder {
    x_size: Option<u32>,
    y_size: Option<u32>,
    rareness: u32,
    seed: u64,
}

impl RandomField {
    /// Create a new builder for configuring a `RandomField`.
    pub fn builder() -> RandomFieldBuilder {
        RandomFieldBuilder {
            x_size: None,
            y_size: None,
            rareness: 2,
            seed: 0,
        }
    }

    /// Width of the produced grid.
    pub fn x_size(&self) -> u32 {
        self.x_size
    }

    /// Height of the produced grid.
    pub fn y_size(&self) -> u32 {
        self.y_size
    }

    /// The rareness modulus.
    pub fn rareness(&self) -> u32 {
        self.rareness
    }
}

impl RandomFieldBuilder {
    /// Set the grid width in cells.
    pub fn x_size(mut self, x_size: u32) -> Self {
        self.x_size = Some(x_size);
        self
    }

    /// Set the grid height in cells.
    pub fn y_size(mut self, y_size: u32) -> Self {
        self.y_size = Some(y_size);
        self
    }

    /// Set the rareness modulus (default: 2). Must be >= 2.
    ///
    /// Higher rareness means a sparser initial field.
    pub fn rareness(mut self, rareness: u32) -> Self {
        self.rareness = rareness;
        self
    }

    /// Set the RNG seed for deterministic fills (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the initializer, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `x_size` or `y_size` is not set or is 0
    /// - `rareness` is below 2
    pub fn build(self) -> Result<RandomField, SeedError> {
        let x_size = self.x_size.unwrap_or(0);
        let y_size = self.y_size.unwrap_or(0);
        if x_size == 0 || y_size == 0 {
            return Err(SeedError::Grid(GridError::EmptyGrid));
        }
        if self.rareness < 2 {
            return Err(SeedError::InvalidRareness {
                rareness: self.rareness,
            });
        }
        Ok(RandomField {
            x_size,
            y_size,
            rareness: self.rareness,
            seed: self.seed,
        })
    }
}

impl FieldSource for RandomField {
    fn fill_field(&self) -> Result<FieldFill, SeedError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let rareness = self.rareness;
        let grid = Grid::from_fn(self.x_size, self.y_size, |_| {
            let draw: u32 = rng.gen_range(0..=rareness);
            draw % rareness == 1
        })?;
        Ok(FieldFill::from_grid(grid))
    }
}
