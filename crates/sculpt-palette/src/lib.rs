//! # sculpt-palette — Sculpture Color Palette Engine
//!
//! Generates a 25-circle color grid from two selections: a named palette
//! recipe and a named spatial distribution. One function
//! ([`SwatchGrid::generate`]) composes the whole pipeline; the caller only
//! supplies the two names and, when reproducibility matters, a seed.
//!
//! # Architecture
//!
//! ```text
//! palette name + distribution name + seed
//!     │
//!     ▼
//! vocab.rs:        the fixed 7-color vocabulary (hex, labels, reverse lookup)
//!     │
//!     ▼
//! recipe.rs:       13 named recipes → base sequence of 25 colors
//!     │
//!     ▼
//! distribution.rs: 5 named transforms → final spatial layout
//!     │
//!     ▼
//! grid.rs:         SwatchGrid assembly + error surface
//! ```
//!
//! # Randomness
//!
//! Several recipes and the `random` distribution draw from a seeded
//! xorshift PRNG ([`rng::Xorshift32`]) that is passed down explicitly —
//! there is no ambient random state, so the same seed always reproduces
//! the same grid.

pub mod distribution;
pub mod grid;
pub mod recipe;
pub mod rng;
pub mod vocab;

pub use distribution::DistributionKind;
pub use grid::{DEFAULT_DISTRIBUTION, DEFAULT_PALETTE, SwatchGrid, UnknownDistribution};
pub use recipe::RecipeKind;
pub use vocab::ColorName;

/// Number of circles in the rendered grid. Every recipe output and every
/// distribution output has exactly this length.
pub const GRID_SIZE: usize = 25;
