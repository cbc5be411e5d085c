//! Grid assembly — the engine's public generate surface.
//!
//! A [`SwatchGrid`] is the finished product: a recipe's base sequence run
//! through a distribution, ready for the presentation layer to render. The
//! engine itself is stateless; selection state (which names are currently
//! chosen) belongs to the caller.

use thiserror::Error;

use crate::GRID_SIZE;
use crate::distribution::DistributionKind;
use crate::recipe::{self, RecipeKind};
use crate::rng::Xorshift32;
use crate::vocab::ColorName;

/// Palette selected when the caller supplies no name.
pub const DEFAULT_PALETTE: &str = "warm";

/// Distribution selected when the caller supplies no name.
pub const DEFAULT_DISTRIBUTION: &str = "random";

/// The caller asked for a distribution the engine does not know.
///
/// Unlike palette names (which fall back to solid blue), distribution
/// names are supplied from a fixed set the caller enumerates, so a miss
/// is a caller bug and surfaces as an error instead of a silent default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown distribution '{0}' (expected one of: random, gradient, alternating, symmetrical, waves)")]
pub struct UnknownDistribution(pub String);

/// A fully generated swatch grid.
#[derive(Debug, Clone)]
pub struct SwatchGrid {
    /// The palette name as requested — kept verbatim even when it fell
    /// back to the default recipe, so the caller can still display it.
    pub palette: String,

    /// The distribution that shaped the final layout.
    pub distribution: DistributionKind,

    /// The seed that produced this grid. Re-running
    /// [`SwatchGrid::generate`] with it reproduces the grid exactly.
    pub seed: u32,

    /// Exactly [`GRID_SIZE`] colors, never mutated after construction.
    pub colors: Vec<ColorName>,
}

impl SwatchGrid {
    /// Generate a grid from a palette name, a distribution name, and a
    /// seed.
    ///
    /// An unknown palette name falls back to solid blue.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDistribution`] if `distribution` is not one of
    /// the five known names.
    pub fn generate(
        palette: &str,
        distribution: &str,
        seed: u32,
    ) -> Result<Self, UnknownDistribution> {
        let dist = DistributionKind::from_name(distribution)
            .ok_or_else(|| UnknownDistribution(distribution.to_string()))?;

        let mut rng = Xorshift32::new(seed);
        let base = RecipeKind::from_name(palette)
            .map_or_else(recipe::fallback, |r| r.generate(&mut rng));
        let colors = dist.apply(&base, &mut rng);
        debug_assert_eq!(colors.len(), GRID_SIZE, "distribution changed the grid length");

        Ok(Self {
            palette: palette.to_string(),
            distribution: dist,
            seed,
            colors,
        })
    }

    /// Generate with a clock-derived seed — each call produces a fresh
    /// grid, which is what the interactive caller wants.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDistribution`] if `distribution` is not one of
    /// the five known names.
    pub fn generate_random(
        palette: &str,
        distribution: &str,
    ) -> Result<Self, UnknownDistribution> {
        Self::generate(palette, distribution, Xorshift32::entropy_seed())
    }

    /// Swatch labels for display, via the vocabulary's reverse lookup.
    ///
    /// Resolved through the display value rather than the identifier so a
    /// color that somehow escaped the vocabulary shows up as `"unknown"`
    /// instead of a wrong label.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.colors
            .iter()
            .map(|c| ColorName::from_hex(c.hex()).map_or("unknown", ColorName::label))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_pairing_yields_a_full_grid() {
        for &recipe in RecipeKind::all() {
            for &dist in DistributionKind::all() {
                let grid = SwatchGrid::generate(recipe.name(), dist.name(), 42)
                    .unwrap();
                assert_eq!(
                    grid.colors.len(),
                    GRID_SIZE,
                    "{} / {} wrong length",
                    recipe.name(),
                    dist.name()
                );
            }
        }
    }

    /// Every emitted color belongs to the vocabulary (trivially true for
    /// the enum, checked through the display-value reverse lookup).
    #[test]
    fn every_pairing_stays_in_vocabulary() {
        for &recipe in RecipeKind::all() {
            for &dist in DistributionKind::all() {
                let grid = SwatchGrid::generate(recipe.name(), dist.name(), 7)
                    .unwrap();
                for label in grid.labels() {
                    assert_ne!(label, "unknown");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_grid() {
        for &dist in DistributionKind::all() {
            let a = SwatchGrid::generate("oneOff", dist.name(), 1234).unwrap();
            let b = SwatchGrid::generate("oneOff", dist.name(), 1234).unwrap();
            assert_eq!(a.colors, b.colors, "{} not reproducible", dist.name());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = SwatchGrid::generate("warm", "random", 1).unwrap();
        let b = SwatchGrid::generate("warm", "random", 2).unwrap();
        // Identical shuffles from different seeds are possible in theory;
        // these two seeds are pinned as differing.
        assert_ne!(a.colors, b.colors);
    }

    #[test]
    fn unknown_palette_falls_back_to_blue() {
        let grid = SwatchGrid::generate("unknownName", "random", 42).unwrap();
        assert_eq!(grid.colors, vec![ColorName::Blue; GRID_SIZE]);
        assert_eq!(grid.palette, "unknownName");
    }

    #[test]
    fn unknown_distribution_is_an_error() {
        let err = SwatchGrid::generate("warm", "unknownDistribution", 42)
            .unwrap_err();
        assert_eq!(err, UnknownDistribution("unknownDistribution".to_string()));
        assert!(err.to_string().contains("unknownDistribution"));
    }

    #[test]
    fn monochrome_survives_every_distribution() {
        for &dist in DistributionKind::all() {
            let grid = SwatchGrid::generate("monochrome", dist.name(), 42)
                .unwrap();
            let first = grid.colors[0];
            assert!(
                grid.colors.iter().all(|&c| c == first),
                "{} broke monochrome",
                dist.name()
            );
            assert_ne!(first, ColorName::Red);
        }
    }

    #[test]
    fn warm_alternating_exact_sequence() {
        use ColorName::{Orange, Red, Yellow};
        let grid = SwatchGrid::generate("warm", "alternating", 42).unwrap();
        for (i, &c) in grid.colors.iter().enumerate() {
            assert_eq!(c, [Yellow, Orange, Red][i % 3], "slot {i}");
        }
        assert_eq!(grid.colors[GRID_SIZE - 1], Yellow);
    }

    /// After gradient, custom1's five black accents sit contiguously.
    #[test]
    fn custom1_gradient_groups_black() {
        let grid = SwatchGrid::generate("custom1", "gradient", 42).unwrap();
        let black_slots: Vec<usize> = grid
            .colors
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == ColorName::Black)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(black_slots.len(), 5);
        let first = black_slots[0];
        assert_eq!(black_slots, (first..first + 5).collect::<Vec<usize>>());
    }

    #[test]
    fn minimal_random_keeps_the_split() {
        let grid = SwatchGrid::generate("minimal", "random", 42).unwrap();
        let mut unique: Vec<ColorName> = grid.colors.clone();
        unique.sort_by_key(|c| c.hex());
        unique.dedup();
        assert_eq!(unique.len(), 2);
        let n = grid.colors.iter().filter(|&&c| c == unique[0]).count();
        assert!(n == 12 || n == 13);
    }

    #[test]
    fn defaults_are_known_names() {
        assert!(RecipeKind::from_name(DEFAULT_PALETTE).is_some());
        assert!(DistributionKind::from_name(DEFAULT_DISTRIBUTION).is_some());
        assert!(SwatchGrid::generate(DEFAULT_PALETTE, DEFAULT_DISTRIBUTION, 42).is_ok());
    }

    #[test]
    fn generate_random_produces_full_grid() {
        let grid = SwatchGrid::generate_random("sunset", "waves").unwrap();
        assert_eq!(grid.colors.len(), GRID_SIZE);
        // The stored seed reproduces the grid.
        let again = SwatchGrid::generate("sunset", "waves", grid.seed).unwrap();
        assert_eq!(grid.colors, again.colors);
    }

    #[test]
    fn labels_match_colors() {
        let grid = SwatchGrid::generate("cool", "gradient", 42).unwrap();
        let labels = grid.labels();
        assert_eq!(labels.len(), GRID_SIZE);
        for (c, label) in grid.colors.iter().zip(&labels) {
            assert_eq!(c.label(), *label);
        }
    }
}
