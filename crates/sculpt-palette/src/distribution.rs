//! Spatial distributions — named transforms over the base sequence.
//!
//! A distribution reorders or resamples a recipe's output into the final
//! grid layout. None of them invents colors: every output slot holds a
//! color already present in the input, cycled as needed when the input has
//! fewer unique colors than slots.

use crate::GRID_SIZE;
use crate::rng::Xorshift32;
use crate::vocab::ColorName;

/// The kind of spatial distribution applied to a base sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    /// Uniform shuffle of the input.
    Random,
    /// Same colors grouped contiguously, groups in first-appearance order.
    Gradient,
    /// Strict rotation through the unique colors.
    Alternating,
    /// Mirror-symmetric around the grid center.
    Symmetrical,
    /// Short waves repeating every four circles.
    Waves,
}

impl DistributionKind {
    /// Apply this distribution to a recipe's [`GRID_SIZE`]-color base
    /// sequence. The output has exactly [`GRID_SIZE`] colors; an empty
    /// input yields an empty output.
    #[must_use]
    pub fn apply(self, colors: &[ColorName], rng: &mut Xorshift32) -> Vec<ColorName> {
        apply(self, colors, rng)
    }

    /// The distribution's selectable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Gradient => "gradient",
            Self::Alternating => "alternating",
            Self::Symmetrical => "symmetrical",
            Self::Waves => "waves",
        }
    }

    /// Parse a distribution from its name (exact match).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|d| d.name() == name).copied()
    }

    /// All five distributions, in presentation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Random, Self::Gradient, Self::Alternating,
            Self::Symmetrical, Self::Waves,
        ]
    }
}

/// Wave period — the wave pattern repeats every four circles.
const WAVE_SIZE: usize = 4;

/// Unique colors of `colors`, in order of first appearance.
fn unique_in_order(colors: &[ColorName]) -> Vec<ColorName> {
    let mut unique = Vec::new();
    for &c in colors {
        if !unique.contains(&c) {
            unique.push(c);
        }
    }
    unique
}

/// Core distribution dispatch.
fn apply(kind: DistributionKind, colors: &[ColorName], rng: &mut Xorshift32) -> Vec<ColorName> {
    if colors.is_empty() {
        return Vec::new();
    }

    match kind {
        DistributionKind::Random => {
            let mut out = colors.to_vec();
            rng.shuffle(&mut out);
            out
        }
        DistributionKind::Gradient => {
            // Stable grouping, not sorting: groups appear in the order
            // their color first occurs, each with its full multiplicity.
            let unique = unique_in_order(colors);
            let mut out = Vec::with_capacity(colors.len());
            for group in unique {
                out.extend(colors.iter().copied().filter(|&c| c == group));
            }
            out
        }
        DistributionKind::Alternating => {
            let unique = unique_in_order(colors);
            (0..GRID_SIZE).map(|i| unique[i % unique.len()]).collect()
        }
        DistributionKind::Symmetrical => {
            let unique = unique_in_order(colors);
            let half = GRID_SIZE / 2;
            let first: Vec<ColorName> =
                (0..half).map(|i| unique[i % unique.len()]).collect();
            let mut out = Vec::with_capacity(GRID_SIZE);
            out.extend(&first);
            // Explicit center element so an odd grid still fills all slots.
            out.push(unique[half % unique.len()]);
            out.extend(first.iter().rev());
            out
        }
        DistributionKind::Waves => {
            // Floor division throughout: each wave of four circles walks
            // the unique colors front to back.
            let unique = unique_in_order(colors);
            (0..GRID_SIZE)
                .map(|i| {
                    let idx = (i % WAVE_SIZE) * unique.len() / WAVE_SIZE;
                    unique[idx % unique.len()]
                })
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
