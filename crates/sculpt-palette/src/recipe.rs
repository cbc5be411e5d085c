//! Palette recipes — named generators for the base color sequence.
//!
//! Each recipe produces an ordered sequence of exactly [`GRID_SIZE`] colors
//! from a small base set, before any spatial distribution is applied. Some
//! recipes are fixed cyclic fills; others draw one or two colors at random,
//! so every recipe takes the PRNG even when it ignores it.

use crate::GRID_SIZE;
use crate::rng::Xorshift32;
use crate::vocab::ColorName;

/// The kind of recipe used to generate the base sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeKind {
    /// Cyclic red / yellow / blue.
    Primary,
    /// Cyclic yellow / orange / red.
    Warm,
    /// Cyclic blue / darkPurple / black.
    Cool,
    /// One randomly chosen color fills the whole grid.
    Monochrome,
    /// Cyclic fill over all six non-red colors.
    Full,
    /// Cyclic yellow / orange / pink.
    Light,
    /// 80% cyclic yellow / orange / pink, 20% black accent.
    Custom1,
    /// 80% one random color, 20% a different random accent.
    OneOff,
    /// Cyclic yellow / orange / pink / darkPurple.
    Sunset,
    /// 80% cyclic pink / yellow, 20% black accent.
    Dawn,
    /// Cyclic yellow / black / blue.
    Contrast,
    /// Two random colors split 50/50.
    Minimal,
    /// 90% cyclic warm colors, 10% independently sampled cool colors.
    BurntTip,
}

impl RecipeKind {
    /// Generate the base sequence for this recipe.
    ///
    /// Always returns exactly [`GRID_SIZE`] colors.
    #[must_use]
    pub fn generate(self, rng: &mut Xorshift32) -> Vec<ColorName> {
        generate(self, rng)
    }

    /// The recipe's selectable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Monochrome => "monochrome",
            Self::Full => "full",
            Self::Light => "light",
            Self::Custom1 => "custom1",
            Self::OneOff => "oneOff",
            Self::Sunset => "sunset",
            Self::Dawn => "dawn",
            Self::Contrast => "contrast",
            Self::Minimal => "minimal",
            Self::BurntTip => "burntTip",
        }
    }

    /// Parse a recipe from its name (exact match).
    ///
    /// Unknown names are `None`; the composition layer maps that to the
    /// solid-blue [`fallback`] rather than an error.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|r| r.name() == name).copied()
    }

    /// All thirteen recipes, in presentation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Primary, Self::Warm, Self::Cool, Self::Monochrome,
            Self::Full, Self::Light, Self::Custom1, Self::OneOff,
            Self::Sunset, Self::Dawn, Self::Contrast, Self::Minimal,
            Self::BurntTip,
        ]
    }
}

/// Slots filled by the majority block in 80/20 accent recipes.
const MAJORITY: usize = GRID_SIZE * 8 / 10;

/// Slots filled by the warm block in `burntTip` (90/10 split).
const BURNT_WARM: usize = GRID_SIZE * 9 / 10;

/// The candidate set for random draws — red is reserved for the fixed
/// cyclic recipes and never sampled.
const SAMPLE_SET: [ColorName; 6] = [
    ColorName::Blue, ColorName::Pink, ColorName::Yellow,
    ColorName::Orange, ColorName::DarkPurple, ColorName::Black,
];

/// Cyclic fill: repeat `base` end-to-end, truncating the final repetition.
fn repeat_to(base: &[ColorName], count: usize) -> Vec<ColorName> {
    base.iter().copied().cycle().take(count).collect()
}

/// Extend `main` with copies of `accent` up to the full grid size.
fn fill_accent(mut main: Vec<ColorName>, accent: ColorName) -> Vec<ColorName> {
    main.resize(GRID_SIZE, accent);
    main
}

/// Pick a color from [`SAMPLE_SET`] that differs from `taken`.
fn pick_distinct(rng: &mut Xorshift32, taken: ColorName) -> ColorName {
    let rest: Vec<ColorName> =
        SAMPLE_SET.iter().copied().filter(|&c| c != taken).collect();
    *rng.pick(&rest)
}

/// The sequence every unrecognized palette name falls back to.
#[must_use]
pub fn fallback() -> Vec<ColorName> {
    vec![ColorName::Blue; GRID_SIZE]
}

/// Core recipe dispatch.
fn generate(kind: RecipeKind, rng: &mut Xorshift32) -> Vec<ColorName> {
    use ColorName::{Black, Blue, DarkPurple, Orange, Pink, Red, Yellow};

    match kind {
        RecipeKind::Primary => repeat_to(&[Red, Yellow, Blue], GRID_SIZE),
        RecipeKind::Warm => repeat_to(&[Yellow, Orange, Red], GRID_SIZE),
        RecipeKind::Cool => repeat_to(&[Blue, DarkPurple, Black], GRID_SIZE),
        RecipeKind::Monochrome => vec![*rng.pick(&SAMPLE_SET); GRID_SIZE],
        RecipeKind::Full => repeat_to(&SAMPLE_SET, GRID_SIZE),
        RecipeKind::Light => repeat_to(&[Yellow, Orange, Pink], GRID_SIZE),
        RecipeKind::Custom1 => {
            fill_accent(repeat_to(&[Yellow, Orange, Pink], MAJORITY), Black)
        }
        RecipeKind::OneOff => {
            let main = *rng.pick(&SAMPLE_SET);
            let accent = pick_distinct(rng, main);
            fill_accent(vec![main; MAJORITY], accent)
        }
        RecipeKind::Sunset => {
            repeat_to(&[Yellow, Orange, Pink, DarkPurple], GRID_SIZE)
        }
        RecipeKind::Dawn => {
            fill_accent(repeat_to(&[Pink, Yellow], MAJORITY), Black)
        }
        RecipeKind::Contrast => repeat_to(&[Yellow, Black, Blue], GRID_SIZE),
        RecipeKind::Minimal => {
            // Two distinct colors, drawn without replacement, split 50/50
            // (the odd slot goes to the second color).
            let first = *rng.pick(&SAMPLE_SET);
            let second = pick_distinct(rng, first);
            fill_accent(vec![first; GRID_SIZE / 2], second)
        }
        RecipeKind::BurntTip => {
            let mut colors = repeat_to(&[Yellow, Orange, Pink], BURNT_WARM);
            // Each tip slot is sampled independently.
            for _ in BURNT_WARM..GRID_SIZE {
                colors.push(*rng.pick(&[Blue, Black, DarkPurple]));
            }
            colors
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
