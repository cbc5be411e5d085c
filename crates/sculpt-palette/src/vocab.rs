//! The fixed color vocabulary — seven named sculpture colors.
//!
//! Every color the engine ever emits comes from this table. Recipes and
//! distributions reference colors by identifier only; the display value
//! (hex / rgb) is resolved here, and the reverse direction — display value
//! back to identifier — is what the presentation layer uses for swatch
//! labels.

use std::fmt;

/// One of the seven colors the sculpture grid is restricted to.
///
/// The hex values are pairwise distinct, so the reverse lookup
/// [`ColorName::from_hex`] is unambiguous. A unit test enforces this
/// whenever the table changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Blue,
    Pink,
    Yellow,
    Orange,
    DarkPurple,
    Black,
    Red,
}

impl ColorName {
    /// Display value as an sRGB hex string.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#3B82F6",
            Self::Pink => "#EC4899",
            Self::Yellow => "#EAB308",
            Self::Orange => "#F97316",
            Self::DarkPurple => "#7E22CE",
            Self::Black => "#171717",
            Self::Red => "#DC2626",
        }
    }

    /// Display value as 8-bit sRGB channels, for terminal rendering.
    #[must_use]
    pub const fn rgb8(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (59, 130, 246),
            Self::Pink => (236, 72, 153),
            Self::Yellow => (234, 179, 8),
            Self::Orange => (249, 115, 22),
            Self::DarkPurple => (126, 34, 206),
            Self::Black => (23, 23, 23),
            Self::Red => (220, 38, 38),
        }
    }

    /// The identifier string used for swatch labels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::DarkPurple => "darkPurple",
            Self::Black => "black",
            Self::Red => "red",
        }
    }

    /// Reverse lookup: display value back to identifier.
    ///
    /// Returns `None` for any value outside the vocabulary. A `None` here
    /// for an engine-produced color means an internal invariant was
    /// violated; callers should fall back to an "unknown" label for
    /// display robustness.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::all().iter().find(|c| c.hex() == hex).copied()
    }

    /// Parse an identifier string (exact match, e.g. `"darkPurple"`).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().find(|c| c.label() == label).copied()
    }

    /// All seven vocabulary entries, in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Blue, Self::Pink, Self::Yellow, Self::Orange,
            Self::DarkPurple, Self::Black, Self::Red,
        ]
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
