//! Deterministic randomness for recipes and distributions.
//!
//! A minimal xorshift PRNG, seed-injected everywhere it is used: the same
//! seed always reproduces the same grid, which is what makes the random
//! recipes and the shuffle distribution testable. Production callers that
//! want a fresh result each time seed from the clock via
//! [`Xorshift32::from_entropy`].

/// Minimal deterministic PRNG. No external `rand` crate needed.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a PRNG from an explicit seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Create a PRNG seeded from the current time — each call produces a
    /// different stream.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(Self::entropy_seed())
    }

    /// A clock-derived seed, with a fixed fallback if the clock is
    /// somehow before the epoch.
    #[must_use]
    pub fn entropy_seed() -> u32 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(42, |d| d.subsec_nanos())
    }

    /// Next raw 32-bit value.
    // `next` is the conventional PRNG method name, not an Iterator impl.
    #[allow(clippy::should_implement_trait)]
    pub const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        (self.next() as usize) % len
    }

    /// Pick a random element from a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice is empty.
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> &'a T {
        &slice[self.index(slice.len())]
    }

    /// Uniform in-place Fisher–Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index(i + 1);
            slice.swap(i, j);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
