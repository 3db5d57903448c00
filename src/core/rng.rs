//! Deterministic cosmetic randomness.
//!
//! The only randomness in the engine is the tint index handed to the
//! renderer for each flying seed. It is drawn from its own ChaCha8 stream,
//! seeded from configuration, and never consulted by the rules, so rule
//! tests stay deterministic regardless of the tint seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for presentation-only choices.
#[derive(Clone, Debug)]
pub struct CosmeticRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CosmeticRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Rewind to the start of the stream.
    pub fn reset(&mut self) {
        self.inner = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// Draw a tint index in `0..palette`.
    ///
    /// A palette of zero is treated as a single colour.
    pub fn next_tint(&mut self, palette: u8) -> u8 {
        self.inner.gen_range(0..palette.max(1))
    }
}
