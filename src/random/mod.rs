//! Per-invocation random streams.
//!
//! Each generator call owns its own [`ArtRng`]; nothing is shared between calls, so concurrent
//! requests with equal seeds produce equal output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct ArtRng {
    inner: ChaCha8Rng,
}

impl ArtRng {
    /// Seeded streams are reproducible; `None` draws a fresh seed from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { inner }
    }

    /// `lo + (hi - lo) * u` with `u` in `[0, 1)`. Consumes one draw.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.inner.r#gen::<f64>()
    }

    /// Uniform pick from a non-empty slice. Consumes one draw.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.inner.gen_range(0..items.len())]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/mod.rs"]
mod tests;
