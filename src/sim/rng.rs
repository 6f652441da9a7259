//! Seeded random source for world generation
//!
//! Every draw the generator makes goes through here, so a seed fully
//! determines the terrain. Ranges are clamped so a degenerate range yields
//! its lower bound instead of panicking or producing zero-width geometry.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Thin wrapper over Pcg32 with range-safe helpers
#[derive(Debug, Clone)]
pub struct GenRng {
    rng: Pcg32,
}

impl GenRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// True with probability `p` (clamped to [0, 1])
    pub fn chance(&mut self, p: f32) -> bool {
        self.unit() < p.clamp(0.0, 1.0)
    }

    /// Uniform in [lo, hi); returns `lo` when the range is empty
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo {
            self.rng.random_range(lo..hi)
        } else {
            lo
        }
    }

    /// Uniform in [lo, hi] for integers; returns `lo` when hi < lo
    pub fn count(&mut self, lo: u32, hi: u32) -> u32 {
        if hi > lo {
            self.rng.random_range(lo..=hi)
        } else {
            lo
        }
    }

    /// Uniformly pick one element
    ///
    /// # Panics
    /// If `items` is empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }
}
