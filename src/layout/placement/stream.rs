// src/layout/placement/stream.rs
//! Seeded draw stream. The state is a plain value threaded through every draw,
//! so a draw depends only on `(seed, index)` and never on hidden mutation.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::layout::core::Point2D;

/// Position in a deterministic sequence of `[0, 1)` draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleStream {
    seed: u64,
    cursor: u64,
}

impl SampleStream {
    pub const fn new(seed: u64) -> Self {
        Self { seed, cursor: 0 }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws taken so far.
    pub const fn cursor(&self) -> u64 {
        self.cursor
    }

    #[inline]
    fn rng_for(&self) -> ChaCha8Rng {
        // Stable per (seed, draw index)
        let mix = self.seed
            ^ self.cursor.wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ 0xA5A5_5A5A_D3F0_1234u64;
        ChaCha8Rng::seed_from_u64(mix)
    }

    /// Uniform value in `[0, 1)` and the state after it.
    pub fn draw(self) -> (f64, Self) {
        let value = self.rng_for().random::<f64>();
        (value, Self { seed: self.seed, cursor: self.cursor.wrapping_add(1) })
    }

    /// Area-uniform point in a disc of `radius` around the origin (two draws).
    ///
    /// The `sqrt` on the radial draw keeps density uniform per unit area instead
    /// of piling samples up near the center.
    pub fn polar(self, radius: f64) -> (Point2D, Self) {
        let (u_angle, next) = self.draw();
        let (u_dist, next) = next.draw();
        let angle = u_angle * TAU;
        let distance = u_dist.sqrt() * radius;
        (Point2D::from_polar(angle, distance), next)
    }
}
