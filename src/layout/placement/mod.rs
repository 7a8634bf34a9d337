// src/layout/placement/mod.rs
//! Deterministic placement: seeded batches and per-identity points.

mod identity;
mod rejection;
pub mod stream;

use crate::layout::boundary::BoundaryConfig;
use crate::layout::core::Point2D;

pub use identity::{generate_for_identity, identity_seed};
pub use rejection::{RejectionParams, RejectionPlacement, MAX_ATTEMPTS};
pub use stream::SampleStream;

/// Up to `count` points, each at least `min_distance` from the others.
///
/// With a boundary, draws use its effective placement radius and out-of-bounds
/// draws are clamped; without one they use `nominal_radius * 0.85`. Identical
/// arguments always yield the identical sequence.
pub fn generate_batch(
    count: usize,
    nominal_radius: f64,
    min_distance: f64,
    seed: u64,
    boundary: Option<&BoundaryConfig>,
) -> Vec<Point2D> {
    RejectionPlacement::new(count, nominal_radius, min_distance, boundary).place(seed)
}
