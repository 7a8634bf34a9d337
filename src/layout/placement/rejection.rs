// src/layout/placement/rejection.rs
//! Seeded rejection sampling with polar bias (deterministic per seed).

use tracing::{debug, trace};

use super::stream::SampleStream;
use crate::layout::boundary::{BoundaryConfig, Region, SAFETY_FACTOR};
use crate::layout::core::Point2D;

/// Draw attempts per requested point before that index is skipped.
pub const MAX_ATTEMPTS: u32 = 50;

#[derive(Clone, Copy, Debug)]
pub struct RejectionParams {
    /// Requested number of points (an upper bound on the output).
    pub count: usize,
    /// Minimum spacing between accepted points.
    pub min_distance: f64,
    /// Attempts per requested point.
    pub attempts: u32,
}

/// Batch layout: N mutually spaced points inside an optional boundary.
#[derive(Clone, Debug)]
pub struct RejectionPlacement {
    params: RejectionParams,
    /// Sampling radius around the origin.
    radius: f64,
    region: Option<Region>,
}

impl RejectionPlacement {
    /// Without a boundary the sampling radius falls back to `nominal_radius * 0.85`.
    pub fn new(
        count: usize,
        nominal_radius: f64,
        min_distance: f64,
        boundary: Option<&BoundaryConfig>,
    ) -> Self {
        let radius = boundary.map_or(
            nominal_radius * SAFETY_FACTOR,
            BoundaryConfig::effective_placement_radius,
        );
        Self {
            params: RejectionParams { count, min_distance, attempts: MAX_ATTEMPTS },
            radius,
            region: boundary.map(BoundaryConfig::region),
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.params.attempts = attempts.max(1);
        self
    }

    pub fn params(&self) -> RejectionParams {
        self.params
    }

    pub fn sampling_radius(&self) -> f64 {
        self.radius
    }

    /// Run the layout. Indices whose attempts all collide are skipped, so the
    /// result may be shorter than `count`; its length is authoritative.
    pub fn place(&self, seed: u64) -> Vec<Point2D> {
        let RejectionParams { count, min_distance, attempts } = self.params;
        let mut stream = SampleStream::new(seed);
        let mut out: Vec<Point2D> = Vec::with_capacity(count.min(1024));
        let mut skipped = 0usize;

        for index in 0..count {
            let mut accepted = None;

            for _ in 0..attempts {
                let (raw, next) = stream.polar(self.radius);
                stream = next;

                // Clamp instead of redrawing so every attempt yields a candidate.
                let candidate = match &self.region {
                    Some(region) => region.clamp(raw),
                    None => raw,
                };

                if out.iter().all(|p| p.distance(candidate) >= min_distance) {
                    accepted = Some(candidate);
                    break;
                }
            }

            match accepted {
                Some(p) => out.push(p),
                None => {
                    skipped += 1;
                    trace!(index, attempts, "no candidate cleared min distance; skipping");
                }
            }
        }

        debug!(
            requested = count,
            placed = out.len(),
            skipped,
            seed,
            radius = self.radius,
            "batch layout finished"
        );
        out
    }
}
