// src/layout/boundary/region.rs
//! Margin-reduced regions: the single source of truth for containment and clamping.

use std::f64::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use super::polygon;
use super::{BoundaryConfig, IslandShape, CLAMP_PAD, DEFAULT_RADIUS, PAW_FACTOR};
use crate::layout::core::{LayoutBounds, Point2D};

const HEX_SECTOR: f64 = PI / 3.0;
const HEX_HALF_SECTOR: f64 = PI / 6.0;

/// Set after the first degenerate-outline warning; later fallbacks log at debug.
static DEGENERATE_WARNED: AtomicBool = AtomicBool::new(false);

/// Log a degenerate outline; returns `true` only for the call that warned.
fn note_degenerate(vertices: usize) -> bool {
    if DEGENERATE_WARNED.swap(true, Ordering::Relaxed) {
        debug!(vertices, "degenerate custom island outline, using default circle");
        false
    } else {
        warn!(
            vertices,
            "custom island outline needs at least 3 points, falling back to circle \
             (further occurrences logged at debug)"
        );
        true
    }
}

/// A [`BoundaryConfig`] with margin and shape factors already applied.
///
/// Resolving a custom outline rebuilds its vertex list; per-point callers should
/// resolve once via [`BoundaryConfig::region`] and query the `Region`.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    /// Circle, organic, paw (radius already scaled) and the degenerate-polygon fallback.
    Disc { radius: f64 },
    /// `radius` is the margin-reduced circumradius.
    Hexagon { radius: f64 },
    Rect { bounds: LayoutBounds },
    /// Inset world-space vertices plus their bounding box.
    Polygon { vertices: Vec<Point2D>, bounds: LayoutBounds },
}

impl Region {
    pub fn resolve(config: &BoundaryConfig) -> Self {
        let m = config.margin;
        match &config.shape {
            IslandShape::Circle { radius } | IslandShape::Organic { radius } => {
                Region::Disc { radius: radius - m }
            }
            IslandShape::Paw { radius } => Region::Disc { radius: (radius - m) * PAW_FACTOR },
            IslandShape::Hexagon { radius } => Region::Hexagon { radius: radius - m },
            IslandShape::Square { width, height } => Region::Rect {
                bounds: LayoutBounds::centered(width / 2.0 - m, height / 2.0 - m),
            },
            IslandShape::Custom { points, scale_factor } => {
                let vertices = polygon::scale_and_inset(points, *scale_factor, m);
                match LayoutBounds::enclosing(&vertices) {
                    Some(bounds) if vertices.len() >= 3 => Region::Polygon { vertices, bounds },
                    _ => {
                        note_degenerate(points.len());
                        Region::Disc { radius: DEFAULT_RADIUS - m }
                    }
                }
            }
        }
    }

    pub fn contains(&self, p: Point2D) -> bool {
        match self {
            Region::Disc { radius } => p.length() <= *radius,
            Region::Hexagon { radius } => p.length() <= hex_edge_distance(*radius, p.angle()),
            Region::Rect { bounds } => bounds.contains(p),
            Region::Polygon { vertices, .. } => polygon::contains(vertices, p),
        }
    }

    /// Nearest usable point; points already inside are returned as-is.
    pub fn clamp(&self, p: Point2D) -> Point2D {
        if self.contains(p) {
            return p;
        }

        match self {
            Region::Disc { radius } => {
                let d = p.length();
                if d <= 0.0 {
                    return Point2D::ORIGIN;
                }
                p.scale(radius / d * CLAMP_PAD)
            }
            Region::Hexagon { radius } => {
                if p.length() <= 0.0 {
                    return Point2D::ORIGIN;
                }
                let angle = p.angle();
                Point2D::from_polar(angle, hex_edge_distance(*radius, angle) * CLAMP_PAD)
            }
            // Axis-aligned only: any non-rectangular outline can leave the result outside.
            Region::Rect { bounds } | Region::Polygon { bounds, .. } => bounds.clamp(p),
        }
    }

    pub fn bounds(&self) -> LayoutBounds {
        match self {
            Region::Disc { radius } => LayoutBounds::centered(*radius, *radius),
            Region::Hexagon { radius } => {
                let apothem = radius * HEX_HALF_SECTOR.cos();
                LayoutBounds::centered(apothem, radius * 0.866)
            }
            Region::Rect { bounds } | Region::Polygon { bounds, .. } => *bounds,
        }
    }
}

/// Approximate hexagon edge distance along `angle`.
///
/// `%` keeps the sign of `angle`, so negative angles land in a different part of
/// the cosine than positive ones. Visual silhouettes are tuned against this.
#[inline]
fn hex_edge_distance(radius: f64, angle: f64) -> f64 {
    radius / (angle % HEX_SECTOR - HEX_HALF_SECTOR).cos()
}
