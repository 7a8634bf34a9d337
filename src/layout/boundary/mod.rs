// src/layout/boundary/mod.rs
//! Island footprints and the margin-reduced region props may occupy.
//!
//! A [`BoundaryConfig`] is the data form (what a renderer or a `.islands.ron` file
//! describes). Every query resolves it into a [`Region`] first, so containment,
//! clamping and bounds always agree on one effective boundary.

mod polygon;
mod region;

use serde::{Deserialize, Serialize};

use crate::layout::core::{LayoutBounds, Point2D};

pub use region::Region;

// ---------- Defaults & factors ----------

pub const DEFAULT_RADIUS: f64 = 15.0;
pub const DEFAULT_EXTENT: f64 = 20.0;
pub const DEFAULT_SCALE_FACTOR: f64 = 20.0;
pub const DEFAULT_MARGIN: f64 = 2.0;

/// Paw silhouettes are a circle shrunk by this factor.
pub const PAW_FACTOR: f64 = 0.9;
/// Clamped disc/hexagon points land this fraction of the way to the edge.
pub const CLAMP_PAD: f64 = 0.95;
/// Shrink applied to sampling radii to keep draws off the shoreline.
pub const SAFETY_FACTOR: f64 = 0.85;

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}
fn default_extent() -> f64 {
    DEFAULT_EXTENT
}
pub(crate) fn default_scale_factor() -> f64 {
    DEFAULT_SCALE_FACTOR
}
pub(crate) fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

// ---------- Shapes (data form) ----------

/// Island silhouette. Parameters are world units except `Custom::points`,
/// which are normalized and multiplied by `scale_factor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum IslandShape {
    Circle {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// `radius` is the circumradius.
    Hexagon {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    Square {
        #[serde(default = "default_extent")]
        width: f64,
        #[serde(default = "default_extent")]
        height: f64,
    },
    /// Treated as a circle for placement.
    Organic {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    Paw {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// Closed polygon; fewer than three vertices falls back to the default circle.
    Custom {
        points: Vec<Point2D>,
        #[serde(default = "default_scale_factor")]
        scale_factor: f64,
    },
}

impl IslandShape {
    pub fn kind(&self) -> &'static str {
        match self {
            IslandShape::Circle { .. } => "circle",
            IslandShape::Hexagon { .. } => "hexagon",
            IslandShape::Square { .. } => "square",
            IslandShape::Organic { .. } => "organic",
            IslandShape::Paw { .. } => "paw",
            IslandShape::Custom { .. } => "custom",
        }
    }
}

/// Shape plus a uniform inward safety margin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    pub shape: IslandShape,
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl BoundaryConfig {
    pub fn new(shape: IslandShape) -> Self {
        Self { shape, margin: DEFAULT_MARGIN }
    }

    pub fn circle(radius: f64) -> Self {
        Self::new(IslandShape::Circle { radius })
    }

    pub fn hexagon(radius: f64) -> Self {
        Self::new(IslandShape::Hexagon { radius })
    }

    pub fn square(width: f64, height: f64) -> Self {
        Self::new(IslandShape::Square { width, height })
    }

    pub fn organic(radius: f64) -> Self {
        Self::new(IslandShape::Organic { radius })
    }

    pub fn paw(radius: f64) -> Self {
        Self::new(IslandShape::Paw { radius })
    }

    pub fn custom(points: Vec<Point2D>, scale_factor: f64) -> Self {
        Self::new(IslandShape::Custom { points, scale_factor })
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Resolve into the margin-reduced region used by every query.
    pub fn region(&self) -> Region {
        Region::resolve(self)
    }

    /// Is `(x, z)` inside the usable (margin-reduced) region?
    ///
    /// The hexagon test is an approximation: the local edge distance is
    /// `r / cos(angle % 60° - 30°)` with `%` keeping the sign of the angle, so
    /// the accepted area is not an exact hexagon. Paw is a circle at 90%.
    /// Custom polygons use even-odd ray casting over vertices inset toward the origin.
    ///
    /// Resolves the region on every call; hold a [`Region`] for per-point loops.
    pub fn is_inside(&self, x: f64, z: f64) -> bool {
        self.region().contains(Point2D::new(x, z))
    }

    /// Nearest usable point to `(x, z)`; inside points come back unchanged.
    ///
    /// Square and custom shapes clamp to the bounding rectangle. For any custom
    /// outline that is not itself an axis-aligned rectangle (triangles and other
    /// convex shapes included) the rectangle's corners lie outside the polygon, so
    /// the result may still fail [`is_inside`](Self::is_inside).
    ///
    /// Resolves the region on every call; hold a [`Region`] for per-point loops.
    pub fn clamp_to_boundary(&self, x: f64, z: f64) -> Point2D {
        self.region().clamp(Point2D::new(x, z))
    }

    /// Clamp every point; the region is resolved once for the whole slice.
    pub fn clamp_all(&self, points: &[Point2D]) -> Vec<Point2D> {
        let region = self.region();
        points.iter().map(|&p| region.clamp(p)).collect()
    }

    /// Margin-reduced axis-aligned extent.
    pub fn bounds(&self) -> LayoutBounds {
        self.region().bounds()
    }

    /// Sampling radius that keeps random draws toward the interior.
    ///
    /// Advisory only: placement still validates each candidate against the region.
    pub fn effective_placement_radius(&self) -> f64 {
        let m = self.margin;
        match &self.shape {
            IslandShape::Circle { radius }
            | IslandShape::Organic { radius }
            | IslandShape::Paw { radius } => radius * SAFETY_FACTOR - m,
            IslandShape::Hexagon { radius } => {
                radius * (std::f64::consts::PI / 6.0).cos() * SAFETY_FACTOR - m
            }
            IslandShape::Square { width, height } => width.min(*height) / 2.0 * SAFETY_FACTOR - m,
            IslandShape::Custom { points, .. } if points.len() < 3 => {
                DEFAULT_RADIUS * SAFETY_FACTOR - m
            }
            // Custom bounds are already margin-reduced.
            IslandShape::Custom { .. } => {
                let b = self.bounds();
                b.width().min(b.height()) / 2.0 * SAFETY_FACTOR
            }
        }
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self::circle(DEFAULT_RADIUS)
    }
}
