// src/layout/core.rs
//! Core value types shared by boundaries and placement strategies.
//! Keep this file dependency-light; everything else builds on it.

use serde::{Deserialize, Serialize};

// ---------- Points ----------

/// Point on the island plane (XZ). Height is resolved by the terrain layer, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub z: f64,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, z: 0.0 };

    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Distance from the island center.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Polar angle in radians, `(-PI, PI]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.z.atan2(self.x)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self { x: self.x * k, z: self.z * k }
    }

    #[inline]
    pub fn from_polar(angle: f64, distance: f64) -> Self {
        Self { x: angle.cos() * distance, z: angle.sin() * distance }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, z): (f64, f64)) -> Self {
        Self { x, z }
    }
}

// ---------- Bounds ----------

/// Axis-aligned XZ extent of a margin-reduced boundary (inclusive on every side).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl LayoutBounds {
    /// Bounds centered on the origin with the given half-extents.
    pub fn centered(half_x: f64, half_z: f64) -> Self {
        Self { min_x: -half_x, max_x: half_x, min_z: -half_z, max_z: half_z }
    }

    /// Tight bounds around `points`; `None` when empty.
    pub fn enclosing(points: &[Point2D]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Self { min_x: first.x, max_x: first.x, min_z: first.z, max_z: first.z };
        for p in &points[1..] {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_z = b.min_z.min(p.z);
            b.max_z = b.max_z.max(p.z);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_z - self.min_z
    }

    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.z >= self.min_z && p.z <= self.max_z
    }

    /// Clamp `p` into the rectangle per axis. Inverted bounds (margin wider than
    /// the shape) must not panic, so this avoids `f64::clamp`.
    pub fn clamp(&self, p: Point2D) -> Point2D {
        Point2D {
            x: self.min_x.max(self.max_x.min(p.x)),
            z: self.min_z.max(self.max_z.min(p.z)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polar_roundtrip_keeps_distance() {
        let p = Point2D::from_polar(1.2, 7.5);
        assert_relative_eq!(p.length(), 7.5, epsilon = 1e-12);
        assert_relative_eq!(p.angle(), 1.2, epsilon = 1e-12);
    }

    #[test]
    fn enclosing_bounds() {
        let pts = [Point2D::new(-1.0, 2.0), Point2D::new(3.0, -4.0), Point2D::new(0.5, 0.5)];
        let b = LayoutBounds::enclosing(&pts).unwrap();
        assert_eq!(b, LayoutBounds { min_x: -1.0, max_x: 3.0, min_z: -4.0, max_z: 2.0 });
        assert!(LayoutBounds::enclosing(&[]).is_none());
    }

    #[test]
    fn inverted_bounds_clamp_without_panicking() {
        let b = LayoutBounds::centered(-1.0, -1.0);
        let p = b.clamp(Point2D::new(5.0, -5.0));
        assert!(p.x.is_finite() && p.z.is_finite());
    }
}
