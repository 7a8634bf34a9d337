// src/layout/boundary/polygon.rs
//! Polygon helpers for custom island outlines.

use crate::layout::core::Point2D;

/// Scale normalized vertices into world units, then move each one `margin`
/// units toward the origin. Vertices closer than `margin` collapse onto the origin.
///
/// Cheap stand-in for a true polygon offset; margins are small next to island size.
pub(super) fn scale_and_inset(points: &[Point2D], scale_factor: f64, margin: f64) -> Vec<Point2D> {
    points
        .iter()
        .map(|p| {
            let v = p.scale(scale_factor);
            let len = v.length();
            if len <= 0.0 {
                return v;
            }
            v.scale((len - margin).max(0.0) / len)
        })
        .collect()
}

/// Even-odd ray casting (ray toward +X).
pub(super) fn contains(vertices: &[Point2D], p: Point2D) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if (a.z > p.z) != (b.z > p.z) && p.x < (b.x - a.x) * (p.z - a.z) / (b.z - a.z) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
