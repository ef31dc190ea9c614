//! Area-weighted centroid and signed area.
//!
//! Accumulation runs over every ring with shared accumulators, so a hole wound
//! opposite to the outer ring subtracts its area and shifts the centroid away
//! from it. Areas are positive for counter-clockwise rings.

use nalgebra::Vector2;

use super::types::{Point, Polygon};

/// Centroid estimate together with the signed area it was weighted by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    pub point: Point,
    /// Signed area summed over all rings (CCW positive).
    pub area: f64,
}

/// Signed area over all rings (shoelace), positive for counter-clockwise.
pub fn signed_area(polygon: &Polygon) -> f64 {
    let mut twice = 0.0;
    for ring in &polygon.rings {
        let n = ring.len();
        for i in 0..n {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            twice += a.x * b.y - b.x * a.y;
        }
    }
    twice / 2.0
}

/// Area-weighted centroid over all rings.
///
/// Zero accumulated area (a collinear or otherwise flat polygon) falls back to
/// the first vertex of the first non-empty ring. Returns `None` only for an empty
/// polygon.
pub fn centroid(polygon: &Polygon) -> Option<Centroid> {
    let first = *polygon.rings.iter().find_map(|r| r.first())?;

    let mut x = 0.0;
    let mut y = 0.0;
    let mut v = 0.0;
    for ring in &polygon.rings {
        let n = ring.len();
        for i in 0..n {
            // b is the previous vertex, so f = cross(a, b) = -cross(b, a).
            let a = ring[i];
            let b = ring[(i + n - 1) % n];
            let f = a.x * b.y - b.x * a.y;
            x += (a.x + b.x) * f;
            y += (a.y + b.y) * f;
            v += 3.0 * f;
        }
    }

    if v == 0.0 {
        return Some(Centroid {
            point: first,
            area: 0.0,
        });
    }
    Some(Centroid {
        point: Vector2::new(x / v, y / v),
        area: -v / 6.0,
    })
}
