//! Signed Euclidean distance from a point to a polygon outline.
//!
//! Inside/outside uses even-odd ray casting along the horizontal line through
//! the query point; the magnitude is the distance to the nearest edge of any
//! ring.

use super::types::{Point, Polygon};

/// Squared distance from `p` to the segment `ab`.
///
/// The projection parameter is clamped to `[0, 1]`. A zero-length segment
/// (`a == b`) degrades to point-to-point distance without dividing.
#[inline]
pub fn seg_dist_sq(p: Point, a: Point, b: Point) -> f64 {
    let mut q = a;
    let ab = b - a;
    if ab.x != 0.0 || ab.y != 0.0 {
        let t = (p - a).dot(&ab) / ab.norm_squared();
        if t > 1.0 {
            q = b;
        } else if t > 0.0 {
            q += ab * t;
        }
    }
    (p - q).norm_squared()
}

/// Signed distance from `p` to the polygon outline: positive inside, negative
/// outside, exactly `0.0` on an edge.
pub fn point_to_polygon_dist(p: Point, polygon: &Polygon) -> f64 {
    let mut inside = false;
    let mut min_dist_sq = f64::INFINITY;

    for ring in &polygon.rings {
        for (a, b) in edges(ring) {
            if crosses(p, a, b) {
                inside = !inside;
            }
            min_dist_sq = min_dist_sq.min(seg_dist_sq(p, a, b));
        }
    }

    if min_dist_sq == 0.0 {
        return 0.0;
    }
    let d = min_dist_sq.sqrt();
    if inside {
        d
    } else {
        -d
    }
}

/// Even-odd membership test alone (points on an edge may land either way).
pub fn contains(p: Point, polygon: &Polygon) -> bool {
    polygon
        .rings
        .iter()
        .flat_map(|ring| edges(ring))
        .filter(|&(a, b)| crosses(p, a, b))
        .count()
        % 2
        == 1
}

/// Edges `(ring[i], ring[i-1])`, wrapping so the first vertex pairs with the last.
#[inline]
fn edges(ring: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + n - 1) % n]))
}

/// Does the horizontal ray from `p` towards +x cross edge `ab`?
#[inline]
fn crosses(p: Point, a: Point, b: Point) -> bool {
    // Straddling guarantees `b.y != a.y`, so the division is safe.
    (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
}
