//! Basic polygon types.
//!
//! - `Polygon`: ordered rings of points, outer ring first.
//! - `BoundingBox`: axis-aligned extent over every ring.

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Implicitly closed sequence of vertices (last connects back to first).
pub type Ring = Vec<Point>;

/// Polygon as an ordered list of rings (outer boundary first, then holes).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

impl Polygon {
    #[inline]
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Build from plain `(x, y)` tuples, one `Vec` per ring.
    pub fn from_coords(rings: &[Vec<(f64, f64)>]) -> Self {
        Self {
            rings: rings
                .iter()
                .map(|ring| ring.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
                .collect(),
        }
    }

    /// Outer ring, if any.
    #[inline]
    pub fn outer(&self) -> Option<&Ring> {
        self.rings.first()
    }

    /// Total vertex count over all rings.
    pub fn num_points(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    /// True when no ring carries a single point.
    pub fn is_empty(&self) -> bool {
        self.num_points() == 0
    }

    /// Bounding box over every point of every ring; `None` for an empty polygon.
    pub fn bounds(&self) -> Option<BoundingBox> {
        if self.is_empty() {
            return None;
        }
        let mut b = BoundingBox {
            xmin: f64::INFINITY,
            xmax: f64::NEG_INFINITY,
            ymin: f64::INFINITY,
            ymax: f64::NEG_INFINITY,
        };
        for p in self.rings.iter().flatten() {
            b.xmin = b.xmin.min(p.x);
            b.xmax = b.xmax.max(p.x);
            b.ymin = b.ymin.min(p.y);
            b.ymax = b.ymax.max(p.y);
        }
        Some(b)
    }
}

/// Axis-aligned bounding box. Invariant: `xmin <= xmax`, `ymin <= ymax`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
    #[inline]
    pub fn center(&self) -> Point {
        Vector2::new(
            self.xmin + self.width() / 2.0,
            self.ymin + self.height() / 2.0,
        )
    }
    /// Zero width or zero height (the polygon is a line or a point).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}
