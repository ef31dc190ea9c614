//! Search cells and their priority queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use nalgebra::Vector2;

use crate::geom2::{centroid, point_to_polygon_dist, Polygon};

/// Square cell centred at `(x, y)` with half-size `h`.
///
/// `d` is the signed distance from the centre to the polygon outline and `max`
/// bounds the distance any point of the cell can reach (distance is
/// 1-Lipschitz, and no point of the cell is farther than `h·√2` from the
/// centre).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub h: f64,
    pub d: f64,
    pub max: f64,
}

impl Cell {
    pub fn new(x: f64, y: f64, h: f64, polygon: &Polygon) -> Self {
        let d = point_to_polygon_dist(Vector2::new(x, y), polygon);
        Self {
            x,
            y,
            h,
            d,
            max: d + h * std::f64::consts::SQRT_2,
        }
    }

    /// Zero-size cell at the area centroid, plus the signed area it came from.
    ///
    /// `None` only for an empty polygon.
    pub fn centroid(polygon: &Polygon) -> Option<(Self, f64)> {
        let c = centroid(polygon)?;
        Some((Self::new(c.point.x, c.point.y, 0.0, polygon), c.area))
    }

    /// The four quadrant children with half the half-size.
    pub fn split(&self, polygon: &Polygon) -> [Cell; 4] {
        let h = self.h / 2.0;
        [
            Cell::new(self.x - h, self.y - h, h, polygon),
            Cell::new(self.x + h, self.y - h, h, polygon),
            Cell::new(self.x - h, self.y + h, h, polygon),
            Cell::new(self.x + h, self.y + h, h, polygon),
        ]
    }
}

/// Heap entry ordered by potential only, using the IEEE total order so a NaN
/// potential cannot disturb the ordering of the finite ones.
#[derive(Clone, Copy, Debug)]
struct ByPotential(Cell);

impl PartialEq for ByPotential {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByPotential {}

impl Ord for ByPotential {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.max.total_cmp(&other.0.max)
    }
}

impl PartialOrd for ByPotential {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-priority queue of cells keyed by `max`. Tie order is unspecified.
#[derive(Clone, Debug, Default)]
pub struct CellQueue {
    heap: BinaryHeap<ByPotential>,
}

impl CellQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, cell: Cell) {
        self.heap.push(ByPotential(cell));
    }

    /// Remove and return the cell with the greatest `max`.
    #[inline]
    pub fn pop(&mut self) -> Option<Cell> {
        self.heap.pop().map(|e| e.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Extend<Cell> for CellQueue {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(ByPotential));
    }
}
