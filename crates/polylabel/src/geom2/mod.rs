//! 2D polygon geometry used by the pole search.
//!
//! Conventions
//! - A polygon is a list of rings; ring 0 is the outer boundary and further
//!   rings are holes. Rings are implicitly closed.
//! - Inside/outside follows the even-odd rule, so hole orientation does not
//!   matter for distances. It does matter for `signed_area` and `centroid`:
//!   wind holes opposite to the outer ring.
//! - Well-formedness (at least 3 vertices per ring, no self-intersections) is a
//!   precondition and is not validated here.

mod centroid;
mod distance;
pub mod rand;
mod types;

pub use centroid::{centroid, signed_area, Centroid};
pub use distance::{contains, point_to_polygon_dist, seg_dist_sq};
pub use types::{BoundingBox, Point, Polygon, Ring};
