//! Curated API surface.
//!
//! Prefer these re-exports in binaries, benches and bindings so call sites do
//! not depend on the internal module split.

// Geometry
pub use crate::geom2::{
    centroid, contains, point_to_polygon_dist, seg_dist_sq, signed_area, BoundingBox, Centroid,
    Point, Polygon, Ring,
};
// Random polygons
pub use crate::geom2::rand::{
    draw_polygon_radial, RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};
// Search
pub use crate::search::{
    pole_of_inaccessibility, solve, solve_with_defaults, Cell, CellQueue, NoopObserver, Observer,
    Pole, PoleError, PoleReport, ProgressEvent, SearchCfg, Termination, DEFAULT_PRECISION,
};
