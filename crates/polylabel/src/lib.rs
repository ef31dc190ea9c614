//! Pole of inaccessibility for 2D polygons.
//!
//! The pole is the interior point farthest from the polygon outline. It makes a
//! better label anchor than the centroid for irregular regions, where the
//! centroid can land near an edge or outside the shape entirely.
//!
//! Layout
//! - `geom2`: polygon data model, signed point-to-polygon distance, centroid,
//!   and a reproducible random polygon sampler.
//! - `search`: cells, the cell priority queue, and the branch-and-bound driver.
//! - `api`: curated re-exports for callers.

pub mod api;
pub mod geom2;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{BoundingBox, Point, Polygon, Ring};
pub use nalgebra::Vector2 as Vec2;
pub use search::{
    pole_of_inaccessibility, solve, solve_with_defaults, Pole, PoleError, PoleReport, SearchCfg,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{point_to_polygon_dist, BoundingBox, Point, Polygon, Ring};
    pub use crate::search::{
        pole_of_inaccessibility, solve, Cell, NoopObserver, Observer, Pole, PoleError,
        PoleReport, ProgressEvent, SearchCfg, Termination, DEFAULT_PRECISION,
    };
    pub use nalgebra::Vector2 as Vec2;
}
