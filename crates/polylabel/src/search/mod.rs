//! Branch-and-bound search for the pole of inaccessibility.
//!
//! Purpose
//! - Cover the polygon's bounding box with square cells, then repeatedly split
//!   the cell with the highest potential `max = d + h·√2` until no cell can beat
//!   the best known distance by more than `precision`.
//!
//! Structure
//! - `cell`: immutable `Cell` values and the `CellQueue` max-heap.
//! - `driver`: entry points and the search loop (`PoleRunner`).
//! - `progress`: observer hook for improvement/finish events.
//! - `types`: configuration, results and errors.

mod cell;
mod driver;
mod progress;
mod types;

pub use cell::{Cell, CellQueue};
pub use driver::{pole_of_inaccessibility, solve, solve_with_defaults};
pub use progress::{NoopObserver, Observer, ProgressEvent};
pub use types::{Pole, PoleError, PoleReport, SearchCfg, Termination, DEFAULT_PRECISION};

#[cfg(test)]
mod tests;
