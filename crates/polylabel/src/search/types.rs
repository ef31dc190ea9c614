//! Configuration, results and errors of a pole search.

use std::fmt;
use std::time::Duration;

use nalgebra::Vector2;

use super::cell::Cell;
use crate::geom2::{BoundingBox, Point};

/// Precision used when the caller has no preference.
pub const DEFAULT_PRECISION: f64 = 1.0;

/// Run limits. Both default to unlimited.
///
/// Limits are checked once per popped cell, before it is split. When one is
/// hit the search stops and returns the best cell found so far.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    /// Stop once this many cells have been evaluated.
    pub max_probes: Option<usize>,
    /// Stop once this much wall-clock time has passed since the call started.
    pub time_budget: Option<Duration>,
}

/// Best point found and its signed distance to the outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pole {
    pub x: f64,
    pub y: f64,
    pub d: f64,
}

impl Pole {
    #[inline]
    pub fn point(&self) -> Point {
        Vector2::new(self.x, self.y)
    }
}

impl From<Cell> for Pole {
    fn from(c: Cell) -> Self {
        Self {
            x: c.x,
            y: c.y,
            d: c.d,
        }
    }
}

/// Why the search loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Zero-width or zero-height bounding box; no search was run.
    Degenerate,
    /// Queue drained: the result is within `precision` of optimal.
    Converged,
    /// `SearchCfg::max_probes` reached.
    ProbeLimit,
    /// `SearchCfg::time_budget` exhausted.
    Deadline,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Degenerate => "degenerate",
            Self::Converged => "converged",
            Self::ProbeLimit => "probe_limit",
            Self::Deadline => "deadline",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result plus read-only diagnostics of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct PoleReport {
    pub pole: Pole,
    /// Cells evaluated: the seed grid plus four per split (guesses excluded).
    pub probes: usize,
    pub bounds: BoundingBox,
    /// Signed area from the centroid step; `None` when the run short-circuited.
    pub area: Option<f64>,
    /// Centroid guess; `None` when the run short-circuited.
    pub centroid: Option<Cell>,
    /// Bounding-box centre guess; `None` when the run short-circuited.
    pub bounds_center: Option<Cell>,
    pub termination: Termination,
}

/// Invalid arguments to a pole search.
#[derive(Clone, Debug, PartialEq)]
pub enum PoleError {
    /// Precision must be finite and strictly positive.
    InvalidPrecision { precision: f64 },
    /// No ring carries a point, so there is no bounding box.
    EmptyPolygon,
}

impl fmt::Display for PoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision { precision } => {
                write!(f, "invalid precision {precision}: must be finite and > 0")
            }
            Self::EmptyPolygon => write!(f, "polygon has no points"),
        }
    }
}

impl std::error::Error for PoleError {}
