//! Search driver: seed grid, initial guesses, best-first refinement.

use std::time::Instant;

use super::cell::{Cell, CellQueue};
use super::progress::{NoopObserver, Observer, ProgressEvent};
use super::types::{Pole, PoleError, PoleReport, SearchCfg, Termination, DEFAULT_PRECISION};
use crate::geom2::{BoundingBox, Polygon};

/// Pole of inaccessibility within `precision` of optimal, without limits or
/// progress reporting.
pub fn pole_of_inaccessibility(polygon: &Polygon, precision: f64) -> Result<Pole, PoleError> {
    solve(polygon, precision, SearchCfg::default(), &mut NoopObserver).map(|r| r.pole)
}

/// Default precision, no limits, no observer.
pub fn solve_with_defaults(polygon: &Polygon) -> Result<PoleReport, PoleError> {
    solve(
        polygon,
        DEFAULT_PRECISION,
        SearchCfg::default(),
        &mut NoopObserver,
    )
}

/// Full search with run limits and a progress observer.
///
/// Preconditions (not validated): every ring has at least 3 vertices and the
/// polygon is simple. Self-intersecting input yields a best-effort answer under
/// even-odd semantics.
///
/// Fails only when `precision` is not finite and positive, or the polygon has
/// no points. A zero-width or zero-height bounding box short-circuits to
/// `{xmin, ymin, 0}`.
pub fn solve(
    polygon: &Polygon,
    precision: f64,
    scfg: SearchCfg,
    observer: &mut dyn Observer,
) -> Result<PoleReport, PoleError> {
    if !precision.is_finite() || precision <= 0.0 {
        return Err(PoleError::InvalidPrecision { precision });
    }
    let bounds = polygon.bounds().ok_or(PoleError::EmptyPolygon)?;

    if bounds.is_degenerate() {
        tracing::debug!(
            xmin = bounds.xmin,
            ymin = bounds.ymin,
            "degenerate bounding box, skipping search"
        );
        observer.event(&ProgressEvent::Finished {
            probes: 0,
            distance: 0.0,
        });
        return Ok(PoleReport {
            pole: Pole {
                x: bounds.xmin,
                y: bounds.ymin,
                d: 0.0,
            },
            probes: 0,
            bounds,
            area: None,
            centroid: None,
            bounds_center: None,
            termination: Termination::Degenerate,
        });
    }

    let (centroid, area) = Cell::centroid(polygon).ok_or(PoleError::EmptyPolygon)?;
    let report = PoleRunner::new(polygon, bounds, precision, scfg).run(centroid, area, observer);
    tracing::debug!(
        x = report.pole.x,
        y = report.pole.y,
        d = report.pole.d,
        probes = report.probes,
        termination = %report.termination,
        "pole search finished"
    );
    Ok(report)
}

/// Search state for one call: queue, incumbent and counters.
struct PoleRunner<'a> {
    polygon: &'a Polygon,
    bounds: BoundingBox,
    precision: f64,
    scfg: SearchCfg,
    queue: CellQueue,
    probes: usize,
    started: Instant,
}

impl<'a> PoleRunner<'a> {
    fn new(polygon: &'a Polygon, bounds: BoundingBox, precision: f64, scfg: SearchCfg) -> Self {
        Self {
            polygon,
            bounds,
            precision,
            scfg,
            queue: CellQueue::new(),
            probes: 0,
            started: Instant::now(),
        }
    }

    fn run(mut self, centroid: Cell, area: f64, observer: &mut dyn Observer) -> PoleReport {
        let mut stopped = self.seed_grid();

        let center = self.bounds.center();
        let bounds_center = Cell::new(center.x, center.y, 0.0, self.polygon);
        let mut best = if bounds_center.d > centroid.d {
            bounds_center
        } else {
            centroid
        };

        // After a limit fires the remaining queue is only drained for its
        // already evaluated centres; nothing is split any more.
        while let Some(cell) = self.queue.pop() {
            if cell.d > best.d {
                best = cell;
                observer.event(&ProgressEvent::Improved {
                    distance: (1e4 * cell.d).round() / 1e4,
                    probes: self.probes,
                });
            }

            if stopped.is_some() || cell.max - best.d <= self.precision {
                continue;
            }

            if let Some(hit) = self.limit_hit() {
                tracing::debug!(
                    probes = self.probes,
                    queued = self.queue.len(),
                    limit = %hit,
                    "stopping search early"
                );
                stopped = Some(hit);
                continue;
            }

            self.queue.extend(cell.split(self.polygon));
            self.probes += 4;
        }
        let termination = stopped.unwrap_or(Termination::Converged);

        observer.event(&ProgressEvent::Finished {
            probes: self.probes,
            distance: best.d,
        });

        PoleReport {
            pole: best.into(),
            probes: self.probes,
            bounds: self.bounds,
            area: Some(area),
            centroid: Some(centroid),
            bounds_center: Some(bounds_center),
            termination,
        }
    }

    /// Tile the bounding box with square cells of side `min(width, height)`,
    /// stepping from `(xmin, ymin)` while the unshifted coordinate is strictly
    /// below the max bound.
    ///
    /// Run limits are checked after every seeded cell; the limit that fired is
    /// returned and the rest of the grid is skipped.
    fn seed_grid(&mut self) -> Option<Termination> {
        let b = self.bounds;
        let cell_size = b.width().min(b.height());
        let h = cell_size / 2.0;
        let cols = (b.width() / cell_size).ceil() as usize;
        let rows = (b.height() / cell_size).ceil() as usize;

        for x in grid_origins(b.xmin, b.xmax, cell_size, cols) {
            for y in grid_origins(b.ymin, b.ymax, cell_size, rows) {
                self.queue.push(Cell::new(x + h, y + h, h, self.polygon));
                self.probes += 1;
                if let Some(hit) = self.limit_hit() {
                    tracing::debug!(
                        probes = self.probes,
                        limit = %hit,
                        "stopping while seeding the grid"
                    );
                    return Some(hit);
                }
            }
        }
        None
    }

    fn limit_hit(&self) -> Option<Termination> {
        if let Some(max_probes) = self.scfg.max_probes {
            if self.probes >= max_probes {
                return Some(Termination::ProbeLimit);
            }
        }
        if let Some(budget) = self.scfg.time_budget {
            if self.started.elapsed() >= budget {
                return Some(Termination::Deadline);
            }
        }
        None
    }
}

/// Origins `lo + i·step` for `i` in `0..=count`, strictly below `hi`.
///
/// Far from zero `i·step` can vanish below the spacing of `f64` near `lo`;
/// repeated origins are skipped so each tile is seeded once.
fn grid_origins(lo: f64, hi: f64, step: f64, count: usize) -> impl Iterator<Item = f64> {
    let mut last = None;
    (0..=count)
        .map(move |i| lo + i as f64 * step)
        .take_while(move |&v| v < hi)
        .filter(move |&v| {
            let fresh = last != Some(v);
            last = Some(v);
            fresh
        })
}
