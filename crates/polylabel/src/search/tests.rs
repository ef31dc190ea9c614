use super::*;
use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use crate::geom2::{point_to_polygon_dist, Polygon};
use nalgebra::vector;
use proptest::prelude::*;
use std::time::Duration;

fn square(side: f64) -> Polygon {
    Polygon::from_coords(&[vec![(0.0, 0.0), (side, 0.0), (side, side), (0.0, side)]])
}

fn square_with_centered_hole() -> Polygon {
    Polygon::from_coords(&[
        vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        vec![(3.0, 3.0), (3.0, 7.0), (7.0, 7.0), (7.0, 3.0)],
    ])
}

fn l_shape() -> Polygon {
    Polygon::from_coords(&[vec![
        (0.0, 0.0),
        (8.0, 0.0),
        (8.0, 3.0),
        (3.0, 3.0),
        (3.0, 8.0),
        (0.0, 8.0),
    ]])
}

fn u_shape() -> Polygon {
    Polygon::from_coords(&[vec![
        (0.0, 0.0),
        (9.0, 0.0),
        (9.0, 7.0),
        (6.0, 7.0),
        (6.0, 2.0),
        (3.0, 2.0),
        (3.0, 7.0),
        (0.0, 7.0),
    ]])
}

/// Best signed distance over an `n × n` sample grid of the bounding box, and
/// the grid's half-diagonal (max gap between any point and its nearest sample).
fn brute_force_max(p: &Polygon, n: usize) -> (f64, f64) {
    let b = p.bounds().unwrap();
    let sx = b.width() / (n - 1) as f64;
    let sy = b.height() / (n - 1) as f64;
    let mut best = f64::NEG_INFINITY;
    for i in 0..n {
        for j in 0..n {
            let q = vector![b.xmin + i as f64 * sx, b.ymin + j as f64 * sy];
            best = best.max(point_to_polygon_dist(q, p));
        }
    }
    (best, 0.5 * (sx * sx + sy * sy).sqrt())
}

fn collect_events(
    p: &Polygon,
    precision: f64,
    scfg: SearchCfg,
) -> (PoleReport, Vec<ProgressEvent>) {
    let mut events = Vec::new();
    let report = solve(p, precision, scfg, &mut |e: &ProgressEvent| events.push(*e)).unwrap();
    (report, events)
}

#[test]
fn square_pole_is_center() {
    let pole = pole_of_inaccessibility(&square(10.0), 1.0).unwrap();
    assert!((pole.x - 5.0).abs() <= 1.0);
    assert!((pole.y - 5.0).abs() <= 1.0);
    assert!((pole.d - 5.0).abs() <= 1.0);

    let pole = pole_of_inaccessibility(&square(10.0), 0.01).unwrap();
    assert!(pole.d <= 5.0 + 1e-12);
    assert!(pole.d >= 5.0 - 0.01);
}

#[test]
fn default_precision_matches_explicit_one() {
    let p = l_shape();
    let report = solve_with_defaults(&p).unwrap();
    assert_eq!(
        report.pole,
        pole_of_inaccessibility(&p, DEFAULT_PRECISION).unwrap()
    );
    assert_eq!(report.termination, Termination::Converged);
}

#[test]
fn degenerate_bounds_short_circuit() {
    let vertical = Polygon::from_coords(&[vec![(3.0, 1.0), (3.0, 7.0), (3.0, 4.0)]]);
    let mut events = 0;
    let report = solve(
        &vertical,
        1.0,
        SearchCfg::default(),
        &mut |_: &ProgressEvent| events += 1,
    )
    .unwrap();
    assert_eq!(
        report.pole,
        Pole {
            x: 3.0,
            y: 1.0,
            d: 0.0
        }
    );
    assert_eq!(report.termination, Termination::Degenerate);
    assert_eq!(report.probes, 0);
    assert!(report.area.is_none());
    assert!(report.centroid.is_none());
    assert_eq!(events, 1);

    let horizontal = Polygon::from_coords(&[vec![(-2.0, 5.0), (4.0, 5.0), (1.0, 5.0)]]);
    let pole = pole_of_inaccessibility(&horizontal, 0.5).unwrap();
    assert_eq!(
        pole,
        Pole {
            x: -2.0,
            y: 5.0,
            d: 0.0
        }
    );
}

#[test]
fn rejects_bad_precision_and_empty_polygon() {
    let sq = square(1.0);
    for bad in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = pole_of_inaccessibility(&sq, bad).unwrap_err();
        assert!(matches!(err, PoleError::InvalidPrecision { .. }), "{bad}");
    }
    assert_eq!(
        pole_of_inaccessibility(&Polygon::default(), 1.0).unwrap_err(),
        PoleError::EmptyPolygon
    );
    assert_eq!(
        pole_of_inaccessibility(&Polygon::new(vec![vec![]]), 1.0).unwrap_err(),
        PoleError::EmptyPolygon
    );
    assert_eq!(
        PoleError::InvalidPrecision { precision: -1.0 }.to_string(),
        "invalid precision -1: must be finite and > 0"
    );
}

#[test]
fn improvements_are_monotone_and_finish_is_last() {
    let p = square_with_centered_hole();
    let (report, events) = collect_events(&p, 0.001, SearchCfg::default());
    assert!(events.len() >= 2);

    let mut last = f64::NEG_INFINITY;
    let mut last_probes = 0;
    for e in &events[..events.len() - 1] {
        match *e {
            ProgressEvent::Improved { distance, probes } => {
                assert!(distance >= last);
                assert!(probes >= last_probes);
                let scaled = distance * 1e4;
                assert!((scaled - scaled.round()).abs() < 1e-6);
                last = distance;
                last_probes = probes;
            }
            ProgressEvent::Finished { .. } => panic!("finish before the end"),
        }
    }
    assert_eq!(
        events.last(),
        Some(&ProgressEvent::Finished {
            probes: report.probes,
            distance: report.pole.d
        })
    );
}

#[test]
fn hole_pushes_pole_into_the_band() {
    let p = square_with_centered_hole();
    let report = solve(&p, 0.001, SearchCfg::default(), &mut NoopObserver).unwrap();
    // Both guesses sit in the hole.
    assert!(report.centroid.unwrap().d < 0.0);
    assert!(report.bounds_center.unwrap().d < 0.0);
    assert!((report.area.unwrap() - 84.0).abs() < 1e-9);

    // Optimum sits on the band diagonals: x = √2 (3 − x).
    let r = 3.0 * std::f64::consts::SQRT_2 / (1.0 + std::f64::consts::SQRT_2);
    assert!(report.pole.d <= r + 1e-9);
    assert!(report.pole.d >= r - 0.001);
    assert!(point_to_polygon_dist(report.pole.point(), &p) > 0.0);
}

#[test]
fn triangle_pole_matches_inradius() {
    // 3-4-5 triangle: inradius 1 at (1, 1).
    let t = Polygon::from_coords(&[vec![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]]);
    let pole = pole_of_inaccessibility(&t, 1e-4).unwrap();
    assert!(pole.d <= 1.0 + 1e-12);
    assert!(pole.d >= 1.0 - 1e-4);
    assert!((pole.point() - vector![1.0, 1.0]).norm() < 0.05);
}

#[test]
fn result_within_precision_of_brute_force() {
    for (p, precision) in [(l_shape(), 0.05), (u_shape(), 0.01), (square(7.0), 0.1)] {
        let pole = pole_of_inaccessibility(&p, precision).unwrap();
        let (brute, gap) = brute_force_max(&p, 201);
        assert!(pole.d >= brute - precision, "{} < {}", pole.d, brute);
        assert!(pole.d <= brute + gap + 1e-9, "{} > {}", pole.d, brute);
        assert!((point_to_polygon_dist(pole.point(), &p) - pole.d).abs() < 1e-12);
    }
}

#[test]
fn pole_dominates_both_guesses() {
    for p in [l_shape(), u_shape(), square_with_centered_hole()] {
        let report = solve(&p, 0.5, SearchCfg::default(), &mut NoopObserver).unwrap();
        assert!(report.pole.d >= report.centroid.unwrap().d);
        assert!(report.pole.d >= report.bounds_center.unwrap().d);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let p = u_shape();
    let a = solve(&p, 0.001, SearchCfg::default(), &mut NoopObserver).unwrap();
    let b = solve(&p, 0.001, SearchCfg::default(), &mut NoopObserver).unwrap();
    assert_eq!(a, b);
}

#[test]
fn seed_grid_steps_by_short_side() {
    // 10 × 3: cells of side 3 at x = 0, 3, 6, 9; one row.
    let rect = Polygon::from_coords(&[vec![(0.0, 0.0), (10.0, 0.0), (10.0, 3.0), (0.0, 3.0)]]);
    let report = solve(&rect, 1e9, SearchCfg::default(), &mut NoopObserver).unwrap();
    assert_eq!(report.probes, 4);
    assert_eq!(report.termination, Termination::Converged);
    // Centroid guess is already optimal.
    assert!((report.pole.d - 1.5).abs() < 1e-12);
}

#[test]
fn probe_limit_returns_current_best() {
    let cfg = SearchCfg {
        max_probes: Some(20),
        ..SearchCfg::default()
    };
    let report = solve(&square(10.0), 1e-9, cfg, &mut NoopObserver).unwrap();
    assert_eq!(report.termination, Termination::ProbeLimit);
    assert!(report.probes >= 20 && report.probes < 24, "{}", report.probes);
    assert!((report.pole.d - 5.0).abs() < 1e-12);
}

#[test]
fn zero_time_budget_stops_before_first_split() {
    let cfg = SearchCfg {
        time_budget: Some(Duration::ZERO),
        ..SearchCfg::default()
    };
    let (report, events) = collect_events(&l_shape(), 0.01, cfg);
    assert_eq!(report.termination, Termination::Deadline);
    // 8 × 8 box → one seed cell, never split.
    assert_eq!(report.probes, 1);
    assert!(report.pole.d >= report.centroid.unwrap().d);
    assert!(matches!(events.last(), Some(ProgressEvent::Finished { .. })));
}

#[test]
fn degenerate_bounds_still_report_finish() {
    let flat = Polygon::from_coords(&[vec![(0.0, 2.0), (5.0, 2.0), (3.0, 2.0)]]);
    let (report, events) = collect_events(&flat, 1.0, SearchCfg::default());
    assert_eq!(report.termination, Termination::Degenerate);
    assert_eq!(
        events,
        vec![ProgressEvent::Finished {
            probes: 0,
            distance: 0.0
        }]
    );
}

fn solve_on_thread(p: Polygon, cfg: SearchCfg) -> PoleReport {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(solve(&p, 1.0, cfg, &mut NoopObserver));
    });
    rx.recv_timeout(Duration::from_secs(5))
        .expect("solve did not return in time")
        .unwrap()
}

#[test]
fn seeding_terminates_far_from_origin() {
    // Near 1e16 the f64 spacing is 2, so a unit step can leave x unchanged.
    let base = 1e16;
    let p = Polygon::from_coords(&[vec![
        (base, 0.0),
        (base + 4.0, 0.0),
        (base + 4.0, 1.0),
        (base, 1.0),
    ]]);
    let cfg = SearchCfg {
        max_probes: Some(1000),
        time_budget: Some(Duration::from_millis(50)),
    };
    let report = solve_on_thread(p, cfg);
    assert!(report.probes <= 1000 + 4, "{}", report.probes);
    assert!(report.pole.d.is_finite());
    assert!(report.pole.x >= base && report.pole.x <= base + 4.0);
}

#[test]
fn probe_limit_applies_while_seeding() {
    // Short side 1e-6 would seed about 1e12 cells.
    let p = Polygon::from_coords(&[vec![(0.0, 0.0), (1e6, 0.0), (1e6, 1e-6), (0.0, 1e-6)]]);
    let cfg = SearchCfg {
        max_probes: Some(100),
        ..SearchCfg::default()
    };
    let report = solve_on_thread(p, cfg);
    assert_eq!(report.termination, Termination::ProbeLimit);
    assert_eq!(report.probes, 100);
    let guess = report.centroid.unwrap().d.max(report.bounds_center.unwrap().d);
    assert!(report.pole.d >= guess);
}

#[test]
fn queue_order_ignores_nan_potentials() {
    let cell = |max: f64| Cell {
        x: 0.0,
        y: 0.0,
        h: 1.0,
        d: 0.0,
        max,
    };
    let mut q = CellQueue::new();
    q.extend([1.0, f64::NAN, 3.0, 2.0, -1.0].map(cell));
    let finite: Vec<f64> = std::iter::from_fn(|| q.pop())
        .map(|c| c.max)
        .filter(|m| !m.is_nan())
        .collect();
    assert_eq!(finite, vec![3.0, 2.0, 1.0, -1.0]);
}

#[test]
fn queue_pops_highest_potential_first() {
    let p = square(10.0);
    let mut q = CellQueue::new();
    assert!(q.is_empty());
    assert!(q.pop().is_none());
    for (x, y, h) in [(1.0, 1.0, 1.0), (5.0, 5.0, 0.5), (5.0, 5.0, 4.0), (9.0, 2.0, 2.0)] {
        q.push(Cell::new(x, y, h, &p));
    }
    q.extend(Cell::new(5.0, 5.0, 4.0, &p).split(&p));
    assert_eq!(q.len(), 8);
    let mut prev = f64::INFINITY;
    while let Some(c) = q.pop() {
        assert!(c.max <= prev);
        prev = c.max;
    }
    assert!(q.is_empty());
}

#[test]
fn cell_potential_and_split() {
    let p = square(10.0);
    let c = Cell::new(4.0, 5.0, 2.0, &p);
    assert!((c.d - 4.0).abs() < 1e-12);
    assert!((c.max - (4.0 + 2.0 * std::f64::consts::SQRT_2)).abs() < 1e-12);

    let kids = c.split(&p);
    for k in &kids {
        assert_eq!(k.h, 1.0);
        assert_eq!((k.x - c.x).abs(), 1.0);
        assert_eq!((k.y - c.y).abs(), 1.0);
    }
    let (g, area) = Cell::centroid(&p).unwrap();
    assert_eq!(g.h, 0.0);
    assert_eq!(g.max, g.d);
    assert!((area - 100.0).abs() < 1e-12);
}

#[test]
fn progress_event_messages() {
    let e = ProgressEvent::Improved {
        distance: 1.2346,
        probes: 12,
    };
    assert_eq!(e.to_string(), "found best 1.2346 after 12 probes");
    let e = ProgressEvent::Finished {
        probes: 40,
        distance: 2.5,
    };
    assert_eq!(e.to_string(), "num probes: 40; best distance: 2.5");
    assert_eq!(Termination::ProbeLimit.to_string(), "probe_limit");
}

fn radial_cfg() -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Uniform { min: 6, max: 24 },
        angle_jitter_frac: 0.3,
        radial_jitter: 0.5,
        base_radius: 1.0,
        random_phase: true,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_polygons_converge_within_precision(seed in any::<u64>(), index in 0u64..1_000) {
        let p = draw_polygon_radial(radial_cfg(), ReplayToken { seed, index });
        let precision = 0.01;
        let report = solve(&p, precision, SearchCfg::default(), &mut NoopObserver).unwrap();
        prop_assert_eq!(report.termination, Termination::Converged);
        prop_assert!(report.pole.d > 0.0);
        prop_assert!(report.pole.d >= report.centroid.unwrap().d);
        prop_assert!(report.pole.d >= report.bounds_center.unwrap().d);

        let (brute, gap) = brute_force_max(&p, 81);
        prop_assert!(report.pole.d >= brute - precision);
        prop_assert!(report.pole.d <= brute + gap + 1e-9);
    }

    #[test]
    fn random_polygon_runs_are_deterministic(seed in any::<u64>()) {
        let p = draw_polygon_radial(radial_cfg(), ReplayToken { seed, index: 0 });
        let a = solve(&p, 0.05, SearchCfg::default(), &mut NoopObserver).unwrap();
        let b = solve(&p, 0.05, SearchCfg::default(), &mut NoopObserver).unwrap();
        prop_assert_eq!(a, b);
    }
}
