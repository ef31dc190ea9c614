//! Compare label anchors (centroid, bounding-box centre, pole) on a few shapes.
//!
//! Usage:
//!   cargo run -p polylabel --example label_points -- [precision]
//!
//! The centroid of a concave shape can fall outside it; the pole never does.

use polylabel::prelude::*;

fn main() {
    let precision = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_PRECISION);

    let c_shape = Polygon::from_coords(&[vec![
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 2.0),
        (2.0, 2.0),
        (2.0, 8.0),
        (10.0, 8.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ]]);
    let framed = Polygon::from_coords(&[
        vec![(0.0, 0.0), (20.0, 0.0), (20.0, 12.0), (0.0, 12.0)],
        vec![(4.0, 3.0), (4.0, 9.0), (16.0, 9.0), (16.0, 3.0)],
    ]);
    let star = draw_polygon_radial(
        RadialCfg {
            vertex_count: VertexCount::Fixed(24),
            radial_jitter: 0.7,
            ..RadialCfg::default()
        },
        ReplayToken { seed: 11, index: 0 },
    );

    for (name, poly) in [("c_shape", c_shape), ("framed", framed), ("star", star)] {
        let mut improvements = 0usize;
        let report = match solve(
            &poly,
            precision,
            SearchCfg::default(),
            &mut |e: &ProgressEvent| {
                if matches!(e, ProgressEvent::Improved { .. }) {
                    improvements += 1;
                }
            },
        ) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        let fmt_cell = |c: Option<Cell>| match c {
            Some(c) => format!("({:.3}, {:.3}) d={:.3}", c.x, c.y, c.d),
            None => "-".to_string(),
        };
        println!("{name}:");
        println!("  centroid      {}", fmt_cell(report.centroid));
        println!("  bounds centre {}", fmt_cell(report.bounds_center));
        println!(
            "  pole          ({:.3}, {:.3}) d={:.3}  [{} probes, {} improvements, {}]",
            report.pole.x,
            report.pole.y,
            report.pole.d,
            report.probes,
            improvements,
            report.termination
        );
    }
}
