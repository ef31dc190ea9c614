//! Criterion benchmarks for the pole search.
//! Focus: vertex counts n in {8, 32, 128, 512} at two precisions.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polylabel::api::{
    draw_polygon_radial, point_to_polygon_dist, pole_of_inaccessibility, PolygonReplay,
    RadialCfg, VertexCount,
};
use polylabel::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn radial(n: usize, index: u64) -> polylabel::Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        radial_jitter: 0.6,
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, PolygonReplay { seed: 2024, index })
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    for &n in &[8usize, 32, 128, 512] {
        let poly = radial(n, 0);
        let mut rng = StdRng::seed_from_u64(7);
        let probes: Vec<Vec2<f64>> = (0..256)
            .map(|_| Vec2::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5)))
            .collect();
        group.bench_with_input(BenchmarkId::new("point_to_polygon_dist", n), &n, |b, _| {
            b.iter(|| {
                probes
                    .iter()
                    .map(|&q| point_to_polygon_dist(q, &poly))
                    .fold(f64::NEG_INFINITY, f64::max)
            })
        });
    }
    group.finish();
}

fn bench_pole(c: &mut Criterion) {
    let mut group = c.benchmark_group("pole");
    for &n in &[8usize, 32, 128, 512] {
        for &precision in &[1e-2, 1e-4] {
            let id = format!("n{n}_p{precision:e}");
            group.bench_function(BenchmarkId::new("pole_of_inaccessibility", id), |b| {
                b.iter_batched(
                    || radial(n, 1),
                    |poly| {
                        let _pole = pole_of_inaccessibility(&poly, precision).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_distance, bench_pole);
criterion_main!(benches);
