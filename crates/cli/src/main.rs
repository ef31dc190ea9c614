use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polylabel::geom2::rand::{
    draw_polygon_radial, recenter_rescale, RadialCfg, ReplayToken, VertexCount,
};
use polylabel::search::{solve, ProgressEvent, SearchCfg, DEFAULT_PRECISION};
use polylabel::Vec2;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polylabel")]
#[command(about = "Pole of inaccessibility (best label point) for polygon files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the pole of a polygon (.json or .csv) and write it as JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Stop refining once no cell can improve the result by more than this
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: f64,
        /// Stop after this many evaluated cells and keep the best so far
        #[arg(long)]
        max_probes: Option<usize>,
        /// Stop after this many milliseconds and keep the best so far
        #[arg(long)]
        time_budget_ms: Option<u64>,
    },
    /// Write a reproducible random star-shaped polygon as JSON
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        /// Uniform scale applied after moving the centroid to the origin
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            precision,
            max_probes,
            time_budget_ms,
        } => run(input, out, precision, max_probes, time_budget_ms),
        Action::Sample {
            seed,
            index,
            vertices,
            scale,
            out,
        } => sample(seed, index, vertices, scale, out),
        Action::Report => report(),
    }
}

fn run(
    input: PathBuf,
    out: PathBuf,
    precision: f64,
    max_probes: Option<usize>,
    time_budget_ms: Option<u64>,
) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        precision,
        ?max_probes,
        ?time_budget_ms,
        "run"
    );
    let polygon = input::read_polygon(&input)?;
    tracing::info!(
        rings = polygon.rings.len(),
        points = polygon.num_points(),
        "polygon_loaded"
    );

    let scfg = SearchCfg {
        max_probes,
        time_budget: time_budget_ms.map(Duration::from_millis),
    };
    let report = solve(&polygon, precision, scfg, &mut |e: &ProgressEvent| {
        tracing::info!(event = %e, "progress")
    })
    .with_context(|| format!("searching {}", input.display()))?;

    if report.pole.d < 0.0 {
        tracing::warn!(
            d = report.pole.d,
            "pole lies outside the polygon; check ring closure and orientation"
        );
    }
    tracing::info!(
        x = report.pole.x,
        y = report.pole.y,
        d = report.pole.d,
        probes = report.probes,
        termination = %report.termination,
        "pole"
    );

    let b = report.bounds;
    let doc = json!({
        "x": report.pole.x,
        "y": report.pole.y,
        "d": report.pole.d,
        "probes": report.probes,
        "termination": report.termination.as_str(),
        "area": report.area,
        "bounds": {
            "xmin": b.xmin,
            "xmax": b.xmax,
            "ymin": b.ymin,
            "ymax": b.ymax
        },
        "guesses": {
            "centroid": report.centroid.map(|c| json!({"x": c.x, "y": c.y, "d": c.d})),
            "bounds_center": report.bounds_center.map(|c| json!({"x": c.x, "y": c.y, "d": c.d}))
        }
    });
    ensure_parent(&out)?;
    fs::write(&out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(json!({
        "command": "run",
        "precision": precision,
        "max_probes": max_probes,
        "time_budget_ms": time_budget_ms
    }))
    .with_input(&input);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn sample(seed: u64, index: u64, vertices: usize, scale: f64, out: PathBuf) -> Result<()> {
    tracing::info!(seed, index, vertices, scale, out = %out.display(), "sample");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let raw = draw_polygon_radial(cfg, ReplayToken { seed, index });
    let polygon = recenter_rescale(&raw, Vec2::zeros(), scale)
        .with_context(|| format!("cannot rescale sample by {scale}"))?;

    ensure_parent(&out)?;
    fs::write(&out, serde_json::to_vec_pretty(&input::to_json(&polygon))?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(json!({
        "command": "sample",
        "seed": seed,
        "index": index,
        "vertices": vertices,
        "scale": scale
    }));
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "polylabel_version": polylabel::VERSION,
        "default_precision": DEFAULT_PRECISION
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
