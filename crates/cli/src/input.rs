//! Polygon files.
//!
//! - JSON: one array per ring, points as `[x, y]` or `{"x": .., "y": ..}`.
//! - CSV: columns `ring,x,y`; consecutive rows sharing a ring id form one ring.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polylabel::{Polygon, Ring, Vec2};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Pair([f64; 2]),
    Xy { x: f64, y: f64 },
}

impl From<JsonPoint> for Vec2<f64> {
    fn from(p: JsonPoint) -> Self {
        match p {
            JsonPoint::Pair([x, y]) => Vec2::new(x, y),
            JsonPoint::Xy { x, y } => Vec2::new(x, y),
        }
    }
}

/// Read a polygon, picking the format from the file extension.
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            parse_json(&bytes).with_context(|| format!("parsing {}", path.display()))
        }
        Some("csv") => read_csv(path),
        other => bail!(
            "unsupported input {}: extension {:?}, expected .json or .csv",
            path.display(),
            other
        ),
    }
}

pub fn parse_json(bytes: &[u8]) -> Result<Polygon> {
    let rings: Vec<Vec<JsonPoint>> = serde_json::from_slice(bytes)?;
    Ok(Polygon::new(
        rings
            .into_iter()
            .map(|ring| ring.into_iter().map(Vec2::from).collect())
            .collect(),
    ))
}

/// Serialize as nested `[x, y]` pairs, the same shape `parse_json` reads.
pub fn to_json(polygon: &Polygon) -> serde_json::Value {
    serde_json::Value::from(
        polygon
            .rings
            .iter()
            .map(|ring| ring.iter().map(|p| vec![p.x, p.y]).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
    )
}

fn read_csv(path: &Path) -> Result<Polygon> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    polygon_from_frame(&df).with_context(|| format!("parsing {}", path.display()))
}

fn polygon_from_frame(df: &DataFrame) -> Result<Polygon> {
    let ring_ids = df.column("ring")?.cast(&DataType::Int64)?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;

    let mut rings: Vec<Ring> = Vec::new();
    let mut current: Option<i64> = None;
    let rows = ring_ids
        .i64()?
        .into_iter()
        .zip(xs.f64()?.into_iter())
        .zip(ys.f64()?.into_iter());
    for (row, ((id, x), y)) in rows.enumerate() {
        let (Some(id), Some(x), Some(y)) = (id, x, y) else {
            bail!("row {row}: ring, x and y must all be present");
        };
        let p = Vec2::new(x, y);
        match rings.last_mut() {
            Some(last) if current == Some(id) => last.push(p),
            _ => {
                rings.push(vec![p]);
                current = Some(id);
            }
        }
    }
    Ok(Polygon::new(rings))
}
