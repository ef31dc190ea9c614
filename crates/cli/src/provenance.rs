use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every written artifact.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: &Path) -> Self {
        self.inputs.push(input.to_string_lossy().into_owned());
        self
    }
}

/// Write `<artifact>.provenance.json` with the code revision, library version,
/// callsite, params, inputs and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    ensure_parent(&provenance_path)?;

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "polylabel_version": polylabel::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// `pole.json` → `pole.provenance.json`; a path without a file name gets
/// `artifact.provenance.json` inside it.
fn provenance_path(artifact: &Path) -> PathBuf {
    match artifact.file_stem() {
        Some(_) => artifact.with_extension("provenance.json"),
        None => artifact.join("artifact.provenance.json"),
    }
}

/// Revision baked in at build time, else `GIT_COMMIT` at run time, else
/// `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then_some(())?;
            String::from_utf8(out.stdout)
                .ok()
                .map(|s| s.trim().to_owned())
                .and_then(non_empty)
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/pole.json");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/pole.provenance.json"));
        assert_eq!(
            provenance_path(Path::new("runs/lake")),
            Path::new("runs/lake.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("/")),
            Path::new("/artifact.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_inputs_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("pole.json");
        ensure_parent(&artifact).unwrap();
        fs::write(&artifact, "{}").unwrap();
        let payload =
            Payload::new(json!({"precision": 0.5})).with_input(Path::new("shapes/lake.csv"));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["inputs"][0], "shapes/lake.csv");
        assert_eq!(parsed["params"]["precision"], 0.5);
        assert_eq!(parsed["polylabel_version"], polylabel::VERSION);
    }
}
