use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to an exported quote.
pub struct Payload {
    pub params: Value,
    /// Design files the artifact was computed from.
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.inputs.push(input.as_ref().to_string_lossy().into_owned());
        self
    }
}

/// Header shared by sidecars and `countertop report`.
pub fn block(params: Value, inputs: &[String], outputs: &[String]) -> Value {
    json!({
        "engine": "countertop",
        "engine_version": countertop::VERSION,
        "code_rev": current_git_rev(),
        "params": params,
        "inputs": inputs,
        "outputs": outputs
    })
}

/// Write `<artifact>.provenance.json` with the engine version, git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = block(
        payload.params,
        &payload.inputs,
        &[artifact.to_string_lossy().into_owned()],
    );
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("quote"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let base = Path::new("/tmp/quotes/kitchen.parquet");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/quotes/kitchen.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_engine_and_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("quote.csv");
        fs::write(&artifact, "item,amount_pln\n").unwrap();
        let payload = Payload::new(json!({"vat_rate": 0.23})).with_input("design.json");
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["engine_version"], countertop::VERSION);
        assert_eq!(parsed["inputs"][0], "design.json");
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
