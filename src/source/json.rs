//! Document source backed by a directory of JSON snapshot files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::Value;

use super::DocumentSource;

/// Reads document collections from a local directory snapshot.
///
/// Collection `p` lives at `<root>/p.json` (a JSON array, or a single
/// object treated as a one-element collection) or `<root>/p.jsonl` /
/// `<root>/p.ndjson` (one document per line). Nested collection paths map
/// to subdirectories.
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    /// Create a source rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a collection path to an existing snapshot file
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        for ext in ["json", "jsonl", "ndjson"] {
            let candidate = self.root.join(format!("{}.{}", path, ext));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        bail!(
            "No snapshot file for '{}' under {}",
            path,
            self.root.display()
        )
    }
}

impl DocumentSource for JsonDirSource {
    fn collection(&self, path: &str) -> Result<Vec<Value>> {
        let file_path = self.resolve(path)?;
        match file_path.extension().and_then(|e| e.to_str()) {
            Some("jsonl") | Some("ndjson") => read_json_lines(&file_path),
            _ => read_json_array(&file_path),
        }
    }

    fn document(&self, path: &str) -> Result<Value> {
        let file_path = self.resolve(path)?;
        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open document file: {}", file_path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse document file: {}", file_path.display()))?;
        Ok(value)
    }
}

fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open JSON file: {}", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

    // Handle both arrays and single objects
    match value {
        Value::Array(documents) => Ok(documents),
        other => Ok(vec![other]),
    }
}

fn read_json_lines(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open JSON lines file: {}", path.display()))?;

    let mut documents = Vec::new();
    for (line_num, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse JSON on line {}", line_num + 1))?;
        documents.push(value);
    }
    Ok(documents)
}
