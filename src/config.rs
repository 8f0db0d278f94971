//! Backup run configuration

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::export::DEFAULT_SAMPLE_LIMIT;

/// Configuration for one backup run: which targets to export and where
/// the results go.
#[derive(Debug, Clone, Deserialize)]
pub struct BackupConfig {
    /// Export targets, processed in order
    pub targets: Vec<ExportTarget>,
    /// Destination storage settings
    pub storage: StorageConfig,
    /// Documents inspected when inferring each target's schema
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,
}

impl BackupConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

/// One thing to export: a collection of documents or a single document
#[derive(Debug, Clone, Deserialize)]
pub struct ExportTarget {
    /// Path of the collection or document in the source store
    pub path: String,
    /// Target kind; collections are the common case
    #[serde(rename = "type", default)]
    pub kind: TargetKind,
}

/// Kind of export target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Many documents, one row each
    #[default]
    Collection,
    /// A single document, exported as a one-row table
    Document,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Collection => write!(f, "collection"),
            TargetKind::Document => write!(f, "document"),
        }
    }
}

/// Destination storage settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Bucket the finished CSV objects land in
    pub bucket: String,
}

fn default_sample_limit() -> usize {
    DEFAULT_SAMPLE_LIMIT
}
