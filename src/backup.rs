//! Per-target backup orchestration

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::config::{BackupConfig, ExportTarget, TargetKind};
use crate::error::ExportError;
use crate::export::{encode_table, Exporter};
use crate::source::DocumentSource;
use crate::store::ObjectStore;

/// Outcome of one backup run across all configured targets
#[derive(Debug, Default)]
pub struct BackupSummary {
    /// Targets exported and uploaded
    pub exported: Vec<ExportedObject>,
    /// Targets skipped because they held no documents
    pub skipped: Vec<String>,
    /// Targets that failed; siblings were still processed
    pub failed: Vec<FailedTarget>,
}

impl BackupSummary {
    /// Whether any target failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// A successfully uploaded export
#[derive(Debug)]
pub struct ExportedObject {
    /// Source path of the target
    pub path: String,
    /// Object name the CSV was stored under
    pub object: String,
    /// Number of data rows written
    pub rows: usize,
}

/// A target that could not be exported
#[derive(Debug)]
pub struct FailedTarget {
    /// Source path of the target
    pub path: String,
    /// Rendered error chain
    pub reason: String,
}

enum TargetOutcome {
    Uploaded { object: String, rows: usize },
    Empty,
}

/// Object name for a target exported on a given date:
/// `<YYYY-MM-DD>/<path with '/' flattened to '_'>.csv`
pub fn object_name(path: &str, date: NaiveDate) -> String {
    format!("{}/{}.csv", date.format("%Y-%m-%d"), path.replace('/', "_"))
}

/// Export every configured target, uploading one CSV object per target.
///
/// A failing target is logged and skipped; it never aborts its siblings.
/// Only configuration-level problems (an invalid sample limit) abort the
/// whole run.
pub fn run_backup(
    config: &BackupConfig,
    source: &dyn DocumentSource,
    store: &dyn ObjectStore,
    date: NaiveDate,
) -> Result<BackupSummary> {
    let exporter = Exporter::new(config.sample_limit)?;

    let mut summary = BackupSummary::default();
    for target in &config.targets {
        info!(path = %target.path, kind = %target.kind, "Processing export target");

        match export_target(&exporter, source, store, target, date) {
            Ok(TargetOutcome::Uploaded { object, rows }) => {
                info!(path = %target.path, object = %object, rows, "Uploaded export");
                summary.exported.push(ExportedObject {
                    path: target.path.clone(),
                    object,
                    rows,
                });
            }
            Ok(TargetOutcome::Empty) => {
                warn!(path = %target.path, "No documents to export, skipping upload");
                summary.skipped.push(target.path.clone());
            }
            Err(e) => {
                let reason = format!("{e:#}");
                error!(path = %target.path, error = %reason, "Export failed, skipping target");
                summary.failed.push(FailedTarget {
                    path: target.path.clone(),
                    reason,
                });
            }
        }
    }

    Ok(summary)
}

fn export_target(
    exporter: &Exporter,
    source: &dyn DocumentSource,
    store: &dyn ObjectStore,
    target: &ExportTarget,
    date: NaiveDate,
) -> Result<TargetOutcome> {
    let documents = match target.kind {
        TargetKind::Collection => source.collection(&target.path)?,
        TargetKind::Document => vec![source.document(&target.path)?],
    };

    let table = match exporter.build_table(&documents) {
        Ok(table) => table,
        Err(ExportError::EmptyInput) => return Ok(TargetOutcome::Empty),
        Err(e) => return Err(e.into()),
    };

    let bytes = encode_table(&table)?;
    let object = object_name(&target.path, date);
    store.put(&object, &bytes)?;

    Ok(TargetOutcome::Uploaded {
        object,
        rows: table.row_count(),
    })
}
