//! docdump - Schema-inferring CSV backup for document collections
//!
//! Infers a column schema from a bounded sample of semi-structured
//! documents, projects every document onto it, and ships the resulting
//! CSV to an object store, one object per configured target.

pub mod backup;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod source;
pub mod store;

pub use backup::{run_backup, BackupSummary};
pub use config::BackupConfig;
pub use error::ExportError;
pub use export::Exporter;
pub use model::{Schema, Table};
