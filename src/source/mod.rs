//! Document sources that feed the exporter

mod json;

use anyhow::Result;
use serde_json::Value;

pub use self::json::JsonDirSource;

/// A store of semi-structured documents, addressed by path.
///
/// The exporter only needs finite, fully-enumerable results; pagination,
/// authentication and retries are the implementor's concern.
pub trait DocumentSource {
    /// Fetch every document in the collection at `path`
    fn collection(&self, path: &str) -> Result<Vec<Value>>;

    /// Fetch the single document at `path`
    fn document(&self, path: &str) -> Result<Value>;
}
