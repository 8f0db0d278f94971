//! Object stores that receive encoded backups

mod fs;

use anyhow::Result;

pub use self::fs::FsStore;

/// A blob destination for finished CSV exports.
///
/// Object names may contain `/` separators; implementors decide how those
/// map onto their storage layout.
pub trait ObjectStore {
    /// Store `bytes` under `name`, overwriting any previous object
    fn put(&self, name: &str, bytes: &[u8]) -> Result<()>;
}
