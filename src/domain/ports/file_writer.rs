//! FileWriter port - persists the artifacts of one writable asset

use std::path::{Path, PathBuf};

/// Errors returned while persisting artifacts
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// An artifact name would resolve outside the install directory
    #[error("artifact path '{}' escapes install directory '{}'", path.display(), root.display())]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Writing an artifact failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes every artifact of an asset under a base directory.
///
/// Implementations are all-or-nothing per asset: when one artifact cannot be
/// written the error is returned and no artifact of that asset is left
/// half-persisted.
pub trait FileWriter {
    /// Persist all artifacts under `dir`, returning the paths written
    fn persist_to_file(&self, dir: &Path) -> Result<Vec<PathBuf>, PersistError>;
}
