//! Artifact writer
//!
//! Persists every artifact of one writable asset. Each artifact is first
//! staged in a temporary file next to its destination; only when all of them
//! are staged are they renamed into place. A file being replaced is first
//! moved aside; if a later rename fails, every destination touched by this
//! call gets its previous content back (or is removed when it did not exist
//! before), so the asset is never left half-persisted.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempPath};
use tracing::{debug, warn};

use crate::domain::asset::WritableAsset;
use crate::domain::entities::{is_contained, File};
use crate::domain::ports::{FileWriter, PersistError};
use crate::domain::value_objects::ContentHash;

/// Default FileWriter for a writable asset
pub struct AssetFileWriter<'a> {
    asset: &'a dyn WritableAsset,
}

impl<'a> AssetFileWriter<'a> {
    pub fn new(asset: &'a dyn WritableAsset) -> Self {
        Self { asset }
    }
}

impl FileWriter for AssetFileWriter<'_> {
    fn persist_to_file(&self, dir: &Path) -> Result<Vec<PathBuf>, PersistError> {
        persist_files(dir, &self.asset.files())
    }
}

struct Staged {
    temp: NamedTempFile,
    destination: PathBuf,
}

/// Write `files` under `dir`, all or nothing. Returns the paths written.
///
/// Files whose on-disk content already matches are left untouched but still
/// reported.
pub fn persist_files(dir: &Path, files: &[&File]) -> Result<Vec<PathBuf>, PersistError> {
    let mut staged = Vec::with_capacity(files.len());
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        if !is_contained(file.filename()) {
            return Err(PersistError::PathEscape {
                path: file.filename().to_path_buf(),
                root: dir.to_path_buf(),
            });
        }
        let destination = dir.join(file.filename());
        written.push(destination.clone());

        if is_unchanged(&destination, file) {
            debug!(file = %destination.display(), "Unchanged, skipping write");
            continue;
        }
        staged.push(stage(&destination, file)?);
    }

    let mut moved: Vec<Moved> = Vec::with_capacity(staged.len());
    for Staged { temp, destination } in staged {
        let backup = match back_up(&destination) {
            Ok(backup) => backup,
            Err(source) => {
                roll_back(moved);
                return Err(PersistError::Write {
                    path: destination,
                    source,
                });
            }
        };
        if let Err(e) = temp.persist(&destination) {
            roll_back(vec![Moved {
                destination: destination.clone(),
                backup,
                replaced: false,
            }]);
            roll_back(moved);
            return Err(PersistError::Write {
                path: destination,
                source: e.error,
            });
        }
        debug!(file = %destination.display(), "Wrote artifact");
        moved.push(Moved {
            destination,
            backup,
            replaced: true,
        });
    }

    // Dropping the backups deletes them.
    Ok(written)
}

/// A destination touched by the current persist call
struct Moved {
    destination: PathBuf,
    /// Previous content, moved aside
    backup: Option<TempPath>,
    /// Whether new content was renamed onto `destination`
    replaced: bool,
}

/// Move an existing regular file at `destination` aside, next to it.
fn back_up(destination: &Path) -> io::Result<Option<TempPath>> {
    if !destination.is_file() {
        return Ok(None);
    }
    let parent = destination.parent().unwrap_or_else(|| Path::new("."));
    let saved = tempfile::Builder::new()
        .prefix(".backup-")
        .tempfile_in(parent)?
        .into_temp_path();
    std::fs::rename(destination, &saved)?;
    Ok(Some(saved))
}

/// Undo `moved` in reverse order.
fn roll_back(moved: Vec<Moved>) {
    for Moved {
        destination,
        backup,
        replaced,
    } in moved.into_iter().rev()
    {
        match backup {
            Some(saved) => {
                if let Err(e) = saved.persist(&destination) {
                    warn!(
                        file = %destination.display(),
                        error = %e.error,
                        "Failed to restore previous content"
                    );
                }
            }
            None if replaced => {
                if let Err(e) = std::fs::remove_file(&destination) {
                    warn!(
                        file = %destination.display(),
                        error = %e,
                        "Failed to remove partially persisted file"
                    );
                }
            }
            None => {}
        }
    }
}

fn is_unchanged(destination: &Path, file: &File) -> bool {
    ContentHash::of_file(destination) == Some(file.content_hash())
}

fn stage(destination: &Path, file: &File) -> Result<Staged, PersistError> {
    let write_err = |source| PersistError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let parent = destination.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp.write_all(file.data()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    Ok(Staged {
        temp,
        destination: destination.to_path_buf(),
    })
}
