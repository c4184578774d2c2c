//! Local install directory
//!
//! Implements the FileFetcher and FileRemover ports for one directory on disk.

use std::path::{Path, PathBuf};

use crate::domain::entities::{is_contained, File};
use crate::domain::ports::{FetchError, FetchResult, FileFetcher, FileRemover};

/// An install directory on the local file system
#[derive(Debug, Clone)]
pub struct InstallDir {
    root: PathBuf,
}

impl InstallDir {
    /// Create a new InstallDir rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute-or-relative path of an artifact, rejecting names that escape the root
    pub fn resolve(&self, name: &Path) -> Option<PathBuf> {
        is_contained(name).then(|| self.root.join(name))
    }
}

impl FileFetcher for InstallDir {
    fn fetch_by_name(&self, name: &Path) -> FetchResult<File> {
        let path = self.resolve(name).ok_or_else(|| FetchError::PathEscape {
            path: name.to_path_buf(),
            root: self.root.clone(),
        })?;

        match std::fs::read(&path) {
            Ok(data) => Ok(File::new(name, data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(name.to_path_buf()))
            }
            Err(source) => Err(FetchError::Io { path, source }),
        }
    }
}

impl FileRemover for InstallDir {
    fn remove_by_name(&self, name: &Path) -> std::io::Result<()> {
        let Some(path) = self.resolve(name) else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path '{}' escapes install directory", name.display()),
            ));
        };

        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        }

        prune_empty_parents(&self.root, &path);
        Ok(())
    }
}

/// Remove directories left empty by a deletion, stopping at the root
fn prune_empty_parents(root: &Path, removed: &Path) {
    let mut current = removed.parent();
    while let Some(dir) = current {
        if dir == root || !dir.starts_with(root) {
            break;
        }
        // Fails (and stops) on the first non-empty directory
        if std::fs::remove_dir(dir).is_err() {
            break;
        }
        current = dir.parent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fetch_reads_existing_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("auth")).unwrap();
        std::fs::write(dir.path().join("auth/tfe-password"), "secret").unwrap();
        let install_dir = InstallDir::new(dir.path());

        let file = install_dir
            .fetch_by_name(Path::new("auth/tfe-password"))
            .unwrap();

        assert_eq!(file.filename(), Path::new("auth/tfe-password"));
        assert_eq!(file.data(), b"secret");
    }

    #[test]
    fn fetch_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let install_dir = InstallDir::new(dir.path());

        let err = install_dir
            .fetch_by_name(Path::new("install-config.yaml"))
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn fetch_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("auth")).unwrap();
        let install_dir = InstallDir::new(dir.path());

        let err = install_dir.fetch_by_name(Path::new("auth")).unwrap_err();

        assert!(!err.is_not_found());
    }

    #[test]
    fn fetch_rejects_escaping_names() {
        let dir = tempdir().unwrap();
        let install_dir = InstallDir::new(dir.path().join("install"));

        let err = install_dir
            .fetch_by_name(Path::new("../secret"))
            .unwrap_err();

        assert!(matches!(err, FetchError::PathEscape { .. }));
    }

    #[test]
    fn remove_deletes_file_and_empty_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("tls/certs");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("ca.crt"), "ca").unwrap();
        let install_dir = InstallDir::new(dir.path());

        install_dir
            .remove_by_name(Path::new("tls/certs/ca.crt"))
            .unwrap();

        assert!(!dir.path().join("tls").exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn remove_keeps_non_empty_parents() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("auth")).unwrap();
        std::fs::write(dir.path().join("auth/a"), "a").unwrap();
        std::fs::write(dir.path().join("auth/b"), "b").unwrap();
        let install_dir = InstallDir::new(dir.path());

        install_dir.remove_by_name(Path::new("auth/a")).unwrap();

        assert!(dir.path().join("auth/b").exists());
    }

    #[test]
    fn remove_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        let install_dir = InstallDir::new(dir.path());

        install_dir.remove_by_name(Path::new("gone.json")).unwrap();
    }
}
