//! FileFetcher port - retrieves previously persisted artifacts by name
//!
//! `Load` implementations map `FetchError::NotFound` to "no persisted form
//! exists" and every other error to a load failure.

use std::path::{Path, PathBuf};

use crate::domain::entities::File;

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors returned while fetching a persisted artifact
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Nothing is persisted under this name
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The requested name would resolve outside the install directory
    #[error("path '{}' escapes install directory '{}'", path.display(), root.display())]
    PathEscape { path: PathBuf, root: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// True when the artifact simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

/// Read-only access to the artifacts persisted in an install directory
pub trait FileFetcher {
    /// Fetch one artifact by its path relative to the install directory
    fn fetch_by_name(&self, name: &Path) -> FetchResult<File>;

    /// Fetch an artifact, mapping "not found" to `None`
    fn fetch_optional(&self, name: &Path) -> FetchResult<Option<File>> {
        match self.fetch_by_name(name) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Removes persisted artifacts from an install directory
pub trait FileRemover {
    /// Remove the artifact stored under `name`; a missing file is not an error
    fn remove_by_name(&self, name: &Path) -> std::io::Result<()>;
}

/// Read and delete access to one install directory, as used by the asset store
pub trait AssetDirectory: FileFetcher + FileRemover {
    fn as_fetcher(&self) -> &dyn FileFetcher;
}

impl<T: FileFetcher + FileRemover> AssetDirectory for T {
    fn as_fetcher(&self) -> &dyn FileFetcher {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapFetcher(HashMap<PathBuf, Vec<u8>>);

    impl FileFetcher for MapFetcher {
        fn fetch_by_name(&self, name: &Path) -> FetchResult<File> {
            self.0
                .get(name)
                .map(|data| File::new(name, data.clone()))
                .ok_or_else(|| FetchError::NotFound(name.to_path_buf()))
        }
    }

    #[test]
    fn fetch_error_display_names_path() {
        let err = FetchError::NotFound(PathBuf::from("install-config.yaml"));
        assert!(err.to_string().contains("install-config.yaml"));
        assert!(err.is_not_found());
    }

    #[test]
    fn io_error_is_not_not_found() {
        let err = FetchError::Io {
            path: PathBuf::from("auth"),
            source: std::io::Error::other("is a directory"),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn fetch_optional_maps_not_found_to_none() {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("present"), b"x".to_vec());
        let fetcher = MapFetcher(files);

        assert!(fetcher.fetch_optional(Path::new("missing")).unwrap().is_none());
        assert_eq!(
            fetcher
                .fetch_optional(Path::new("present"))
                .unwrap()
                .unwrap()
                .data(),
            b"x"
        );
    }
}
