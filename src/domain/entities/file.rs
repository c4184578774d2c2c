//! File entity - one persisted artifact of a writable asset
//!
//! A `File` is a named byte blob. Its filename is a relative path under the
//! install directory and uniquely identifies the persisted representation of
//! (part of) an asset.

use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// A named artifact ready to be written to, or just read from, an install directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path relative to the install directory
    filename: PathBuf,
    /// Raw content
    data: Vec<u8>,
}

impl File {
    /// Create a new File
    pub fn new(filename: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    /// Relative filename
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Raw content
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Content as UTF-8, if it is valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// Consume the file and return its content
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Compute the SHA-256 hash of the content
    pub fn content_hash(&self) -> ContentHash {
        ContentHash::from_bytes(&self.data)
    }

    /// Check if content is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get content length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Returns true if `name` stays inside the directory it is joined to.
///
/// Absolute paths, drive prefixes and any `..` component are rejected.
pub fn is_contained(name: &Path) -> bool {
    !name.as_os_str().is_empty()
        && name
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_new_stores_filename_and_data() {
        let file = File::new("auth/tfe-password", "secret");

        assert_eq!(file.filename(), Path::new("auth/tfe-password"));
        assert_eq!(file.data(), b"secret");
        assert_eq!(file.text(), Some("secret"));
    }

    #[test]
    fn file_text_none_for_binary() {
        let file = File::new("blob.bin", vec![0xff, 0xfe]);

        assert!(file.text().is_none());
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn file_hash_ignores_filename() {
        let a = File::new("a.yaml", "same");
        let b = File::new("b.yaml", "same");

        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn file_empty() {
        assert!(File::new("auth/tfe-password", Vec::new()).is_empty());
    }

    #[test]
    fn contained_paths() {
        assert!(is_contained(Path::new("install-config.yaml")));
        assert!(is_contained(Path::new("auth/tfe-password")));
        assert!(is_contained(Path::new("./auth/kubeconfig")));
    }

    #[test]
    fn escaping_paths_are_rejected() {
        assert!(!is_contained(Path::new("")));
        assert!(!is_contained(Path::new("../outside")));
        assert!(!is_contained(Path::new("auth/../../outside")));
        assert!(!is_contained(Path::new("/etc/passwd")));
    }
}
