//! SHA-256 digest of an artifact's bytes
//!
//! The writer compares digests to leave artifacts whose on-disk bytes already
//! match untouched.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(Sha256::digest(content).into())
    }

    /// Digest of the file at `path`; `None` if it cannot be read
    pub fn of_file(path: &Path) -> Option<Self> {
        std::fs::read(path).ok().map(|data| Self::from_bytes(&data))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sha256:")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self)
    }
}
