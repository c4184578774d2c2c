//! File System Implementations
//!
//! Concrete implementations of the file ports for a local install directory.

mod local;
mod writer;

pub use local::InstallDir;
pub use writer::{persist_files, AssetFileWriter};
