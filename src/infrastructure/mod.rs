//! Infrastructure Layer
//!
//! Adapters implementing the domain ports against the local filesystem.

pub mod fs;

pub use fs::{persist_files, AssetFileWriter, InstallDir};
