//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_fetcher;
pub mod file_writer;

pub use file_fetcher::{AssetDirectory, FetchError, FetchResult, FileFetcher, FileRemover};
pub use file_writer::{FileWriter, PersistError};
