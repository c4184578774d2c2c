//! Domain Entities
//!
//! - `File` - one persisted artifact of a writable asset

mod file;

pub use file::{is_contained, File};
