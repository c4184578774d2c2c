//! Domain Layer
//!
//! The asset graph and the types it is built from.
//!
//! ## Structure
//!
//! - `asset/` - Asset traits, the memoizing `Store`, typed `Parents`
//! - `entities/` - `File`, one persisted artifact
//! - `value_objects/` - Immutable value types (Platform, PublishStrategy, ContentHash)
//! - `ports/` - Interface definitions for reading, removing and writing artifacts
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - The store reaches the install directory only through ports
//! 2. **Typed identity** - Asset variants are Rust types, not strings
//! 3. **Ports & Adapters** - Filesystem adapters live in `infrastructure`

pub mod asset;
pub mod entities;
pub mod ports;
pub mod value_objects;
