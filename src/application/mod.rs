//! Application Layer
//!
//! Use cases that orchestrate the asset store and the install directory.
//!
//! ## Use Cases
//!
//! - `CreateUseCase` - Fetches the assets of a `create` target and writes them

pub mod create;

pub use create::{CreateResult, CreateUseCase};
