//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod hash;
mod platform;
mod publish;

pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
pub use platform::Platform;
pub use publish::PublishStrategy;
