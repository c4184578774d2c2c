//! Installer inputs configuration
//!
//! Answers for the input assets come from, highest priority first:
//! 1. Environment variables (`TERRAFORM_INSTALL_*`)
//! 2. `<dir>/install-inputs.toml`
//! 3. Interactive prompts (only when stdin is a terminal)
//!
//! `--log-level` on the command line beats `[log] level` in the file.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{env_key, CONFIG_FILE_NAME, ENV_PREFIX};
pub use types::{AnswersConfig, Config, LogConfig, LogLevel};
