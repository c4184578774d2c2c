//! Error types for the installer
//!
//! The asset core has its own error enums (`StoreError`, `FetchError`,
//! `PersistError`). `InstallerError` covers what concrete assets and the
//! CLI layer report, and decides the process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for installer operations
pub type InstallerResult<T> = Result<T, InstallerError>;

/// Exit code for an invalid or unreadable install config
pub const EXIT_INSTALL_CONFIG: i32 = 3;
/// Exit code for failures while planning infrastructure
pub const EXIT_INFRASTRUCTURE: i32 = 4;
/// Exit code for everything else
pub const EXIT_GENERIC: i32 = 1;

/// Main error type for installer operations
#[derive(Error, Debug)]
pub enum InstallerError {
    /// install-config failed validation
    #[error("invalid install config: {0}")]
    InvalidInstallConfig(String),

    /// Infrastructure plan could not be built
    #[error("failed to create cluster: {0}")]
    ClusterCreation(String),

    /// Interactive prompt failed or was aborted
    #[error("failed to prompt for {field}: {message}")]
    Prompt { field: String, message: String },

    /// A required answer is missing and there is no terminal to ask on
    #[error("no value for {field}; set {env} or add it to install-inputs.toml")]
    MissingAnswer { field: String, env: String },

    /// Invalid install-inputs.toml
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstallerError {
    /// Exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallerError::InvalidInstallConfig(_) => EXIT_INSTALL_CONFIG,
            InstallerError::ClusterCreation(_) => EXIT_INFRASTRUCTURE,
            _ => EXIT_GENERIC,
        }
    }
}

/// Exit code for an arbitrary error chain.
///
/// The first `InstallerError` found in the chain decides; anything else is
/// a generic failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<InstallerError>())
        .map(InstallerError::exit_code)
        .unwrap_or(EXIT_GENERIC)
}
