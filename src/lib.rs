//! terraform-installer - renders install assets for Terraform-provisioned clusters
//!
//! Assets are typed producers with statically declared dependencies. A
//! [`Store`](domain::asset::Store) resolves a target's dependency closure,
//! rehydrating what was previously written to the install directory and
//! generating the rest; the `create` use case then writes the target's
//! artifacts back to disk.

pub mod application;
pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod terraform;

// Re-exports for convenience
pub use application::{CreateResult, CreateUseCase};
pub use assets::{Answers, Target};
pub use config::{Config, ConfigWarning, LogLevel};
pub use domain::asset::{Asset, AssetKey, AssetSource, Parents, Store, StoreError, WritableAsset};
pub use domain::entities::File;
pub use error::{exit_code_for, InstallerError, InstallerResult};
pub use infrastructure::fs::{AssetFileWriter, InstallDir};
