//! Installer assets
//!
//! Input assets gather answers, `InstallConfig` turns them into
//! install-config.yaml, and the cluster assets derive Terraform variables,
//! credentials and the provisioning plan from it.

mod answers;
pub mod cluster;
pub mod installconfig;
pub mod password;
mod prompt;
pub mod targets;
pub mod tfvars;

pub use answers::Answers;
pub use cluster::{Cluster, ClusterMetadata};
pub use installconfig::InstallConfig;
pub use password::TfePassword;
pub use targets::Target;
pub use tfvars::TerraformVariables;
