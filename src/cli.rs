use std::path::PathBuf;

use clap::{Parser, Subcommand};
use terraform_installer::Target;

/// terraform-install - renders install assets for Terraform-provisioned clusters
#[derive(Parser, Debug)]
#[command(name = "terraform-install")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Assets directory
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Log level (e.g. "debug" or "warn") [default: info]
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create part of a Terraform installation
    Create {
        #[command(subcommand)]
        target: CreateTarget,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTarget {
    /// Generates the Install Config asset
    InstallConfig,
    /// Generates the Kubernetes manifests
    Manifests,
    /// Generates the Ignition Config asset
    IgnitionConfigs,
    /// Generates the bootstrap-in-place Ignition Config asset
    SingleNodeIgnitionConfig,
    /// Plans the cluster and writes Terraform variables and credentials
    Cluster,
}

impl CreateTarget {
    pub fn target(self) -> Target {
        match self {
            CreateTarget::InstallConfig => Target::InstallConfig,
            CreateTarget::Manifests => Target::Manifests,
            CreateTarget::IgnitionConfigs => Target::IgnitionConfigs,
            CreateTarget::SingleNodeIgnitionConfig => Target::SingleNodeIgnitionConfig,
            CreateTarget::Cluster => Target::Cluster,
        }
    }
}
