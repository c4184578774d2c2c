//! Terraform stage plans
//!
//! A cluster is provisioned by applying a fixed sequence of Terraform
//! stages. This module only describes those stages; nothing here invokes
//! Terraform.

mod stages;

pub use stages::{stages_for_platform, UnsupportedPlatform};

use serde::Serialize;

/// Terraform provider a stage needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Aws,
    AzureRm,
    AzureStack,
}

impl Provider {
    /// Local provider name, e.g. `azurerm`
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::AzureRm => "azurerm",
            Provider::AzureStack => "azurestack",
        }
    }

    /// Registry source address
    pub fn source(&self) -> &'static str {
        match self {
            Provider::Aws => "hashicorp/aws",
            Provider::AzureRm => "hashicorp/azurerm",
            Provider::AzureStack => "hashicorp/azurestack",
        }
    }
}

/// One `terraform apply` in the provisioning sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    platform: &'static str,
    name: &'static str,
    providers: Vec<Provider>,
    destroy_with_bootstrap: bool,
}

impl Stage {
    pub fn new(platform: &'static str, name: &'static str, providers: Vec<Provider>) -> Self {
        Self {
            platform,
            name,
            providers,
            destroy_with_bootstrap: false,
        }
    }

    /// Mark the stage's resources for removal once bootstrap completes
    pub fn with_bootstrap_destroy(mut self) -> Self {
        self.destroy_with_bootstrap = true;
        self
    }

    pub fn platform(&self) -> &'static str {
        self.platform
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn destroy_with_bootstrap(&self) -> bool {
        self.destroy_with_bootstrap
    }

    /// State file the stage would write
    pub fn state_filename(&self) -> String {
        format!("terraform.{}.tfstate", self.name)
    }

    /// Variables file the stage's outputs would be written to
    pub fn outputs_filename(&self) -> String {
        format!("{}.tfvars.json", self.name)
    }
}
