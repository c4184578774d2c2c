//! Platform value object - the cloud a cluster is installed on

use serde::{Deserialize, Serialize};

/// Cloud platform a cluster is installed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Amazon Web Services
    Aws,
    /// Microsoft Azure
    Azure,
    /// Azure Stack Hub
    #[serde(rename = "azurestack")]
    #[value(name = "azurestack")]
    AzureStack,
}

impl Platform {
    /// Every platform the installer can render assets for
    pub const ALL: [Platform; 3] = [Platform::Aws, Platform::Azure, Platform::AzureStack];

    /// Identifier used in install-config.yaml and Terraform stage names
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Aws => "aws",
            Platform::Azure => "azure",
            Platform::AzureStack => "azurestack",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Aws => "AWS",
            Platform::Azure => "Azure",
            Platform::AzureStack => "Azure Stack Hub",
        }
    }

    /// Parse a platform identifier (case-insensitive)
    pub fn from_id(id: &str) -> Option<Platform> {
        let id = id.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
