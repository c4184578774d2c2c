//! The install-config.yaml document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Platform, PublishStrategy};

/// Only supported `apiVersion`
pub const INSTALL_CONFIG_VERSION: &str = "v1";

/// Parsed install-config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstallConfigSpec {
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub base_domain: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssh_key: String,
    #[serde(default)]
    pub pull_secret: String,
    #[serde(default)]
    pub networking: NetworkingConfig,
    pub platform: PlatformConfig,
    #[serde(default)]
    pub publish: PublishStrategy,
}

impl InstallConfigSpec {
    /// `<name>.<baseDomain>`
    pub fn cluster_domain(&self) -> String {
        format!(
            "{}.{}",
            self.metadata.name,
            self.base_domain.trim_end_matches('.')
        )
    }

    /// The configured platform, if exactly one is set
    pub fn platform_kind(&self) -> Option<Platform> {
        self.platform.kind()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectMeta {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkingConfig {
    #[serde(default)]
    pub machine_network: Vec<MachineNetworkEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineNetworkEntry {
    pub cidr: String,
}

/// Platform section; exactly one member is expected to be set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzurePlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azurestack: Option<AzurePlatform>,
}

impl PlatformConfig {
    /// Platforms that have a section, in declaration order
    pub fn configured(&self) -> Vec<Platform> {
        let mut configured = Vec::new();
        if self.aws.is_some() {
            configured.push(Platform::Aws);
        }
        if self.azure.is_some() {
            configured.push(Platform::Azure);
        }
        if self.azurestack.is_some() {
            configured.push(Platform::AzureStack);
        }
        configured
    }

    pub fn kind(&self) -> Option<Platform> {
        match self.configured().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<&str> {
        if let Some(aws) = &self.aws {
            return Some(&aws.region);
        }
        self.azure
            .as_ref()
            .or(self.azurestack.as_ref())
            .map(|azure| azure.region.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AwsPlatform {
    pub region: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub user_tags: BTreeMap<String, String>,
}

/// Shared by Azure and Azure Stack Hub
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AzurePlatform {
    pub region: String,
    pub base_domain_resource_group_name: String,
}
