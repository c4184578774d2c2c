//! install-config.yaml
//!
//! The one asset every other installer artifact is derived from. It is
//! generated from the input assets, or loaded from a hand-edited
//! `install-config.yaml` in the install directory; either way it is validated
//! before anyone can read it.

mod inputs;
mod platform;
mod types;
mod validation;

pub use inputs::{
    BaseDomain, ClusterName, Networking, PullSecret, SshPublicKey, DEFAULT_MACHINE_NETWORK,
};
pub use platform::{is_known_aws_region, PlatformChoice, KNOWN_AWS_REGIONS};
pub use types::{
    AwsPlatform, AzurePlatform, InstallConfigSpec, MachineNetworkEntry, NetworkingConfig,
    ObjectMeta, PlatformConfig, INSTALL_CONFIG_VERSION,
};
pub use validation::{field_errors, validate_install_config, FieldError};

use std::path::Path;

use anyhow::Context;

use crate::domain::asset::{Asset, AssetKey, Parents, WritableAsset};
use crate::domain::entities::File;
use crate::domain::ports::FileFetcher;
use crate::error::InstallerError;

/// Name of the persisted install config
pub const INSTALL_CONFIG_FILENAME: &str = "install-config.yaml";

/// Generates, or loads, install-config.yaml
#[derive(Debug, Default)]
pub struct InstallConfig {
    config: Option<InstallConfigSpec>,
    file: Option<File>,
}

impl InstallConfig {
    /// The validated config, once resolved
    pub fn config(&self) -> Option<&InstallConfigSpec> {
        self.config.as_ref()
    }

    /// The validated config, or an error for an unresolved instance
    pub fn require(&self) -> anyhow::Result<&InstallConfigSpec> {
        self.config
            .as_ref()
            .context("install config has not been resolved")
    }

    fn finish(&mut self, config: InstallConfigSpec) -> anyhow::Result<()> {
        validate_install_config(&config)?;
        let data = serde_yaml_ng::to_string(&config).context("failed to marshal install config")?;
        self.file = Some(File::new(INSTALL_CONFIG_FILENAME, data));
        self.config = Some(config);
        Ok(())
    }
}

impl Asset for InstallConfig {
    fn name(&self) -> &str {
        "Install Config"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![
            AssetKey::of::<SshPublicKey>(),
            AssetKey::of::<BaseDomain>(),
            AssetKey::of::<ClusterName>(),
            AssetKey::of::<Networking>(),
            AssetKey::of::<PullSecret>(),
            AssetKey::of::<PlatformChoice>(),
        ]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let ssh_key = parents.get::<SshPublicKey>()?;
        let base_domain = parents.get::<BaseDomain>()?;
        let cluster_name = parents.get::<ClusterName>()?;
        let networking = parents.get::<Networking>()?;
        let pull_secret = parents.get::<PullSecret>()?;
        let platform = parents.get::<PlatformChoice>()?;

        let config = InstallConfigSpec {
            api_version: INSTALL_CONFIG_VERSION.to_string(),
            metadata: ObjectMeta {
                name: cluster_name.cluster_name.clone(),
            },
            base_domain: base_domain.base_domain.clone(),
            ssh_key: ssh_key.key.clone(),
            pull_secret: pull_secret.pull_secret.clone(),
            networking: NetworkingConfig {
                machine_network: networking
                    .machine_network
                    .iter()
                    .map(|cidr| MachineNetworkEntry { cidr: cidr.clone() })
                    .collect(),
            },
            platform: platform.platform.clone(),
            publish: platform.publish,
        };
        self.finish(config)
    }

    fn as_writable(&self) -> Option<&dyn WritableAsset> {
        Some(self)
    }

    fn as_writable_mut(&mut self) -> Option<&mut dyn WritableAsset> {
        Some(self)
    }
}

impl WritableAsset for InstallConfig {
    fn files(&self) -> Vec<&File> {
        self.file.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> anyhow::Result<bool> {
        let Some(file) = fetcher.fetch_optional(Path::new(INSTALL_CONFIG_FILENAME))? else {
            return Ok(false);
        };

        let config: InstallConfigSpec = serde_yaml_ng::from_slice(file.data()).map_err(|e| {
            InstallerError::InvalidInstallConfig(format!(
                "failed to unmarshal {}: {}",
                INSTALL_CONFIG_FILENAME, e
            ))
        })?;
        self.finish(config)?;
        Ok(true)
    }
}
