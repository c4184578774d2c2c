//! Assets persisted by each `create` subcommand

use clap::ValueEnum;

use crate::assets::cluster::Cluster;
use crate::assets::installconfig::InstallConfig;
use crate::assets::password::TfePassword;
use crate::assets::tfvars::TerraformVariables;
use crate::domain::asset::AssetKey;

/// A `create` target
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    InstallConfig,
    Manifests,
    IgnitionConfigs,
    SingleNodeIgnitionConfig,
    Cluster,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::InstallConfig,
        Target::Manifests,
        Target::IgnitionConfigs,
        Target::SingleNodeIgnitionConfig,
        Target::Cluster,
    ];

    /// Subcommand name, e.g. `ignition-configs`
    pub fn command(&self) -> &'static str {
        match self {
            Target::InstallConfig => "install-config",
            Target::Manifests => "manifests",
            Target::IgnitionConfigs => "ignition-configs",
            Target::SingleNodeIgnitionConfig => "single-node-ignition-config",
            Target::Cluster => "cluster",
        }
    }

    /// Writable assets fetched and persisted for this target, in order
    pub fn assets(&self) -> Vec<AssetKey> {
        match self {
            Target::InstallConfig => vec![AssetKey::of::<InstallConfig>()],
            Target::Manifests | Target::IgnitionConfigs | Target::SingleNodeIgnitionConfig => {
                Vec::new()
            }
            Target::Cluster => vec![
                AssetKey::of::<TerraformVariables>(),
                AssetKey::of::<TfePassword>(),
                AssetKey::of::<Cluster>(),
            ],
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}
