//! Cluster provisioning plan
//!
//! Records which Terraform stages would be applied, in order, for the
//! configured platform. The plan is regenerated on every run; a leftover
//! Terraform state file means a cluster may already exist and is refused.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::assets::installconfig::InstallConfig;
use crate::assets::password::TfePassword;
use crate::assets::tfvars::TerraformVariables;
use crate::domain::asset::{Asset, AssetKey, Parents, WritableAsset};
use crate::domain::entities::File;
use crate::domain::ports::FileFetcher;
use crate::domain::value_objects::Platform;
use crate::error::InstallerError;
use crate::terraform::{stages_for_platform, Stage};

/// Where the plan is written
pub const METADATA_FILENAME: &str = "metadata.json";

/// Terraform state left behind by a previous provisioning run
pub const STATE_FILENAME: &str = "terraform.tfstate";

/// One planned stage as recorded in metadata.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedStage {
    pub name: String,
    pub providers: Vec<String>,
    pub destroy_with_bootstrap: bool,
}

impl From<&Stage> for PlannedStage {
    fn from(stage: &Stage) -> Self {
        Self {
            name: stage.name().to_string(),
            providers: stage
                .providers()
                .iter()
                .map(|p| p.source().to_string())
                .collect(),
            destroy_with_bootstrap: stage.destroy_with_bootstrap(),
        }
    }
}

/// Content of metadata.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMetadata {
    pub cluster_name: String,
    pub cluster_domain: String,
    pub platform: Platform,
    pub stages: Vec<PlannedStage>,
}

#[derive(Debug, Default)]
pub struct Cluster {
    metadata: Option<ClusterMetadata>,
    file: Option<File>,
}

impl Cluster {
    pub fn metadata(&self) -> Option<&ClusterMetadata> {
        self.metadata.as_ref()
    }
}

impl Asset for Cluster {
    fn name(&self) -> &str {
        "Cluster"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![
            AssetKey::of::<InstallConfig>(),
            AssetKey::of::<TerraformVariables>(),
            AssetKey::of::<TfePassword>(),
        ]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let config = parents.get::<InstallConfig>()?.require()?;
        let variables = parents.get::<TerraformVariables>()?;
        let password = parents.get::<TfePassword>()?;

        if password.password_hash().is_empty() {
            return Err(InstallerError::ClusterCreation("TFE password has no hash".into()).into());
        }

        let platform = config.platform_kind().ok_or_else(|| {
            InstallerError::ClusterCreation("install config does not name a single platform".into())
        })?;
        let stages = stages_for_platform(platform.id())
            .map_err(|e| InstallerError::ClusterCreation(e.to_string()))?;
        debug!(
            platform = %platform,
            stages = stages.len(),
            variable_files = variables.files().len(),
            "Planned Terraform stages"
        );
        for stage in &stages {
            info!(stage = stage.name(), "Stage {} will be applied", stage.name());
        }

        let metadata = ClusterMetadata {
            cluster_name: config.metadata.name.clone(),
            cluster_domain: config.cluster_domain(),
            platform,
            stages: stages.iter().map(PlannedStage::from).collect(),
        };
        let data = serde_json::to_vec_pretty(&metadata).context("failed to marshal cluster metadata")?;
        self.file = Some(File::new(METADATA_FILENAME, data));
        self.metadata = Some(metadata);
        Ok(())
    }

    fn as_writable(&self) -> Option<&dyn WritableAsset> {
        Some(self)
    }

    fn as_writable_mut(&mut self) -> Option<&mut dyn WritableAsset> {
        Some(self)
    }
}

impl WritableAsset for Cluster {
    fn files(&self) -> Vec<&File> {
        self.file.iter().collect()
    }

    /// Never loads; fails if Terraform state from an earlier run is present
    fn load(&mut self, fetcher: &dyn FileFetcher) -> anyhow::Result<bool> {
        if fetcher.fetch_optional(Path::new(STATE_FILENAME))?.is_some() {
            return Err(InstallerError::ClusterCreation(format!(
                "{:?} already exists; there may already be a running cluster",
                STATE_FILENAME
            ))
            .into());
        }
        Ok(false)
    }
}
