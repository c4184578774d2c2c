//! Terraform variable files
//!
//! `terraform.tfvars.json` carries cluster-wide variables shared by every
//! stage; `terraform.platform.auto.tfvars.json` carries the variables of the
//! configured platform.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::assets::installconfig::{InstallConfig, InstallConfigSpec};
use crate::domain::asset::{Asset, AssetKey, Parents, WritableAsset};
use crate::domain::entities::File;
use crate::domain::ports::FileFetcher;
use crate::domain::value_objects::Platform;

/// Cluster-wide variables
pub const TFVARS_FILENAME: &str = "terraform.tfvars.json";

/// Platform variables, picked up automatically by Terraform
pub const PLATFORM_TFVARS_FILENAME: &str = "terraform.platform.auto.tfvars.json";

#[derive(Debug, Serialize)]
struct ClusterVars<'a> {
    cluster_id: &'a str,
    cluster_domain: String,
    base_domain: &'a str,
    machine_v4_cidrs: Vec<&'a str>,
    machine_v6_cidrs: Vec<&'a str>,
    publish_strategy: String,
}

#[derive(Debug, Serialize)]
struct AwsVars<'a> {
    aws_region: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    aws_extra_tags: BTreeMap<String, String>,
    aws_publish_strategy: String,
}

#[derive(Debug, Serialize)]
struct AzureVars<'a> {
    azure_region: &'a str,
    azure_base_domain_resource_group_name: &'a str,
    azure_environment: &'static str,
}

/// Both Terraform variable files
#[derive(Debug, Default)]
pub struct TerraformVariables {
    files: Vec<File>,
}

impl TerraformVariables {
    /// Parsed content of one of the variable files
    pub fn variables(&self, filename: &str) -> Option<serde_json::Value> {
        self.files
            .iter()
            .find(|f| f.filename() == Path::new(filename))
            .and_then(|f| serde_json::from_slice(f.data()).ok())
    }
}

fn cluster_vars(config: &InstallConfigSpec) -> anyhow::Result<Vec<u8>> {
    let (v4, v6): (Vec<&str>, Vec<&str>) = config
        .networking
        .machine_network
        .iter()
        .map(|entry| entry.cidr.as_str())
        .partition(|cidr| !cidr.contains(':'));
    let vars = ClusterVars {
        cluster_id: &config.metadata.name,
        cluster_domain: config.cluster_domain(),
        base_domain: config.base_domain.trim_end_matches('.'),
        machine_v4_cidrs: v4,
        machine_v6_cidrs: v6,
        publish_strategy: config.publish.to_string(),
    };
    serde_json::to_vec_pretty(&vars).context("failed to render cluster Terraform variables")
}

fn platform_vars(config: &InstallConfigSpec) -> anyhow::Result<Vec<u8>> {
    let platform = config
        .platform_kind()
        .context("install config has no single platform")?;
    let rendered = match platform {
        Platform::Aws => {
            let aws = config
                .platform
                .aws
                .as_ref()
                .context("install config has no aws section")?;
            serde_json::to_vec_pretty(&AwsVars {
                aws_region: &aws.region,
                aws_extra_tags: aws.user_tags.clone(),
                aws_publish_strategy: config.publish.to_string(),
            })
        }
        Platform::Azure | Platform::AzureStack => {
            let (azure, environment) = if platform == Platform::Azure {
                (config.platform.azure.as_ref(), "public")
            } else {
                (config.platform.azurestack.as_ref(), "AzureStackCloud")
            };
            let azure = azure.with_context(|| format!("install config has no {} section", platform))?;
            serde_json::to_vec_pretty(&AzureVars {
                azure_region: &azure.region,
                azure_base_domain_resource_group_name: &azure.base_domain_resource_group_name,
                azure_environment: environment,
            })
        }
    };
    rendered.with_context(|| format!("failed to render {} Terraform variables", platform))
}

impl Asset for TerraformVariables {
    fn name(&self) -> &str {
        "Terraform Variables"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![AssetKey::of::<InstallConfig>()]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let config = parents.get::<InstallConfig>()?.require()?;
        self.files = vec![
            File::new(TFVARS_FILENAME, cluster_vars(config)?),
            File::new(PLATFORM_TFVARS_FILENAME, platform_vars(config)?),
        ];
        Ok(())
    }

    fn as_writable(&self) -> Option<&dyn WritableAsset> {
        Some(self)
    }

    fn as_writable_mut(&mut self) -> Option<&mut dyn WritableAsset> {
        Some(self)
    }
}

impl WritableAsset for TerraformVariables {
    fn files(&self) -> Vec<&File> {
        self.files.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> anyhow::Result<bool> {
        let Some(cluster) = fetcher.fetch_optional(Path::new(TFVARS_FILENAME))? else {
            return Ok(false);
        };
        let mut files = vec![cluster];
        if let Some(platform) = fetcher.fetch_optional(Path::new(PLATFORM_TFVARS_FILENAME))? {
            files.push(platform);
        }
        for file in &files {
            serde_json::from_slice::<serde_json::Value>(file.data())
                .with_context(|| format!("failed to parse {}", file.filename().display()))?;
        }
        self.files = files;
        Ok(true)
    }
}
