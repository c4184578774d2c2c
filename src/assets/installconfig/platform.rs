//! Platform input: which cloud, which region, and how to publish

use crate::assets::prompt::Question;
use crate::assets::Answers;
use crate::domain::asset::{Asset, AssetKey, Parents};
use crate::domain::value_objects::{Platform, PublishStrategy};

use super::types::{AwsPlatform, AzurePlatform, PlatformConfig};

/// Public AWS regions the installer knows how to provision in
pub const KNOWN_AWS_REGIONS: &[(&str, &str)] = &[
    ("af-south-1", "Africa (Cape Town)"),
    ("ap-east-1", "Asia Pacific (Hong Kong)"),
    ("ap-northeast-1", "Asia Pacific (Tokyo)"),
    ("ap-northeast-2", "Asia Pacific (Seoul)"),
    ("ap-northeast-3", "Asia Pacific (Osaka)"),
    ("ap-south-1", "Asia Pacific (Mumbai)"),
    ("ap-southeast-1", "Asia Pacific (Singapore)"),
    ("ap-southeast-2", "Asia Pacific (Sydney)"),
    ("ca-central-1", "Canada (Central)"),
    ("eu-central-1", "Europe (Frankfurt)"),
    ("eu-north-1", "Europe (Stockholm)"),
    ("eu-south-1", "Europe (Milan)"),
    ("eu-west-1", "Europe (Ireland)"),
    ("eu-west-2", "Europe (London)"),
    ("eu-west-3", "Europe (Paris)"),
    ("me-south-1", "Middle East (Bahrain)"),
    ("sa-east-1", "South America (Sao Paulo)"),
    ("us-east-1", "US East (N. Virginia)"),
    ("us-east-2", "US East (Ohio)"),
    ("us-west-1", "US West (N. California)"),
    ("us-west-2", "US West (Oregon)"),
];

const DEFAULT_AWS_REGION: &str = "us-east-1";

const PLATFORM: Question = Question::new("platform", "platform", "Platform");
const REGION: Question = Question::new("region", "region", "Region");
const RESOURCE_GROUP: Question = Question::new(
    "base domain resource group",
    "base_domain_resource_group",
    "Base Domain Resource Group",
);

pub fn is_known_aws_region(region: &str) -> bool {
    KNOWN_AWS_REGIONS.iter().any(|(id, _)| *id == region)
}

/// The platform section of install-config plus the publish strategy
#[derive(Debug, Clone, Default)]
pub struct PlatformChoice {
    pub platform: PlatformConfig,
    pub publish: PublishStrategy,
}

impl PlatformChoice {
    pub fn kind(&self) -> Option<Platform> {
        self.platform.kind()
    }
}

impl Asset for PlatformChoice {
    fn name(&self) -> &str {
        "Platform"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![AssetKey::of::<Answers>()]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let answers = parents.get::<Answers>()?.values();

        let platform = match answers.platform {
            Some(platform) => platform,
            None => {
                let names: Vec<String> = Platform::ALL
                    .iter()
                    .map(|p| p.display_name().to_string())
                    .collect();
                Platform::ALL[PLATFORM.select(&names, 0)?]
            }
        };
        tracing::debug!(platform = %platform, "Platform chosen");

        self.platform = match platform {
            Platform::Aws => PlatformConfig {
                aws: Some(AwsPlatform {
                    region: aws_region(answers.region.as_deref())?,
                    ..Default::default()
                }),
                ..Default::default()
            },
            Platform::Azure => PlatformConfig {
                azure: Some(azure_platform(
                    answers.region.as_deref(),
                    answers.base_domain_resource_group.as_deref(),
                )?),
                ..Default::default()
            },
            Platform::AzureStack => PlatformConfig {
                azurestack: Some(azure_platform(
                    answers.region.as_deref(),
                    answers.base_domain_resource_group.as_deref(),
                )?),
                ..Default::default()
            },
        };
        self.publish = answers.publish.unwrap_or_default();
        Ok(())
    }
}

fn aws_region(preset: Option<&str>) -> anyhow::Result<String> {
    if let Some(region) = preset {
        return Ok(region.trim().to_string());
    }
    let items: Vec<String> = KNOWN_AWS_REGIONS
        .iter()
        .map(|(id, description)| format!("{} ({})", id, description))
        .collect();
    let default = KNOWN_AWS_REGIONS
        .iter()
        .position(|(id, _)| *id == DEFAULT_AWS_REGION)
        .unwrap_or(0);
    let index = REGION.select(&items, default)?;
    Ok(KNOWN_AWS_REGIONS[index].0.to_string())
}

fn azure_platform(region: Option<&str>, group: Option<&str>) -> anyhow::Result<AzurePlatform> {
    let region = match region {
        Some(region) => region.trim().to_string(),
        None => REGION.text(None, required)?,
    };
    let base_domain_resource_group_name = match group {
        Some(group) => group.trim().to_string(),
        None => RESOURCE_GROUP.text(None, required)?,
    };
    Ok(AzurePlatform {
        region,
        base_domain_resource_group_name,
    })
}

fn required(value: &str) -> Result<(), String> {
    if value.is_empty() {
        Err("a value is required".to_string())
    } else {
        Ok(())
    }
}
