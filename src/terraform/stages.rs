//! Stage sequences per platform

use super::{Provider, Stage};
use crate::domain::value_objects::Platform;

/// No stage sequence exists for the requested platform
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported platform {0:?}")]
pub struct UnsupportedPlatform(pub String);

/// Stages to apply, in order, to provision `platform` (a platform id such as
/// `aws` or `azurestack`)
pub fn stages_for_platform(platform: &str) -> Result<Vec<Stage>, UnsupportedPlatform> {
    match Platform::from_id(platform) {
        Some(Platform::Aws) => Ok(aws_stages()),
        Some(Platform::Azure) => Ok(azure_stages("azure", Provider::AzureRm)),
        Some(Platform::AzureStack) => Ok(azure_stages("azurestack", Provider::AzureStack)),
        None => Err(UnsupportedPlatform(platform.to_string())),
    }
}

fn aws_stages() -> Vec<Stage> {
    vec![
        Stage::new("aws", "vpc", vec![Provider::Aws]),
        Stage::new("aws", "bootstrap", vec![Provider::Aws]).with_bootstrap_destroy(),
        Stage::new("aws", "cluster", vec![Provider::Aws]),
    ]
}

fn azure_stages(platform: &'static str, provider: Provider) -> Vec<Stage> {
    vec![
        Stage::new(platform, "vnet", vec![provider]),
        Stage::new(platform, "bootstrap", vec![provider]).with_bootstrap_destroy(),
        Stage::new(platform, "cluster", vec![provider]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(stages: &[Stage]) -> Vec<&'static str> {
        stages.iter().map(Stage::name).collect()
    }

    #[test]
    fn aws_stage_order() {
        let stages = stages_for_platform("aws").unwrap();
        assert_eq!(names(&stages), vec!["vpc", "bootstrap", "cluster"]);
        assert!(stages.iter().all(|s| s.providers() == [Provider::Aws]));
        assert_eq!(stages[1].state_filename(), "terraform.bootstrap.tfstate");
    }

    #[test]
    fn azure_and_stack_share_stage_names_but_not_providers() {
        let azure = stages_for_platform("azure").unwrap();
        let stack = stages_for_platform("azurestack").unwrap();

        assert_eq!(names(&azure), vec!["vnet", "bootstrap", "cluster"]);
        assert_eq!(names(&azure), names(&stack));
        assert_eq!(azure[0].providers(), [Provider::AzureRm]);
        assert_eq!(stack[0].providers(), [Provider::AzureStack]);
        assert_eq!(stack[0].platform(), "azurestack");
    }

    #[test]
    fn only_bootstrap_is_destroyed_with_bootstrap() {
        for platform in Platform::ALL {
            let stages = stages_for_platform(platform.id()).unwrap();
            let destroyed: Vec<_> = stages
                .iter()
                .filter(|s| s.destroy_with_bootstrap())
                .map(Stage::name)
                .collect();
            assert_eq!(destroyed, vec!["bootstrap"]);
        }
    }

    #[test]
    fn unknown_platform_is_an_error() {
        let err = stages_for_platform("vsphere").unwrap_err();
        assert_eq!(err.to_string(), "unsupported platform \"vsphere\"");
    }
}
