//! Tests for the create use case

use std::fs;

use tempfile::tempdir;

use super::CreateUseCase;
use crate::assets::installconfig::INSTALL_CONFIG_FILENAME;
use crate::assets::password::TFE_PASSWORD_PATH;
use crate::assets::tfvars::{PLATFORM_TFVARS_FILENAME, TFVARS_FILENAME};
use crate::assets::cluster::{METADATA_FILENAME, STATE_FILENAME};
use crate::assets::{Answers, Target};
use crate::config::AnswersConfig;
use crate::domain::value_objects::Platform;
use crate::error::{exit_code_for, EXIT_INFRASTRUCTURE, EXIT_INSTALL_CONFIG};

fn answers() -> Answers {
    Answers::new(AnswersConfig {
        platform: Some(Platform::Aws),
        region: Some("us-east-1".to_string()),
        cluster_name: Some("prod".to_string()),
        base_domain: Some("example.com".to_string()),
        pull_secret: Some(r#"{"auths":{}}"#.to_string()),
        ssh_key: Some(String::new()),
        ..Default::default()
    })
}

#[test]
fn install_config_target_writes_install_config() {
    let dir = tempdir().unwrap();
    let mut create = CreateUseCase::new(dir.path(), answers());

    let result = create.execute(Target::InstallConfig).unwrap();

    assert_eq!(result.assets, vec!["Install Config"]);
    assert_eq!(result.written, vec![dir.path().join(INSTALL_CONFIG_FILENAME)]);
    let yaml = fs::read_to_string(dir.path().join(INSTALL_CONFIG_FILENAME)).unwrap();
    assert!(yaml.contains("name: prod"));
}

#[test]
fn second_run_loads_instead_of_regenerating() {
    let dir = tempdir().unwrap();
    CreateUseCase::new(dir.path(), answers())
        .execute(Target::InstallConfig)
        .unwrap();
    let path = dir.path().join(INSTALL_CONFIG_FILENAME);
    let edited = fs::read_to_string(&path)
        .unwrap()
        .replace("name: prod", "name: edited");
    fs::write(&path, &edited).unwrap();

    CreateUseCase::new(dir.path(), answers())
        .execute(Target::InstallConfig)
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), edited);
}

#[test]
fn cluster_target_consumes_install_config() {
    let dir = tempdir().unwrap();
    CreateUseCase::new(dir.path(), answers())
        .execute(Target::InstallConfig)
        .unwrap();

    let result = CreateUseCase::new(dir.path(), answers())
        .execute(Target::Cluster)
        .unwrap();

    assert_eq!(
        result.assets,
        vec!["Terraform Variables", "TFE Password", "Cluster"]
    );
    for name in [
        TFVARS_FILENAME,
        PLATFORM_TFVARS_FILENAME,
        TFE_PASSWORD_PATH,
        METADATA_FILENAME,
    ] {
        assert!(dir.path().join(name).is_file(), "{} missing", name);
    }
    assert!(!dir.path().join(INSTALL_CONFIG_FILENAME).exists());
}

#[test]
fn failed_cluster_keeps_install_config_on_disk() {
    let dir = tempdir().unwrap();
    CreateUseCase::new(dir.path(), answers())
        .execute(Target::InstallConfig)
        .unwrap();
    let install_config = dir.path().join(INSTALL_CONFIG_FILENAME);
    let before = fs::read_to_string(&install_config).unwrap();
    fs::write(dir.path().join(STATE_FILENAME), "{}").unwrap();

    let err = CreateUseCase::new(dir.path(), answers())
        .execute(Target::Cluster)
        .unwrap_err();

    assert_eq!(exit_code_for(&err), EXIT_INFRASTRUCTURE);
    assert_eq!(fs::read_to_string(&install_config).unwrap(), before);
    for name in [TFVARS_FILENAME, PLATFORM_TFVARS_FILENAME, METADATA_FILENAME] {
        assert!(!dir.path().join(name).exists(), "{} written", name);
    }
}

#[test]
fn placeholder_targets_create_nothing() {
    let dir = tempdir().unwrap();
    let mut create = CreateUseCase::new(dir.path(), answers());

    for target in [
        Target::Manifests,
        Target::IgnitionConfigs,
        Target::SingleNodeIgnitionConfig,
    ] {
        let result = create.execute(target).unwrap();
        assert!(result.is_empty());
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn failure_names_asset_and_persists_nothing() {
    let dir = tempdir().unwrap();
    let mut bad = answers().values().clone();
    bad.base_domain = Some("bad_domain".to_string());

    let err = CreateUseCase::new(dir.path(), Answers::new(bad))
        .execute(Target::Cluster)
        .unwrap_err();

    assert!(err.to_string().contains("failed to fetch Terraform Variables"));
    assert!(format!("{:#}", err).contains("Install Config"));
    assert_eq!(exit_code_for(&err), EXIT_INSTALL_CONFIG);
    assert!(!dir.path().join(TFVARS_FILENAME).exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
