//! Property tests for the input parsers.

use proptest::prelude::*;

use terraform_installer::assets::installconfig::{field_errors, InstallConfigSpec};
use terraform_installer::Config;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary install-config YAML never panics, and
    /// validation of whatever parses never panics either.
    #[test]
    fn property_install_config_parse_never_panics(yaml in "(?s).{0,256}") {
        if let Ok(spec) = serde_yaml_ng::from_str::<InstallConfigSpec>(&yaml) {
            let _ = field_errors(&spec);
        }
    }

    /// PROPERTY: Any cluster name made of lowercase letters and digits
    /// produces no metadata.name error.
    #[test]
    fn property_simple_cluster_names_are_valid(name in "c[a-z0-9]{0,20}") {
        let yaml = format!(
            "apiVersion: v1\nmetadata:\n  name: {}\nbaseDomain: example.com\npullSecret: '{{\"auths\":{{}}}}'\nplatform:\n  aws:\n    region: us-east-1\n",
            name
        );
        let spec: InstallConfigSpec = serde_yaml_ng::from_str(&yaml).unwrap();
        let errors = field_errors(&spec);
        prop_assert!(
            errors.iter().all(|e| e.path != "metadata.name"),
            "unexpected errors: {:?}",
            errors
        );
    }

    /// PROPERTY: Loading arbitrary install-inputs.toml never panics.
    #[test]
    fn property_inputs_toml_never_panics(content in "(?s).{0,256}") {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("install-inputs.toml");
        std::fs::write(&path, &content).unwrap();
        let _ = Config::load_with_warnings(&path);
    }
}
