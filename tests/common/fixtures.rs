//! Reusable answers and install configs.

/// Complete answers for an AWS cluster
pub const AWS_ANSWERS: &[(&str, &str)] = &[
    ("platform", "aws"),
    ("region", "us-east-2"),
    ("cluster_name", "prod"),
    ("base_domain", "example.com"),
    ("pull_secret", r#"{"auths":{"registry.example.com":{"auth":"dXNlcjpwYXNz"}}}"#),
];

/// Complete answers for an Azure cluster
pub const AZURE_ANSWERS: &[(&str, &str)] = &[
    ("platform", "azure"),
    ("region", "eastus"),
    ("base_domain_resource_group", "dns-rg"),
    ("cluster_name", "dev"),
    ("base_domain", "example.org"),
    ("pull_secret", r#"{"auths":{}}"#),
];

/// Hand-edited install-config.yaml for an AWS cluster named "edited"
pub const EDITED_INSTALL_CONFIG: &str = r#"apiVersion: v1
metadata:
  name: edited
baseDomain: example.net
pullSecret: '{"auths":{}}'
networking:
  machineNetwork:
  - cidr: 192.168.0.0/16
platform:
  aws:
    region: eu-west-1
publish: Internal
"#;
