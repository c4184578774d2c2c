//! install-config validation
//!
//! Every check appends a [`FieldError`]; [`validate_install_config`] reports
//! all of them at once.

use std::fmt;
use std::net::IpAddr;

use crate::domain::value_objects::{Platform, PublishStrategy};
use crate::error::InstallerError;

use super::platform::is_known_aws_region;
use super::types::{InstallConfigSpec, INSTALL_CONFIG_VERSION};

const SSH_KEY_TYPES: &[&str] = &[
    "ssh-rsa",
    "ssh-ed25519",
    "ssh-dss",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521",
    "sk-ssh-ed25519@openssh.com",
    "sk-ecdsa-sha2-nistp256@openssh.com",
];

/// One failed check, addressed by its YAML path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate a whole install config
pub fn validate_install_config(config: &InstallConfigSpec) -> Result<(), InstallerError> {
    let errors = field_errors(config);
    if errors.is_empty() {
        return Ok(());
    }
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(InstallerError::InvalidInstallConfig(joined))
}

/// Every failed check, in document order
pub fn field_errors(config: &InstallConfigSpec) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if config.api_version != INSTALL_CONFIG_VERSION {
        errors.push(FieldError::new(
            "apiVersion",
            format!(
                "install-config version {:?} is not supported, expected {:?}",
                config.api_version, INSTALL_CONFIG_VERSION
            ),
        ));
    }

    if let Err(message) = validate_cluster_name(&config.metadata.name) {
        errors.push(FieldError::new("metadata.name", message));
    }

    match validate_domain_name(&config.base_domain) {
        Err(message) => errors.push(FieldError::new("baseDomain", message)),
        Ok(()) => {
            if let Err(message) = validate_domain_name(&config.cluster_domain()) {
                errors.push(FieldError::new(
                    "baseDomain",
                    format!("cluster domain {:?}: {}", config.cluster_domain(), message),
                ));
            }
        }
    }

    if !config.ssh_key.is_empty() {
        if let Err(message) = validate_ssh_key(&config.ssh_key) {
            errors.push(FieldError::new("sshKey", message));
        }
    }

    if let Err(message) = validate_pull_secret(&config.pull_secret) {
        errors.push(FieldError::new("pullSecret", message));
    }

    for (i, entry) in config.networking.machine_network.iter().enumerate() {
        if let Err(message) = validate_cidr(&entry.cidr) {
            errors.push(FieldError::new(
                format!("networking.machineNetwork[{}].cidr", i),
                message,
            ));
        }
    }

    errors.extend(platform_errors(config));
    errors
}

fn platform_errors(config: &InstallConfigSpec) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let configured = config.platform.configured();
    let platform = match configured.as_slice() {
        [] => {
            errors.push(FieldError::new(
                "platform",
                "must specify one of the platforms (aws, azure, azurestack)",
            ));
            return errors;
        }
        [only] => *only,
        _ => {
            let names: Vec<&str> = configured.iter().map(Platform::id).collect();
            errors.push(FieldError::new(
                "platform",
                format!("must only specify a single type of platform; cannot use both {}", names.join(" and ")),
            ));
            return errors;
        }
    };

    if config.publish == PublishStrategy::Internal && platform != Platform::Aws {
        errors.push(FieldError::new(
            "publish",
            format!("Internal publish strategy is not supported on {}", platform.display_name()),
        ));
    }

    match platform {
        Platform::Aws => {
            if let Some(aws) = &config.platform.aws {
                if !is_known_aws_region(&aws.region) {
                    errors.push(FieldError::new(
                        "platform.aws.region",
                        format!("unknown region {:?}", aws.region),
                    ));
                }
            }
        }
        Platform::Azure | Platform::AzureStack => {
            let (path, azure) = if platform == Platform::Azure {
                ("platform.azure", config.platform.azure.as_ref())
            } else {
                ("platform.azurestack", config.platform.azurestack.as_ref())
            };
            if let Some(azure) = azure {
                if azure.region.trim().is_empty() {
                    errors.push(FieldError::new(format!("{}.region", path), "region is required"));
                }
                if azure.base_domain_resource_group_name.trim().is_empty() {
                    errors.push(FieldError::new(
                        format!("{}.baseDomainResourceGroupName", path),
                        "resource group is required",
                    ));
                }
            }
        }
    }
    errors
}

/// DNS-1123 label: at most 63 lowercase alphanumerics or '-', alphanumeric at both ends
pub fn validate_cluster_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("cluster name is required".to_string());
    }
    if name.len() > 63 {
        return Err(format!("must be no more than 63 characters (got {})", name.len()));
    }
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars || name.starts_with('-') || name.ends_with('-') {
        return Err(
            "a DNS-1123 label must consist of lower case alphanumeric characters or '-', \
             and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    Ok(())
}

/// Dot separated labels of alphanumerics and '-'; one trailing dot is accepted
pub fn validate_domain_name(domain: &str) -> Result<(), String> {
    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    if trimmed.is_empty() {
        return Err("domain name is required".to_string());
    }
    if trimmed.len() > 253 {
        return Err("must be no more than 253 characters".to_string());
    }
    for label in trimmed.split('.') {
        if label.is_empty() || label.len() > 63 {
            return Err(format!("label {:?} must be 1 to 63 characters", label));
        }
        let valid_chars = label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid_chars || label.starts_with('-') || label.ends_with('-') {
            return Err(format!(
                "label {:?} must consist of alphanumeric characters or '-', and start and end with an alphanumeric character",
                label
            ));
        }
    }
    Ok(())
}

/// `<type> <base64 body> [comment]` with a known key type
pub fn validate_ssh_key(key: &str) -> Result<(), String> {
    let mut parts = key.split_whitespace();
    let key_type = parts.next().unwrap_or_default();
    if !SSH_KEY_TYPES.contains(&key_type) {
        return Err(format!("unsupported key type {:?}", key_type));
    }
    let body = parts.next().unwrap_or_default();
    let is_base64 = !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='));
    if !is_base64 {
        return Err("key body is not valid base64".to_string());
    }
    Ok(())
}

/// A JSON object with an `auths` object
pub fn validate_pull_secret(secret: &str) -> Result<(), String> {
    if secret.trim().is_empty() {
        return Err("pull secret is required".to_string());
    }
    let value: serde_json::Value =
        serde_json::from_str(secret).map_err(|e| format!("not valid JSON: {}", e))?;
    match value.get("auths") {
        Some(auths) if auths.is_object() => Ok(()),
        _ => Err("must contain an \"auths\" object".to_string()),
    }
}

/// `<ip>/<prefix>` with a prefix that fits the address family
pub fn validate_cidr(cidr: &str) -> Result<(), String> {
    let (addr, prefix) = cidr
        .split_once('/')
        .ok_or_else(|| format!("invalid CIDR address: {}", cidr))?;
    let addr: IpAddr = addr
        .parse()
        .map_err(|_| format!("invalid CIDR address: {}", cidr))?;
    let prefix: u8 = prefix
        .parse()
        .map_err(|_| format!("invalid CIDR address: {}", cidr))?;
    let max = if addr.is_ipv4() { 32 } else { 128 };
    if prefix > max {
        return Err(format!("invalid CIDR address: {}", cidr));
    }
    Ok(())
}
