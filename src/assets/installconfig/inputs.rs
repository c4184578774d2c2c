//! Input assets read by install-config
//!
//! Each one takes its value from [`Answers`] and prompts only when the answer
//! is missing.

use crate::assets::prompt::{is_interactive, Question};
use crate::assets::Answers;
use crate::domain::asset::{Asset, AssetKey, Parents};

use super::validation::{
    validate_cluster_name, validate_domain_name, validate_pull_secret, validate_ssh_key,
};

/// Machine network used when none is configured
pub const DEFAULT_MACHINE_NETWORK: &str = "10.0.0.0/16";

const SSH_KEY: Question = Question::new("SSH public key", "ssh_key", "SSH Public Key (empty for none)");
const BASE_DOMAIN: Question = Question::new("base domain", "base_domain", "Base Domain");
const CLUSTER_NAME: Question = Question::new("cluster name", "cluster_name", "Cluster Name");
const PULL_SECRET: Question = Question::new("pull secret", "pull_secret", "Pull Secret");

#[derive(Debug, Clone, Default)]
pub struct SshPublicKey {
    /// Empty when the cluster gets no SSH access
    pub key: String,
}

impl Asset for SshPublicKey {
    fn name(&self) -> &str {
        "SSH Key"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![AssetKey::of::<Answers>()]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let answers = parents.get::<Answers>()?.values();
        self.key = match &answers.ssh_key {
            Some(key) => key.trim().to_string(),
            None if is_interactive() => SSH_KEY.optional_text(validate_ssh_key)?,
            None => String::new(),
        };
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BaseDomain {
    pub base_domain: String,
}

impl Asset for BaseDomain {
    fn name(&self) -> &str {
        "Base Domain"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![AssetKey::of::<Answers>()]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let answers = parents.get::<Answers>()?.values();
        self.base_domain = match &answers.base_domain {
            Some(domain) => domain.trim().to_string(),
            None => BASE_DOMAIN.text(None, validate_domain_name)?,
        };
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClusterName {
    pub cluster_name: String,
}

impl Asset for ClusterName {
    fn name(&self) -> &str {
        "Cluster Name"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![AssetKey::of::<Answers>(), AssetKey::of::<BaseDomain>()]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let answers = parents.get::<Answers>()?.values();
        let base_domain = parents.get::<BaseDomain>()?.base_domain.as_str();
        self.cluster_name = match &answers.cluster_name {
            Some(name) => name.trim().to_string(),
            None => CLUSTER_NAME.text(None, |name| {
                validate_cluster_name(name)?;
                validate_domain_name(&format!("{}.{}", name, base_domain))
            })?,
        };
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Networking {
    pub machine_network: Vec<String>,
}

impl Asset for Networking {
    fn name(&self) -> &str {
        "Networking"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![AssetKey::of::<Answers>()]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let answers = parents.get::<Answers>()?.values();
        let configured = answers
            .machine_network
            .as_deref()
            .unwrap_or(DEFAULT_MACHINE_NETWORK);
        self.machine_network = configured
            .split(',')
            .map(str::trim)
            .filter(|cidr| !cidr.is_empty())
            .map(str::to_string)
            .collect();
        if self.machine_network.is_empty() {
            self.machine_network.push(DEFAULT_MACHINE_NETWORK.to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PullSecret {
    pub pull_secret: String,
}

impl Asset for PullSecret {
    fn name(&self) -> &str {
        "Pull Secret"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        vec![AssetKey::of::<Answers>()]
    }

    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()> {
        let answers = parents.get::<Answers>()?.values();
        self.pull_secret = match &answers.pull_secret {
            Some(secret) => secret.trim().to_string(),
            None => PULL_SECRET.secret(validate_pull_secret)?,
        };
        Ok(())
    }
}
