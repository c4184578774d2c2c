//! Configuration loading

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::domain::value_objects::{Platform, PublishStrategy};
use crate::error::{InstallerError, InstallerResult};

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// File looked up in the install directory
pub const CONFIG_FILE_NAME: &str = "install-inputs.toml";

/// Prefix of every environment override
pub const ENV_PREFIX: &str = "TERRAFORM_INSTALL_";

/// Environment variable overriding `answers.<key>`
pub fn env_key(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.to_uppercase())
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> InstallerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InstallerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `<dir>/install-inputs.toml` (defaults when absent) with env overrides
pub fn load_for_dir(dir: &Path) -> InstallerResult<(Config, Vec<ConfigWarning>)> {
    let path = dir.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (TERRAFORM_INSTALL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup; empty values are ignored
pub(super) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    let get = |key: &str| lookup(&env_key(key)).filter(|v| !v.trim().is_empty());
    let answers = &mut config.answers;

    if let Some(value) = get("platform") {
        match Platform::from_id(&value) {
            Some(platform) => answers.platform = Some(platform),
            None => warn!(value = %value, "Ignoring unknown platform in {}", env_key("platform")),
        }
    }
    if let Some(value) = get("publish") {
        match PublishStrategy::from_name(&value) {
            Some(publish) => answers.publish = Some(publish),
            None => warn!(value = %value, "Ignoring unknown publish strategy in {}", env_key("publish")),
        }
    }

    let strings = [
        ("region", &mut answers.region),
        (
            "base_domain_resource_group",
            &mut answers.base_domain_resource_group,
        ),
        ("cluster_name", &mut answers.cluster_name),
        ("base_domain", &mut answers.base_domain),
        ("ssh_key", &mut answers.ssh_key),
        ("pull_secret", &mut answers.pull_secret),
        ("machine_network", &mut answers.machine_network),
    ];
    for (key, slot) in strings {
        if let Some(value) = get(key) {
            *slot = Some(value);
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "log",
        "level",
        "answers",
        "platform",
        "region",
        "base_domain_resource_group",
        "cluster_name",
        "base_domain",
        "ssh_key",
        "pull_secret",
        "machine_network",
        "publish",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
