//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Platform, PublishStrategy};
use crate::error::InstallerResult;

use super::loader::{self, ConfigWarning};

/// Console verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name (case-insensitive)
    pub fn parse(name: &str) -> Option<LogLevel> {
        match name.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// `[log]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// `[answers]` section: pre-filled values for the input assets
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnswersConfig {
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub base_domain_resource_group: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub base_domain: Option<String>,
    #[serde(default)]
    pub ssh_key: Option<String>,
    #[serde(default)]
    pub pull_secret: Option<String>,
    #[serde(default)]
    pub machine_network: Option<String>,
    #[serde(default)]
    pub publish: Option<PublishStrategy>,
}

/// Contents of install-inputs.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub answers: AnswersConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> InstallerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> InstallerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `<dir>/install-inputs.toml` if present, then apply env overrides
    pub fn load_for_dir(dir: &Path) -> InstallerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_dir(dir)
    }

    /// Apply environment variable overrides (TERRAFORM_INSTALL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
