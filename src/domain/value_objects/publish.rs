//! Publish Strategy Value Object
//!
//! Controls how the cluster's endpoints are exposed.

use serde::{Deserialize, Serialize};

/// How the cluster's API and ingress endpoints are published
///
/// - `External`: reachable from the internet (default)
/// - `Internal`: private network only; requires a platform with private
///   hosted zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PublishStrategy {
    #[default]
    External,
    Internal,
}

impl PublishStrategy {
    /// Parse a strategy name (case-insensitive)
    pub fn from_name(name: &str) -> Option<PublishStrategy> {
        match name.trim().to_lowercase().as_str() {
            "external" => Some(PublishStrategy::External),
            "internal" => Some(PublishStrategy::Internal),
            _ => None,
        }
    }
}

impl std::fmt::Display for PublishStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishStrategy::External => write!(f, "External"),
            PublishStrategy::Internal => write!(f, "Internal"),
        }
    }
}
