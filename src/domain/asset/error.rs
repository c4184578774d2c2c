//! Errors raised while resolving the asset graph

/// Failure of a store operation.
///
/// Every variant names the asset it concerns; the store never swallows an
/// asset's own error, it is kept as the source.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// `generate` failed
    #[error("failed to generate asset \"{name}\"")]
    Generate {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// `load` found persisted state it could not use
    #[error("failed to load asset \"{name}\"")]
    Load {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The declared dependency graph contains a cycle
    #[error("dependency cycle detected: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    /// `generate` asked `Parents` for a variant it did not declare
    #[error("asset \"{asset}\" read undeclared dependency \"{requested}\"")]
    UndeclaredDependency { asset: String, requested: String },

    /// Removing consumed on-disk artifacts failed
    #[error("failed to purge asset \"{name}\"")]
    Purge {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A target was expected to be writable but is not
    #[error("asset \"{name}\" has no on-disk form")]
    NotWritable { name: String },
}

impl StoreError {
    /// Name of the asset the error concerns, when there is a single one
    pub fn asset_name(&self) -> Option<&str> {
        match self {
            StoreError::Generate { name, .. }
            | StoreError::Load { name, .. }
            | StoreError::Purge { name, .. }
            | StoreError::NotWritable { name } => Some(name),
            StoreError::UndeclaredDependency { asset, .. } => Some(asset),
            StoreError::Cycle { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_error_lists_chain() {
        let err = StoreError::Cycle {
            chain: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        };
        assert_eq!(err.to_string(), "dependency cycle detected: A -> B -> A");
        assert!(err.asset_name().is_none());
    }

    #[test]
    fn generate_error_keeps_source() {
        let err = StoreError::Generate {
            name: "Base".to_string(),
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(err.to_string(), "failed to generate asset \"Base\"");
        assert_eq!(
            std::error::Error::source(&err).unwrap().to_string(),
            "boom"
        );
        assert_eq!(err.asset_name(), Some("Base"));
    }
}
