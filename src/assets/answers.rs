//! Pre-filled answers for the input assets

use crate::config::{AnswersConfig, Config};
use crate::domain::asset::{Asset, AssetKey, Parents};

/// Answers gathered outside the graph (install-inputs.toml and environment).
///
/// The CLI seeds the store with the merged configuration. When nothing was
/// seeded, `generate` falls back to the environment alone.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    values: AnswersConfig,
}

impl Answers {
    pub fn new(values: AnswersConfig) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &AnswersConfig {
        &self.values
    }
}

impl Asset for Answers {
    fn name(&self) -> &str {
        "Answers"
    }

    fn dependencies(&self) -> Vec<AssetKey> {
        Vec::new()
    }

    fn generate(&mut self, _parents: &Parents) -> anyhow::Result<()> {
        self.values = Config::default().with_env_overrides().answers;
        Ok(())
    }
}
