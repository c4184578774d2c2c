//! Create Result

use std::path::PathBuf;

use crate::assets::Target;

/// Outcome of one `create` run
#[derive(Debug, Clone)]
pub struct CreateResult {
    pub target: Target,
    /// Names of the persisted assets, in target order
    pub assets: Vec<String>,
    /// Every artifact path written (or already up to date)
    pub written: Vec<PathBuf>,
}

impl CreateResult {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            assets: Vec::new(),
            written: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
