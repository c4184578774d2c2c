//! Create Use Case
//!
//! 1. Fetch every asset of the target through the store (so assets shared by
//!    several targets are resolved once).
//! 2. Persist each fetched asset into the install directory.
//! 3. Purge the on-disk inputs the target consumed.
//!
//! Nothing is written until every asset has been fetched, and nothing is
//! purged until every asset has been written.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use tracing::{debug, info};

use super::CreateResult;
use crate::assets::{Answers, Target};
use crate::domain::asset::{Asset, Store, StoreError};
use crate::domain::ports::FileWriter;
use crate::infrastructure::fs::{AssetFileWriter, InstallDir};

/// Runs `create` targets against one install directory
pub struct CreateUseCase {
    store: Store,
    dir: PathBuf,
}

impl CreateUseCase {
    /// Use case over `dir`, with `answers` seeded into a fresh store
    pub fn new(dir: impl Into<PathBuf>, answers: Answers) -> Self {
        let dir = dir.into();
        let mut store = Store::new(InstallDir::new(&dir));
        store.insert(answers);
        Self { store, dir }
    }

    /// Use case over an existing store
    pub fn with_store(store: Store, dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Fetch and persist every asset of `target`
    pub fn execute(&mut self, target: Target) -> anyhow::Result<CreateResult> {
        let keys = target.assets();
        debug!(target = %target, assets = keys.len(), "Creating target");

        let mut fetched: Vec<Rc<dyn Asset>> = Vec::with_capacity(keys.len());
        for key in &keys {
            let asset = self.store.fetch(*key).with_context(|| {
                format!("failed to fetch {}", key.instantiate().name())
            })?;
            fetched.push(asset);
        }

        let mut result = CreateResult::new(target);
        for asset in &fetched {
            let name = asset.name().to_string();
            let writable = asset
                .as_writable()
                .ok_or_else(|| StoreError::NotWritable { name: name.clone() })?;
            let written = AssetFileWriter::new(writable)
                .persist_to_file(&self.dir)
                .with_context(|| format!("failed to write asset ({}) to disk", name))?;
            for path in &written {
                info!(asset = %name, "Created {}", display_relative(&self.dir, path));
            }
            result.written.extend(written);
            result.assets.push(name);
        }

        self.store
            .purge(&keys)
            .context("failed to purge consumed assets")?;
        Ok(result)
    }
}

fn display_relative(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir).unwrap_or(path).display().to_string()
}
