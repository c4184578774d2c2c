//! Asset store
//!
//! Resolves requested assets and their dependency closure depth-first,
//! memoized by variant. For every variant not yet in the store:
//!
//! 1. its declared dependencies are resolved first (even when the asset will
//!    end up loaded from disk, so later dependents can share them);
//! 2. writable assets attempt `load` from the install directory;
//! 3. otherwise `generate` runs with the resolved [`Parents`].
//!
//! A variant met again while it is still on the active resolution path is a
//! dependency cycle and fails immediately.

use std::any::TypeId;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use super::{Asset, AssetKey, Parents, StoreError};
use crate::domain::ports::AssetDirectory;

/// Where a resolved asset came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    /// Rehydrated from the install directory
    OnDisk,
    /// Computed by `generate`
    Generated,
    /// Supplied by the caller through [`Store::insert`]
    Seeded,
}

struct StoredAsset {
    key: AssetKey,
    asset: Rc<dyn Asset>,
    source: AssetSource,
    purged: bool,
}

/// Memoizing resolver for one install directory.
///
/// Holds at most one instance per asset variant for its whole lifetime; every
/// dependent that declares a variant observes the same instance. Not shareable
/// across threads.
pub struct Store {
    directory: Box<dyn AssetDirectory>,
    assets: HashMap<TypeId, StoredAsset>,
}

impl Store {
    /// Create a store backed by an install directory
    pub fn new(directory: impl AssetDirectory + 'static) -> Self {
        Self {
            directory: Box::new(directory),
            assets: HashMap::new(),
        }
    }

    /// Seed an already-built instance; it is never loaded, generated or purged.
    ///
    /// Replaces any instance of the same variant resolved earlier.
    pub fn insert<T: Asset + Default>(&mut self, asset: T) {
        debug!(asset = asset.name(), "Seeding asset");
        let key = AssetKey::of::<T>();
        self.assets.insert(
            key.type_id(),
            StoredAsset {
                key,
                asset: Rc::new(asset),
                source: AssetSource::Seeded,
                purged: false,
            },
        );
    }

    /// Resolve `target` and its dependency closure.
    ///
    /// Nothing is removed from the install directory; a failed fetch leaves
    /// every persisted file where a later run can load it.
    pub fn fetch(&mut self, target: AssetKey) -> Result<Rc<dyn Asset>, StoreError> {
        let mut path = Vec::new();
        self.resolve(target, &mut path)
    }

    /// Resolve variant `T` and return it with its concrete type
    pub fn fetch_as<T: Asset + Default>(&mut self) -> Result<Rc<T>, StoreError> {
        let asset = self.fetch(AssetKey::of::<T>())?;
        Ok(downcast_rc(asset))
    }

    /// Already-resolved instance of `T`, if any
    pub fn get<T: Asset>(&self) -> Option<Rc<T>> {
        self.assets
            .get(&TypeId::of::<T>())
            .map(|stored| downcast_rc(Rc::clone(&stored.asset)))
    }

    /// How a resolved variant was obtained
    pub fn source_of(&self, key: AssetKey) -> Option<AssetSource> {
        self.assets.get(&key.type_id()).map(|stored| stored.source)
    }

    /// Number of resolved variants
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Delete the on-disk artifacts of every asset that was loaded from disk
    /// and is not in `preserved`.
    ///
    /// Callers run this once all requested targets are fetched and persisted:
    /// those files were consumed as inputs and would otherwise go stale.
    /// Seeded and generated assets are never touched.
    pub fn purge(&mut self, preserved: &[AssetKey]) -> Result<(), StoreError> {
        for stored in self.assets.values_mut() {
            if stored.source != AssetSource::OnDisk
                || stored.purged
                || preserved.contains(&stored.key)
            {
                continue;
            }
            let Some(writable) = stored.asset.as_writable() else {
                continue;
            };
            for file in writable.files() {
                debug!(
                    asset = stored.asset.name(),
                    file = %file.filename().display(),
                    "Purging consumed file"
                );
                self.directory
                    .remove_by_name(file.filename())
                    .map_err(|source| StoreError::Purge {
                        name: stored.asset.name().to_string(),
                        source,
                    })?;
            }
            stored.purged = true;
        }
        Ok(())
    }

    fn resolve(
        &mut self,
        key: AssetKey,
        path: &mut Vec<AssetKey>,
    ) -> Result<Rc<dyn Asset>, StoreError> {
        if let Some(stored) = self.assets.get(&key.type_id()) {
            debug!(asset = stored.asset.name(), "Reusing previously-fetched asset");
            return Ok(Rc::clone(&stored.asset));
        }

        if let Some(start) = path.iter().position(|k| *k == key) {
            let chain = path[start..]
                .iter()
                .chain(std::iter::once(&key))
                .map(|k| k.instantiate().name().to_string())
                .collect();
            return Err(StoreError::Cycle { chain });
        }

        let mut asset = key.instantiate();
        debug!(asset = asset.name(), "Fetching");

        path.push(key);
        let mut parents = Parents::new(asset.name());
        for dependency in asset.dependencies() {
            let resolved = self.resolve(dependency, path)?;
            parents.insert(dependency, resolved);
        }
        path.pop();

        let source = if self.load(asset.as_mut())? {
            debug!(asset = asset.name(), "Loaded from disk");
            AssetSource::OnDisk
        } else {
            debug!(asset = asset.name(), "Generating");
            if let Err(source) = asset.generate(&parents) {
                return Err(StoreError::Generate {
                    name: asset.name().to_string(),
                    source,
                });
            }
            AssetSource::Generated
        };
        drop(parents);

        let asset: Rc<dyn Asset> = Rc::from(asset);
        self.assets.insert(
            key.type_id(),
            StoredAsset {
                key,
                asset: Rc::clone(&asset),
                source,
                purged: false,
            },
        );
        Ok(asset)
    }

    fn load(&self, asset: &mut dyn Asset) -> Result<bool, StoreError> {
        let Some(writable) = asset.as_writable_mut() else {
            return Ok(false);
        };
        debug!(asset = writable.name(), "Looking for asset on disk");
        writable
            .load(self.directory.as_fetcher())
            .map_err(|source| StoreError::Load {
                name: writable.name().to_string(),
                source,
            })
    }
}

fn downcast_rc<T: Asset>(asset: Rc<dyn Asset>) -> Rc<T> {
    match asset.into_any_rc().downcast::<T>() {
        Ok(concrete) => concrete,
        Err(_) => unreachable!("store entries are keyed by their concrete type"),
    }
}
