//! Resolved dependencies handed to `Asset::generate`

use std::any::TypeId;
use std::collections::HashMap;
use std::rc::Rc;

use super::key::short_type_name;
use super::{Asset, AssetKey, StoreError};

/// The resolved instances of one asset's declared dependencies.
///
/// Valid for a single `generate` call. Lookups are by variant; asking for a
/// variant the asset did not declare is an error rather than an empty value.
pub struct Parents {
    dependent: String,
    resolved: HashMap<TypeId, Rc<dyn Asset>>,
}

impl Parents {
    pub(crate) fn new(dependent: impl Into<String>) -> Self {
        Self {
            dependent: dependent.into(),
            resolved: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: AssetKey, asset: Rc<dyn Asset>) {
        self.resolved.insert(key.type_id(), asset);
    }

    /// Resolved instance of dependency `T`
    pub fn get<T: Asset>(&self) -> Result<&T, StoreError> {
        self.resolved
            .get(&TypeId::of::<T>())
            .and_then(|asset| (**asset).as_any().downcast_ref::<T>())
            .ok_or_else(|| StoreError::UndeclaredDependency {
                asset: self.dependent.clone(),
                requested: short_type_name(std::any::type_name::<T>()).to_string(),
            })
    }

    /// Number of resolved dependencies
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}
