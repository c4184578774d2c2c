//! Asset variant identity

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Asset;

/// Identity of an asset variant plus a constructor for an empty instance.
///
/// Equality and hashing use the `TypeId` only.
#[derive(Clone, Copy)]
pub struct AssetKey {
    type_id: TypeId,
    type_name: &'static str,
    create: fn() -> Box<dyn Asset>,
}

fn create_default<T: Asset + Default>() -> Box<dyn Asset> {
    Box::new(T::default())
}

impl AssetKey {
    /// Key for variant `T`
    pub fn of<T: Asset + Default>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            create: create_default::<T>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Unqualified type name, e.g. `InstallConfig`
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.type_name)
    }

    /// Create an empty, unresolved instance of this variant
    pub fn instantiate(&self) -> Box<dyn Asset> {
        (self.create)()
    }
}

pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl PartialEq for AssetKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for AssetKey {}

impl Hash for AssetKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetKey({})", self.short_name())
    }
}
