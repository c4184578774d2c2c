//! Asset graph
//!
//! An asset is a typed unit of derived configuration with statically declared
//! dependencies and a generation procedure. Writable assets additionally have
//! an on-disk form (one or more [`File`]s) and can be rehydrated from it.
//!
//! Identity is the concrete Rust type: [`AssetKey::of`] registers a variant
//! and knows how to create an empty instance of it, so dependencies are
//! declared by type rather than by value.

mod error;
mod key;
mod parents;
mod store;

pub use error::StoreError;
pub use key::AssetKey;
pub use parents::Parents;
pub use store::{AssetSource, Store};

use std::any::Any;
use std::rc::Rc;

use crate::domain::entities::File;
use crate::domain::ports::FileFetcher;

/// Upcasting helpers used to recover the concrete type behind `dyn Asset`.
///
/// Call these on `&dyn Asset` (or `Rc<dyn Asset>` for `into_any_rc`), never on
/// a smart pointer by reference, or the pointer itself is what gets upcast.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}

/// A unit of configuration or state produced from its dependencies.
pub trait Asset: AsAny {
    /// Human-friendly name used in logs and error messages
    fn name(&self) -> &str;

    /// Variants whose resolved values `generate` reads.
    ///
    /// Must be deterministic and independent of the asset's state.
    fn dependencies(&self) -> Vec<AssetKey>;

    /// Compute this asset's state from its resolved dependencies
    fn generate(&mut self, parents: &Parents) -> anyhow::Result<()>;

    /// Writable view of this asset, if it has an on-disk form
    fn as_writable(&self) -> Option<&dyn WritableAsset> {
        None
    }

    /// Mutable writable view, used by the store to attempt `load`
    fn as_writable_mut(&mut self) -> Option<&mut dyn WritableAsset> {
        None
    }
}

/// An asset that can be persisted to, and rehydrated from, an install directory.
pub trait WritableAsset: Asset {
    /// Artifacts representing this asset on disk. Stable once populated.
    fn files(&self) -> Vec<&File>;

    /// Rehydrate from persisted artifacts without consulting dependencies.
    ///
    /// `Ok(false)`: nothing persisted, generate normally.
    /// `Ok(true)`: fully populated, generation is skipped.
    /// `Err(_)`: persisted state exists but is unusable; never treated as not found.
    fn load(&mut self, fetcher: &dyn FileFetcher) -> anyhow::Result<bool>;
}
