//! Slice registry for content features.
//! A minimal type-erased container for the pre-initialized state of each slice
//! (catalog, localization), looked up by type from request handlers.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for slice state that can be shared across request workers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Short name used in startup diagnostics.
    fn name(&self) -> &'static str;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized slice.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Wraps a concrete slice state for registration.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: state.name(), state: Box::new(state) }
    }
}
