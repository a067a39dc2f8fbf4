use super::{descriptor::Builder, Nested, TypeDescriptor};
use crate::{Record, Result};

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

type Cache = RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>;

/// Process-wide descriptor cache. Reads are concurrent; first-use population
/// takes the write lock only to insert.
fn cache() -> &'static Cache {
    static CACHE: OnceLock<Cache> = OnceLock::new();
    CACHE.get_or_init(Default::default)
}

/// Returns the descriptor for `T`, building and caching it on first use.
pub fn describe<T: Record>() -> Result<Arc<TypeDescriptor>> {
    describe_nested(Nested::of::<T>())
}

/// Returns the descriptor for a type referenced through [`Nested`].
pub fn describe_nested(nested: Nested) -> Result<Arc<TypeDescriptor>> {
    if let Some(descriptor) = get(nested.type_id) {
        return Ok(descriptor);
    }

    Builder::default().build(nested)
}

/// Drops every cached descriptor. Descriptors already handed out stay valid.
pub fn clear_cache() {
    cache()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

pub(super) fn get(type_id: TypeId) -> Option<Arc<TypeDescriptor>> {
    cache()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .cloned()
}

/// Inserts a freshly built descriptor. If another caller won the race, its
/// descriptor is kept and returned so every caller shares one instance.
pub(super) fn insert(descriptor: TypeDescriptor) -> Arc<TypeDescriptor> {
    cache()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(descriptor.type_id)
        .or_insert_with(|| Arc::new(descriptor))
        .clone()
}
