//! Central registry of type descriptors.
//!
//! The registry is the lookup hub the estimators resolve declared type names
//! through. It is safe for concurrent read access: registrations use a
//! lock-free concurrent map, and estimation never mutates the registry, so
//! parallel estimations on disjoint inputs never interact.

use std::sync::Arc;

use dashmap::DashMap;

use crate::{model::TypeDescriptor, Error::UnresolvedType, Result};

/// Thread-safe map from type name to its registered field table.
#[derive(Default)]
pub struct TypeRegistry {
    types: DashMap<String, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry {
            types: DashMap::new(),
        }
    }

    /// Register a descriptor under its type name, replacing any previous
    /// registration of the same name. Returns the shared handle.
    pub fn register(&self, descriptor: TypeDescriptor) -> Arc<TypeDescriptor> {
        let descriptor = Arc::new(descriptor);
        self.types
            .insert(descriptor.name().to_string(), descriptor.clone());
        descriptor
    }

    /// Look up a registered type by name.
    ///
    /// # Errors
    /// Returns [`UnresolvedType`] if no descriptor is registered under the
    /// name.
    pub fn get(&self, name: &str) -> Result<Arc<TypeDescriptor>> {
        match self.types.get(name) {
            Some(entry) => Ok(entry.value().clone()),
            None => Err(UnresolvedType(name.to_string())),
        }
    }

    /// Whether a descriptor is registered under the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry has no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
