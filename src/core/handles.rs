// Handle Management System: integer handles for shared, immutable objects
//
// Objects handed out through the api layer are referenced by non-zero integer
// handles that index into a registry of Arc<T> objects. Handle 0 is null.
// Freeing a handle only drops the registry's reference; a reduction already
// holding the Arc keeps the object alive until it finishes.

use crate::core::error::{GraphBlasError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Generic handle registry for a specific object type
pub struct HandleRegistry<T> {
    handles: Mutex<HashMap<usize, Arc<T>>>,
    next_handle: Mutex<usize>,
}

// A panic while holding either lock cannot leave the map half-updated,
// so a poisoned lock is still safe to use.
fn lock<U>(mutex: &Mutex<U>) -> MutexGuard<'_, U> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T> HandleRegistry<T> {
    /// Create a new handle registry
    pub fn new() -> Self {
        Self {
            handles: Mutex::new(HashMap::new()),
            next_handle: Mutex::new(1), // Start at 1 (NULL is 0)
        }
    }

    /// Register a new object and return its handle
    pub fn insert(&self, object: T) -> usize {
        let arc = Arc::new(object);
        let handle = {
            let mut next = lock(&self.next_handle);
            let handle = *next;
            *next += 1;
            handle
        };

        lock(&self.handles).insert(handle, arc);
        handle
    }

    /// Get a reference to an object by its handle
    ///
    /// Returns an Arc clone, incrementing the reference count.
    /// Handle 0 is never registered, so it fails like any unknown or freed
    /// handle; callers report null handles before reaching the registry.
    pub fn get(&self, handle: usize) -> Result<Arc<T>> {
        lock(&self.handles)
            .get(&handle)
            .cloned()
            .ok_or(GraphBlasError::UninitializedObject)
    }

    /// Remove an object by its handle
    ///
    /// The object will be dropped when all Arc references are released.
    pub fn remove(&self, handle: usize) -> Result<Arc<T>> {
        lock(&self.handles)
            .remove(&handle)
            .ok_or(GraphBlasError::UninitializedObject)
    }
}

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create a global handle registry for a specific type
#[macro_export]
macro_rules! define_handle_registry {
    ($registry_name:ident, $type:ty) => {
        lazy_static::lazy_static! {
            static ref $registry_name: $crate::core::handles::HandleRegistry<$type> =
                $crate::core::handles::HandleRegistry::new();
        }
    };
}
