//! Prototype registry: named templates that are cloned on demand.

use std::collections::HashMap;
use switchyard_core::NotFoundError;

/// Stores named prototype values and hands out fresh clones of them.
///
/// Each [`spawn`](Self::spawn) returns an independent value; mutating it
/// never affects the stored prototype.
pub struct Prototypes<T> {
    templates: HashMap<String, T>,
}

impl<T: Clone> Prototypes<T> {
    /// Create an empty prototype registry.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Store `prototype` under `key`, returning the one it replaces.
    pub fn register(&mut self, key: impl Into<String>, prototype: T) -> Option<T> {
        self.templates.insert(key.into(), prototype)
    }

    /// Clone the prototype stored under `key`.
    pub fn spawn(&self, key: &str) -> Result<T, NotFoundError> {
        self.templates
            .get(key)
            .cloned()
            .ok_or_else(|| NotFoundError::new(key))
    }

    /// Remove the prototype under `key`, if any.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.templates.remove(key)
    }

    /// Get the number of stored prototypes.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if no prototypes are stored.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<T: Clone> Default for Prototypes<T> {
    fn default() -> Self {
        Self::new()
    }
}
