//! Keyed registry of capability implementations.
//!
//! The registry maps a string key to one shared implementation. Keys are
//! unique: registering a key again replaces the previous implementation
//! instead of keeping both.

use std::collections::HashMap;
use switchyard_core::{Capability, NotFoundError, SharedCapability, SwitchyardError};

/// A mutable map from key to capability implementation.
///
/// Implementations are stored as [`SharedCapability`], so a looked-up
/// implementation stays valid even after it is removed or replaced here.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = Registry::new();
/// registry.register("ascending", Ascending);
/// registry.register("descending", Descending);
///
/// let sort = registry.lookup("descending")?;
/// let sorted = sort.execute(vec![1, 3, 2])?;
/// ```
pub struct Registry<I, O> {
    entries: HashMap<String, SharedCapability<I, O>>,
}

impl<I: 'static, O: 'static> Registry<I, O> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an implementation under `key`.
    ///
    /// Overwrites any implementation already stored under the same key and
    /// returns it.
    pub fn register<C>(
        &mut self,
        key: impl Into<String>,
        implementation: C,
    ) -> Option<SharedCapability<I, O>>
    where
        C: Capability<I, Output = O>,
    {
        self.register_shared(key, implementation.shared())
    }

    /// Register an already shared implementation under `key`.
    pub fn register_shared(
        &mut self,
        key: impl Into<String>,
        implementation: SharedCapability<I, O>,
    ) -> Option<SharedCapability<I, O>> {
        let key = key.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, "registering implementation");
        self.entries.insert(key, implementation)
    }

    /// Look up the implementation registered under `key`.
    pub fn lookup(&self, key: &str) -> Result<SharedCapability<I, O>, NotFoundError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| NotFoundError::new(key))
    }

    /// Remove the implementation under `key`, if any.
    pub fn remove(&mut self, key: &str) -> Option<SharedCapability<I, O>> {
        let removed = self.entries.remove(key);
        #[cfg(feature = "tracing")]
        {
            if removed.is_some() {
                tracing::debug!(key = %key, "removed implementation");
            }
        }
        removed
    }

    /// Look up `key` and execute it with `input`.
    pub fn invoke(&self, key: &str, input: I) -> Result<O, SwitchyardError> {
        let implementation = self.lookup(key)?;
        Ok(implementation.execute(input)?)
    }

    /// Check whether `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Get the number of registered implementations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I: 'static, O: 'static> Default for Registry<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for Registry<I, O> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<I, O> std::fmt::Debug for Registry<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for constructing a Registry.
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new()
///     .register("ascending", Ascending)
///     .register("descending", Descending)
///     .build();
/// ```
pub struct RegistryBuilder<I, O> {
    registry: Registry<I, O>,
}

impl<I: 'static, O: 'static> RegistryBuilder<I, O> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Register an implementation. Later registrations of a key win.
    pub fn register<C>(mut self, key: impl Into<String>, implementation: C) -> Self
    where
        C: Capability<I, Output = O>,
    {
        self.registry.register(key, implementation);
        self
    }

    /// Register an already shared implementation.
    pub fn register_shared(
        mut self,
        key: impl Into<String>,
        implementation: SharedCapability<I, O>,
    ) -> Self {
        self.registry.register_shared(key, implementation);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry<I, O> {
        self.registry
    }
}

impl<I: 'static, O: 'static> Default for RegistryBuilder<I, O> {
    fn default() -> Self {
        Self::new()
    }
}
