//! Flyweight pool of shared values.

use std::{collections::HashMap, hash::Hash, sync::Arc};

/// Hands out one shared value per key, creating it on first request.
///
/// Many owners can hold the same `Arc<V>` instead of each keeping a copy of
/// the shared part of their state.
///
/// # Example
///
/// ```rust,ignore
/// let mut models = SharedPool::new();
/// let a = models.get_or_insert_with("s-class", || CarModel::load("s-class"));
/// let b = models.get_or_insert_with("s-class", || CarModel::load("s-class"));
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct SharedPool<K, V> {
    values: HashMap<K, Arc<V>>,
}

impl<K: Eq + Hash, V> SharedPool<K, V> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Get the shared value for `key`, creating it with `make` if absent.
    ///
    /// `make` runs at most once per key.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        Arc::clone(
            self.values
                .entry(key)
                .or_insert_with(|| Arc::new(make())),
        )
    }

    /// Get the shared value for `key` without creating it.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.values.get(key).cloned()
    }

    /// Get the number of distinct values in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for SharedPool<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
