//! Single-owner dispatcher.

use crate::dynamic::Registry;
use switchyard_core::{Capability, NotFoundError, OperationError, SharedCapability};

/// Holds the currently selected implementation of a capability and forwards
/// invocations to it.
///
/// A dispatcher is never empty: it is constructed with an implementation and
/// [`set_implementation`](Self::set_implementation) only ever swaps one
/// implementation for another.
///
/// # Example
///
/// ```rust,ignore
/// let mut sorter = Dispatcher::new(Ascending);
/// assert_eq!(sorter.invoke(vec![2, 1])?, vec![1, 2]);
///
/// sorter.set_implementation(Descending);
/// assert_eq!(sorter.invoke(vec![1, 2])?, vec![2, 1]);
/// ```
pub struct Dispatcher<I, O> {
    current: SharedCapability<I, O>,
}

impl<I: 'static, O: 'static> Dispatcher<I, O> {
    /// Create a dispatcher forwarding to `initial`.
    pub fn new<C>(initial: C) -> Self
    where
        C: Capability<I, Output = O>,
    {
        Self::from_shared(initial.shared())
    }

    /// Create a dispatcher forwarding to an already shared implementation.
    pub fn from_shared(initial: SharedCapability<I, O>) -> Self {
        Self { current: initial }
    }

    /// Create a dispatcher forwarding to the implementation registered under `key`.
    pub fn from_registry(registry: &Registry<I, O>, key: &str) -> Result<Self, NotFoundError> {
        registry.lookup(key).map(Self::from_shared)
    }

    /// Replace the current implementation.
    ///
    /// Returns the released implementation. It is dropped only if nothing
    /// else holds it.
    pub fn set_implementation<C>(&mut self, implementation: C) -> SharedCapability<I, O>
    where
        C: Capability<I, Output = O>,
    {
        self.set_shared(implementation.shared())
    }

    /// Replace the current implementation with an already shared one.
    pub fn set_shared(
        &mut self,
        implementation: SharedCapability<I, O>,
    ) -> SharedCapability<I, O> {
        #[cfg(feature = "tracing")]
        tracing::trace!("swapping dispatcher implementation");
        std::mem::replace(&mut self.current, implementation)
    }

    /// Switch to the implementation registered under `key`.
    ///
    /// On a missing key the current implementation is left in place.
    pub fn select(&mut self, registry: &Registry<I, O>, key: &str) -> Result<(), NotFoundError> {
        let implementation = registry.lookup(key)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, "dispatcher selected implementation");
        self.current = implementation;
        Ok(())
    }

    /// Forward `input` to the current implementation.
    pub fn invoke(&self, input: I) -> Result<O, OperationError> {
        self.current.execute(input)
    }

    /// The current implementation.
    pub fn current(&self) -> &SharedCapability<I, O> {
        &self.current
    }
}

impl<I, O> Clone for Dispatcher<I, O> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
        }
    }
}
