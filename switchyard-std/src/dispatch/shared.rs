//! Thread-shareable dispatcher.

use parking_lot::RwLock;
use switchyard_core::{Capability, OperationError, SharedCapability};

/// A dispatcher whose implementation can be swapped through `&self`.
///
/// Wrap it in an `Arc` to share it between threads. The lock is held only
/// while the current implementation is read or replaced, never while it
/// executes, so a slow implementation does not block a swap.
pub struct SharedDispatcher<I, O> {
    current: RwLock<SharedCapability<I, O>>,
}

impl<I: 'static, O: 'static> SharedDispatcher<I, O> {
    /// Create a dispatcher forwarding to `initial`.
    pub fn new<C>(initial: C) -> Self
    where
        C: Capability<I, Output = O>,
    {
        Self::from_shared(initial.shared())
    }

    /// Create a dispatcher forwarding to an already shared implementation.
    pub fn from_shared(initial: SharedCapability<I, O>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Replace the current implementation, returning the released one.
    pub fn set_implementation<C>(&self, implementation: C) -> SharedCapability<I, O>
    where
        C: Capability<I, Output = O>,
    {
        self.set_shared(implementation.shared())
    }

    /// Replace the current implementation with an already shared one.
    pub fn set_shared(&self, implementation: SharedCapability<I, O>) -> SharedCapability<I, O> {
        std::mem::replace(&mut *self.current.write(), implementation)
    }

    /// A handle to the current implementation.
    pub fn current(&self) -> SharedCapability<I, O> {
        self.current.read().clone()
    }

    /// Forward `input` to the current implementation.
    pub fn invoke(&self, input: I) -> Result<O, OperationError> {
        let implementation = self.current();
        implementation.execute(input)
    }
}
