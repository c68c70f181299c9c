//! Testing utilities for Switchyard.
//!
//! This module provides capabilities that make it easy to observe what a
//! registry, dispatcher, chain or broadcast actually did.
//!
//! # Features
//!
//! - [`RecordingCapability`]: records every input it receives
//! - [`CountingCapability`]: counts invocations and returns a fixed value
//! - [`FailingCapability`]: always fails with a given message

use std::{
    marker::PhantomData,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};
use switchyard_core::{Capability, OperationError};

// ============================================================================
// Recording Capability
// ============================================================================

/// A capability that records all inputs it receives.
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to the code under test.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingCapability::<u32>::new();
/// broadcast.subscribe(recorder.clone());
///
/// broadcast.notify(7)?;
/// assert_eq!(recorder.inputs(), vec![7]);
/// ```
pub struct RecordingCapability<I> {
    inputs: Arc<Mutex<Vec<I>>>,
}

impl<I: Clone> RecordingCapability<I> {
    /// Create a new recorder.
    pub fn new() -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded inputs.
    pub fn inputs(&self) -> Vec<I> {
        self.lock().clone()
    }

    /// Get the number of recorded inputs.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded inputs.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<I>> {
        self.inputs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<I: Clone> Default for RecordingCapability<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for RecordingCapability<I> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
        }
    }
}

impl<I: Clone + Send + 'static> Capability<I> for RecordingCapability<I> {
    type Output = ();

    fn execute(&self, input: I) -> Result<(), OperationError> {
        self.lock().push(input);
        Ok(())
    }
}

// ============================================================================
// Counting Capability
// ============================================================================

/// A capability that counts invocations and returns a clone of a fixed value.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingCapability::returning(42);
/// let dispatcher = Dispatcher::new(counter.clone());
///
/// dispatcher.invoke(())?;
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingCapability<O> {
    count: Arc<AtomicUsize>,
    output: O,
}

impl CountingCapability<()> {
    /// Create a counter that returns `()`.
    pub fn new() -> Self {
        Self::returning(())
    }
}

impl Default for CountingCapability<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> CountingCapability<O> {
    /// Create a counter that returns `output` on every call.
    pub fn returning(output: O) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            output,
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<O: Clone> Clone for CountingCapability<O> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            output: self.output.clone(),
        }
    }
}

impl<I, O> Capability<I> for CountingCapability<O>
where
    O: Clone + Send + Sync + 'static,
{
    type Output = O;

    fn execute(&self, _input: I) -> Result<O, OperationError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

// ============================================================================
// Failing Capability
// ============================================================================

/// A capability that always fails with the same message.
pub struct FailingCapability<O = ()> {
    message: String,
    _phantom: PhantomData<fn() -> O>,
}

impl<O> FailingCapability<O> {
    /// Create a capability failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<I, O: 'static> Capability<I> for FailingCapability<O> {
    type Output = O;

    fn execute(&self, _input: I) -> Result<O, OperationError> {
        Err(OperationError::msg(self.message.clone()))
    }
}
