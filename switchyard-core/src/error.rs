//! Error types for Switchyard.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`SwitchyardError`] - Top-level error type for all Switchyard operations
//! - [`NotFoundError`] - A key was not registered
//! - [`OperationError`] - An implementation failed while executing
//! - [`ConstructionError`] - A singleton failed to construct
//! - [`AccessDenied`] - A guard refused an input

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Switchyard operations.
#[derive(Error, Debug)]
pub enum SwitchyardError {
    /// A lookup named a key that is not registered.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// An implementation failed during invocation.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// A singleton failed to construct.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Lookup of a key that has no registered implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no implementation registered for key: {key}")]
pub struct NotFoundError {
    key: String,
}

impl NotFoundError {
    /// Create an error for the missing `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key that was looked up.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A failure raised by a concrete implementation.
///
/// The implementation's own error is kept as the source and displayed
/// transparently, so callers see exactly what the implementation reported.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct OperationError(BoxError);

impl OperationError {
    /// Wrap any error raised by an implementation.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self(err.into())
    }

    /// Create an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }

    /// Attempt to view the wrapped error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` if the wrapped error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: std::error::Error + 'static,
    {
        self.0.is::<E>()
    }

    /// Unwrap into the boxed implementation error.
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl From<BoxError> for OperationError {
    fn from(err: BoxError) -> Self {
        OperationError(err)
    }
}

/// A singleton's constructor failed.
///
/// The holder stays uninitialized, so the next access retries construction.
#[derive(Error, Debug)]
pub enum ConstructionError {
    /// The constructor returned an error.
    #[error("singleton construction failed")]
    Failed(#[source] BoxError),

    /// The constructor panicked.
    #[error("singleton constructor panicked: {0}")]
    Panicked(String),
}

impl From<BoxError> for ConstructionError {
    fn from(err: BoxError) -> Self {
        ConstructionError::Failed(err)
    }
}

/// Raised by a guarded capability when its predicate rejects the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("access denied: {reason}")]
pub struct AccessDenied {
    reason: String,
}

impl AccessDenied {
    /// Create a rejection with a human readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
