//! # switchyard-core
//!
//! Core traits for the Switchyard capability-dispatch toolkit.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that only provide implementations and don't need the registry,
//! dispatcher or singleton machinery from `switchyard-std`.
//!
//! # The Capability Contract
//!
//! A [`Capability`] is one operation signature: it takes an input, produces
//! an output, or fails with an [`OperationError`]. Strategies, states,
//! factories and commands are all capabilities that differ only in what the
//! input and output are:
//!
//! | Pattern | Input | Output |
//! |---------|-------|--------|
//! | Strategy | the data to process | the processed data |
//! | State | the request | the state's response |
//! | Factory Method | `()` | the product |
//! | Command | `()` | `()` |
//!
//! Callers depend on the contract, never on a concrete variant.
//!
//! # Error Types
//!
//! - [`SwitchyardError`] - Top-level error type
//! - [`NotFoundError`] - Lookup of an unregistered key
//! - [`OperationError`] - Failure raised by an implementation
//! - [`ConstructionError`] - Failure while constructing a singleton

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod capability;
mod error;

// Re-exports
pub use capability::{
    Capability, FnCapability, Guard, MapInput, MapOutput, SharedCapability, Traced, from_fn,
};
pub use error::{
    AccessDenied, BoxError, ConstructionError, NotFoundError, OperationError, SwitchyardError,
};
