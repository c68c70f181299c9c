//! # switchyard - Capability Dispatch
//!
//! `switchyard` gives one vocabulary to the mechanism shared by Strategy,
//! State, Factory Method, Command and their relatives: an operation contract
//! ([`Capability`]), a keyed store of implementations ([`Registry`]), a
//! holder that forwards to a swappable current implementation
//! ([`Dispatcher`]), and a lazily constructed process-wide instance
//! ([`Singleton`]).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchyard::prelude::*;
//!
//! let registry = RegistryBuilder::new()
//!     .register("ascending", from_fn(|mut v: Vec<i32>| { v.sort(); Ok(v) }))
//!     .register("descending", from_fn(|mut v: Vec<i32>| { v.sort_by(|a, b| b.cmp(a)); Ok(v) }))
//!     .build();
//!
//! let mut sorter = Dispatcher::from_registry(&registry, "ascending")?;
//! assert_eq!(sorter.invoke(vec![2, 3, 1])?, vec![1, 2, 3]);
//!
//! sorter.select(&registry, "descending")?;
//! assert_eq!(sorter.invoke(vec![2, 3, 1])?, vec![3, 2, 1]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for registrations, swaps and singleton
//!   construction, and real spans from [`Capability::traced`]
//! - `inventory`: collect capabilities submitted anywhere in the program
//! - `macros`: the `#[capability]` attribute

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use switchyard_core::{
    // Errors
    AccessDenied,
    BoxError,
    // Capability
    Capability,
    ConstructionError,
    FnCapability,
    Guard,
    MapInput,
    MapOutput,
    NotFoundError,
    OperationError,
    SharedCapability,
    SwitchyardError,
    Traced,
    from_fn,
};

// Registration and dispatch
pub use switchyard_std::{
    Broadcast, Chain, Dispatcher, Prototypes, Registry, RegistryBuilder, SharedDispatcher,
    SharedPool, Singleton, SubscriptionId,
};

/// Program-wide capability collection.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use switchyard_std::dynamic::collected::{CapabilityRegistration, collected_keys, erase};
}

/// Testing utilities.
pub mod testing {
    pub use switchyard_std::testing::{CountingCapability, FailingCapability, RecordingCapability};
}

/// Prelude module - common imports for Switchyard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchyard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Capability, ConstructionError, Dispatcher, NotFoundError, OperationError, Registry,
        RegistryBuilder, SharedCapability, SharedDispatcher, Singleton, SwitchyardError, from_fn,
    };
}

#[cfg(feature = "macros")]
pub use switchyard_macros::capability;

#[cfg(feature = "inventory")]
pub use inventory;
