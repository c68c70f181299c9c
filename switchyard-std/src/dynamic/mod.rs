//! Runtime registration.
//!
//! This module provides keyed storage for implementations chosen at runtime.
//! Use [`Registry`] when the set of implementations is assembled by the
//! application; enable the `inventory` feature to assemble it from
//! implementations submitted across the whole program.

#[cfg(feature = "inventory")]
pub mod collected;
pub mod registry;

#[cfg(feature = "inventory")]
pub use collected::CapabilityRegistration;
pub use registry::{Registry, RegistryBuilder};
