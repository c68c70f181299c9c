//! Capabilities collected via `inventory`.
//!
//! Implementations can be submitted from anywhere in the program, usually
//! through `#[switchyard::capability(key = "...")]`, and gathered into a
//! [`Registry`] at runtime with [`Registry::collected`].
//!
//! # Example
//!
//! ```rust,ignore
//! inventory::submit! {
//!     CapabilityRegistration::new("ascending", build_ascending)
//! }
//!
//! fn build_ascending() -> Box<dyn Any + Send + Sync> {
//!     erase(Ascending)
//! }
//!
//! let sorters = Registry::<Vec<i32>, Vec<i32>>::collected();
//! ```

use crate::dynamic::Registry;
use std::any::Any;
use switchyard_core::{Capability, SharedCapability};

/// Registration entry for a capability in the global collection.
///
/// The entry stores a constructor instead of the capability itself so that
/// it can be built in a `static` context.
pub struct CapabilityRegistration {
    key: &'static str,
    build: fn() -> Box<dyn Any + Send + Sync>,
}

impl CapabilityRegistration {
    /// Create a registration. `build` must return the output of [`erase`].
    pub const fn new(key: &'static str, build: fn() -> Box<dyn Any + Send + Sync>) -> Self {
        Self { key, build }
    }

    /// The key the capability is registered under.
    pub fn key(&self) -> &'static str {
        self.key
    }
}

inventory::collect!(CapabilityRegistration);

/// Type-erase a capability for a [`CapabilityRegistration`].
pub fn erase<I, C>(capability: C) -> Box<dyn Any + Send + Sync>
where
    I: 'static,
    C: Capability<I>,
    C::Output: 'static,
{
    Box::new(capability.shared())
}

impl<I: 'static, O: 'static> Registry<I, O> {
    /// Build a registry from every submitted capability with input `I` and
    /// output `O`.
    ///
    /// Registrations for other signatures are skipped. When two registrations
    /// share a key, the one iterated last wins; `inventory` does not define
    /// that order.
    pub fn collected() -> Self {
        let mut registry = Self::new();
        for registration in inventory::iter::<CapabilityRegistration> {
            let Ok(shared) = (registration.build)().downcast::<SharedCapability<I, O>>() else {
                continue;
            };
            registry.register_shared(registration.key, *shared);
        }
        registry
    }
}

/// Keys of every submitted capability, regardless of signature.
pub fn collected_keys() -> Vec<&'static str> {
    inventory::iter::<CapabilityRegistration>
        .into_iter()
        .map(CapabilityRegistration::key)
        .collect()
}
