//! # switchyard-std
//!
//! Standard implementations for the Switchyard capability-dispatch toolkit.
//!
//! This crate provides:
//! - **Registration**: [`Registry`], [`RegistryBuilder`], and with the
//!   `inventory` feature, program-wide collection via [`CapabilityRegistration`]
//! - **Dispatch**: [`Dispatcher`] and the thread-shareable [`SharedDispatcher`]
//! - **Singletons**: [`Singleton`], a lazily constructed process-wide instance
//! - **Routing**: [`Chain`] (first handler wins) and [`Broadcast`] (everyone hears)
//! - **Stores**: [`SharedPool`] (shared values) and [`Prototypes`] (cloned values)
//! - **Testing**: recording, counting and failing capabilities

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchyard_core;

// Modules
pub mod dispatch;
pub mod dynamic;
pub mod routing;
pub mod singleton;
pub mod store;
pub mod testing;

pub use dispatch::{Dispatcher, SharedDispatcher};
#[cfg(feature = "inventory")]
pub use dynamic::CapabilityRegistration;
pub use dynamic::{Registry, RegistryBuilder};
pub use routing::{Broadcast, Chain, SubscriptionId};
pub use singleton::Singleton;
pub use store::{Prototypes, SharedPool};

#[cfg(feature = "inventory")]
pub use inventory;
