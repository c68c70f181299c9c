//! # Routing Implementations
//!
//! Ways to route one input to several implementations:
//!
//! | Type | Delivers to | Result |
//! |------|-------------|--------|
//! | [`Chain`] | links in order, until one handles | first handled output |
//! | [`Broadcast`] | every subscriber | number notified |

pub mod broadcast;
pub mod chain;

pub use broadcast::{Broadcast, SubscriptionId};
pub use chain::Chain;
