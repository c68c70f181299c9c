//! Dispatchers: a current implementation plus uniform forwarding.
//!
//! | Type | Swap through | Share across threads |
//! |------|--------------|----------------------|
//! | [`Dispatcher`] | `&mut self` | no locking, single owner |
//! | [`SharedDispatcher`] | `&self` | yes, via `Arc` |

pub mod dispatcher;
pub mod shared;

pub use dispatcher::Dispatcher;
pub use shared::SharedDispatcher;
