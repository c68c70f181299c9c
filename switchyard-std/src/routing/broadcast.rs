//! Observer-style fan-out to every subscriber.

use switchyard_core::{Capability, OperationError, SharedCapability};

/// Identifies a subscription so it can be cancelled later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Delivers each event to every subscriber, in subscription order.
///
/// Subscribers are capabilities with a `()` output.
///
/// # Example
///
/// ```rust,ignore
/// let mut feed = Broadcast::new();
/// let id = feed.subscribe(from_fn(|price: u32| {
///     println!("new price: {price}");
///     Ok(())
/// }));
///
/// feed.notify(120)?;
/// feed.unsubscribe(id);
/// ```
pub struct Broadcast<E> {
    subscribers: Vec<(SubscriptionId, SharedCapability<E, ()>)>,
    next_id: u64,
}

impl<E: Clone + 'static> Broadcast<E> {
    /// Create a broadcast with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a subscriber.
    pub fn subscribe<C>(&mut self, subscriber: C) -> SubscriptionId
    where
        C: Capability<E, Output = ()>,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber.shared()));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Deliver `event` to every subscriber.
    ///
    /// Returns how many subscribers were notified. The first subscriber
    /// error stops delivery and is returned; later subscribers do not see
    /// the event.
    pub fn notify(&self, event: E) -> Result<usize, OperationError> {
        for (_, subscriber) in &self.subscribers {
            subscriber.execute(event.clone())?;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(subscribers = self.subscribers.len(), "event broadcast");
        Ok(self.subscribers.len())
    }

    /// Get the number of subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Check if there are no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E: Clone + 'static> Default for Broadcast<E> {
    fn default() -> Self {
        Self::new()
    }
}
