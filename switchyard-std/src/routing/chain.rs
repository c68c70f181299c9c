//! Chain of responsibility.

use switchyard_core::{Capability, OperationError, SharedCapability};

/// An ordered list of links, each of which may handle an input or pass it on.
///
/// A link is any capability whose output is `Option<O>`: `Some` means the
/// link handled the input, `None` passes it to the next link.
///
/// # Example
///
/// ```rust,ignore
/// let chain = Chain::new()
///     .link(from_fn(|p: u8| Ok((p == 2).then_some("high"))))
///     .link(from_fn(|p: u8| Ok((p == 1).then_some("medium"))))
///     .link(from_fn(|p: u8| Ok((p == 0).then_some("low"))));
///
/// assert_eq!(chain.handle(1)?, Some("medium"));
/// ```
pub struct Chain<I, O> {
    links: Vec<SharedCapability<I, Option<O>>>,
}

impl<I: Clone + 'static, O: 'static> Chain<I, O> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Append a link to the end of the chain.
    pub fn link<C>(mut self, link: C) -> Self
    where
        C: Capability<I, Output = Option<O>>,
    {
        self.push(link);
        self
    }

    /// Append a link (mutable version).
    pub fn push<C>(&mut self, link: C)
    where
        C: Capability<I, Output = Option<O>>,
    {
        self.links.push(link.shared());
    }

    /// Offer `input` to each link in order.
    ///
    /// Returns the first handled output, or `None` if every link passed.
    /// A link error stops the walk and is returned as is.
    pub fn handle(&self, input: I) -> Result<Option<O>, OperationError> {
        for link in &self.links {
            if let Some(output) = link.execute(input.clone())? {
                return Ok(Some(output));
            }
        }
        Ok(None)
    }

    /// Get the number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if the chain has no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<I: Clone + 'static, O: 'static> Default for Chain<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

/// A whole chain is itself a link.
impl<I, O> Capability<I> for Chain<I, O>
where
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
{
    type Output = Option<O>;

    fn execute(&self, input: I) -> Result<Option<O>, OperationError> {
        self.handle(input)
    }
}
