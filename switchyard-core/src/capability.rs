//! # Capability Layer
//!
//! A capability is an operation contract: one input, one output, and a
//! failure channel. Concrete variants are independent types implementing
//! [`Capability`]; consumers hold them behind the trait (usually as a
//! [`SharedCapability`]) and never name the concrete variant.
//!
//! # Combinators
//!
//! Like iterator adapters, the provided methods wrap a capability into a new
//! one without touching the original:
//!
//! - [`map_input`](Capability::map_input) adapts a foreign input type
//! - [`map_output`](Capability::map_output) decorates the successful result
//! - [`guard`](Capability::guard) stands in front of the capability and may refuse
//! - [`traced`](Capability::traced) wraps each call in a `tracing` span
//! - [`shared`](Capability::shared) erases the concrete type

use crate::error::{AccessDenied, OperationError};
use std::{marker::PhantomData, sync::Arc};

/// A shared, type-erased capability.
///
/// Cloning is O(1); the implementation lives as long as any holder keeps it.
pub type SharedCapability<I, O> = Arc<dyn Capability<I, Output = O>>;

/// An operation contract with interchangeable implementations.
///
/// # Example
///
/// ```rust,ignore
/// struct Ascending;
///
/// impl Capability<Vec<i32>> for Ascending {
///     type Output = Vec<i32>;
///
///     fn execute(&self, mut input: Vec<i32>) -> Result<Vec<i32>, OperationError> {
///         input.sort();
///         Ok(input)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Capability<{I}>`",
    label = "missing `Capability` implementation",
    note = "Capabilities must implement `execute` for the input type `{I}`."
)]
pub trait Capability<I>: Send + Sync + 'static {
    /// The value produced by a successful execution.
    type Output;

    /// Run the operation.
    fn execute(&self, input: I) -> Result<Self::Output, OperationError>;

    /// Accept inputs of another type by converting them first.
    fn map_input<F, J>(self, adapt: F) -> MapInput<Self, F, J>
    where
        Self: Sized,
        F: Fn(J) -> I + Send + Sync + 'static,
    {
        MapInput {
            inner: self,
            adapt,
            _phantom: PhantomData,
        }
    }

    /// Transform the successful output.
    fn map_output<F, O>(self, mapper: F) -> MapOutput<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> O + Send + Sync + 'static,
    {
        MapOutput {
            inner: self,
            mapper,
        }
    }

    /// Refuse inputs the predicate rejects.
    ///
    /// A refused input never reaches this capability; the caller receives an
    /// [`OperationError`] wrapping [`AccessDenied`].
    fn guard<P>(self, predicate: P) -> Guard<Self, P>
    where
        Self: Sized,
        P: Fn(&I) -> Result<(), AccessDenied> + Send + Sync + 'static,
    {
        Guard {
            inner: self,
            predicate,
        }
    }

    /// Wrap each execution in a `tracing` span named after `name`.
    ///
    /// Without the `tracing` feature this is a plain pass-through.
    fn traced(self, name: &'static str) -> Traced<Self>
    where
        Self: Sized,
    {
        Traced { inner: self, name }
    }

    /// Erase the concrete type.
    fn shared(self) -> SharedCapability<I, Self::Output>
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

impl<I, C> Capability<I> for Arc<C>
where
    C: Capability<I> + ?Sized,
{
    type Output = C::Output;

    fn execute(&self, input: I) -> Result<Self::Output, OperationError> {
        (**self).execute(input)
    }
}

impl<I, C> Capability<I> for Box<C>
where
    C: Capability<I> + ?Sized,
{
    type Output = C::Output;

    fn execute(&self, input: I) -> Result<Self::Output, OperationError> {
        (**self).execute(input)
    }
}

/// Build a capability from a closure.
///
/// ```rust,ignore
/// let double = from_fn(|x: i32| Ok(x * 2));
/// assert_eq!(double.execute(4)?, 8);
/// ```
pub fn from_fn<I, O, F>(f: F) -> FnCapability<F>
where
    F: Fn(I) -> Result<O, OperationError> + Send + Sync + 'static,
{
    FnCapability { f }
}

/// A capability backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnCapability<F> {
    f: F,
}

impl<I, O, F> Capability<I> for FnCapability<F>
where
    F: Fn(I) -> Result<O, OperationError> + Send + Sync + 'static,
{
    type Output = O;

    fn execute(&self, input: I) -> Result<O, OperationError> {
        (self.f)(input)
    }
}

/// Adapter produced by [`Capability::map_input`].
pub struct MapInput<C, F, J> {
    inner: C,
    adapt: F,
    _phantom: PhantomData<fn(J)>,
}

impl<C, F, I, J> Capability<J> for MapInput<C, F, J>
where
    C: Capability<I>,
    F: Fn(J) -> I + Send + Sync + 'static,
    J: 'static,
{
    type Output = C::Output;

    fn execute(&self, input: J) -> Result<Self::Output, OperationError> {
        self.inner.execute((self.adapt)(input))
    }
}

/// Decorator produced by [`Capability::map_output`].
pub struct MapOutput<C, F> {
    inner: C,
    mapper: F,
}

impl<C, F, I, O> Capability<I> for MapOutput<C, F>
where
    C: Capability<I>,
    F: Fn(C::Output) -> O + Send + Sync + 'static,
{
    type Output = O;

    fn execute(&self, input: I) -> Result<O, OperationError> {
        self.inner.execute(input).map(&self.mapper)
    }
}

/// Proxy produced by [`Capability::guard`].
pub struct Guard<C, P> {
    inner: C,
    predicate: P,
}

impl<C, P, I> Capability<I> for Guard<C, P>
where
    C: Capability<I>,
    P: Fn(&I) -> Result<(), AccessDenied> + Send + Sync + 'static,
{
    type Output = C::Output;

    fn execute(&self, input: I) -> Result<Self::Output, OperationError> {
        (self.predicate)(&input).map_err(OperationError::new)?;
        self.inner.execute(input)
    }
}

/// Instrumentation wrapper produced by [`Capability::traced`].
pub struct Traced<C> {
    inner: C,
    name: &'static str,
}

impl<C> Traced<C> {
    /// The span name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped capability.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clone> Clone for Traced<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<C, I> Capability<I> for Traced<C>
where
    C: Capability<I>,
{
    type Output = C::Output;

    #[cfg(feature = "tracing")]
    fn execute(&self, input: I) -> Result<Self::Output, OperationError> {
        let span = tracing::info_span!("capability", name = %self.name);
        let _entered = span.enter();
        let result = self.inner.execute(input);
        tracing::trace!(ok = result.is_ok(), "capability executed");
        result
    }

    #[cfg(not(feature = "tracing"))]
    fn execute(&self, input: I) -> Result<Self::Output, OperationError> {
        self.inner.execute(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ascending;

    impl Capability<Vec<i32>> for Ascending {
        type Output = Vec<i32>;

        fn execute(&self, mut input: Vec<i32>) -> Result<Vec<i32>, OperationError> {
            input.sort_unstable();
            Ok(input)
        }
    }

    #[test]
    fn test_direct_execute() {
        let result = Ascending.execute(vec![3, 1, 2]).unwrap();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_fn() {
        let double = from_fn(|x: i32| Ok(x * 2));
        assert_eq!(double.execute(21).unwrap(), 42);
    }

    #[test]
    fn test_shared_erases_type() {
        let shared: SharedCapability<Vec<i32>, Vec<i32>> = Ascending.shared();
        let clone = Arc::clone(&shared);
        assert_eq!(clone.execute(vec![2, 1]).unwrap(), vec![1, 2]);
        assert_eq!(Arc::strong_count(&shared), 2);
    }

    #[test]
    fn test_map_input_adapts_foreign_type() {
        let from_csv = Ascending.map_input(|line: &'static str| {
            line.split(',')
                .map(|n| n.trim().parse::<i32>().unwrap_or(0))
                .collect::<Vec<_>>()
        });
        assert_eq!(from_csv.execute("9, 4, 7").unwrap(), vec![4, 7, 9]);
    }

    #[test]
    fn test_map_output_decorates_result() {
        let largest = Ascending.map_output(|sorted: Vec<i32>| sorted.last().copied());
        assert_eq!(largest.execute(vec![5, 8, 1]).unwrap(), Some(8));
        assert_eq!(largest.execute(Vec::new()).unwrap(), None);
    }

    #[test]
    fn test_guard_rejects_before_inner_runs() {
        let guarded = from_fn(|x: i32| {
            if x < 0 {
                panic!("inner capability must not see negative input");
            }
            Ok(x)
        })
        .guard(|x: &i32| {
            if *x < 0 {
                Err(AccessDenied::new("negative input"))
            } else {
                Ok(())
            }
        });

        assert_eq!(guarded.execute(3).unwrap(), 3);

        let err = guarded.execute(-1).unwrap_err();
        let denied = err.downcast_ref::<AccessDenied>().unwrap();
        assert_eq!(denied.reason(), "negative input");
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let failing = from_fn(|_: ()| -> Result<(), OperationError> {
            Err(OperationError::msg("backend unavailable"))
        });
        let wrapped = failing.map_output(|()| 1);
        let err = wrapped.execute(()).unwrap_err();
        assert_eq!(err.to_string(), "backend unavailable");
    }

    #[test]
    fn test_traced_passes_through() {
        let traced = Ascending.traced("sort");
        assert_eq!(traced.name(), "sort");
        assert_eq!(traced.execute(vec![3, 2, 1]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_boxed_dyn_capability() {
        let boxed: Box<dyn Capability<Vec<i32>, Output = Vec<i32>>> = Box::new(Ascending);
        assert_eq!(boxed.execute(vec![2, 3, 1]).unwrap(), vec![1, 2, 3]);
    }
}
