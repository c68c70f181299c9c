//! Lazily constructed, process-wide instances.
//!
//! [`Singleton`] owns at most one instance of `T`, built on first access by a
//! fallible constructor. It is meant to live in a `static`:
//!
//! ```rust,ignore
//! static SETTINGS: Singleton<Settings> = Singleton::new(Settings::load);
//!
//! let settings = SETTINGS.get_instance()?;
//! ```
//!
//! # Guarantees
//!
//! - The constructor runs to completion at most once successfully, even when
//!   many threads race on the first access.
//! - Every caller receives a reference to the same instance.
//! - A reference is handed out only after construction has finished.
//! - A failed (or panicking) construction leaves the holder empty; the next
//!   access tries again.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::{Mutex, OnceLock, PoisonError},
};
use switchyard_core::{BoxError, ConstructionError};

/// A lazily-initialized, exclusively-owned instance.
pub struct Singleton<T> {
    instance: OnceLock<T>,
    init_lock: Mutex<()>,
    init: fn() -> Result<T, BoxError>,
}

impl<T> Singleton<T> {
    /// Create an empty holder that will build its instance with `init`.
    pub const fn new(init: fn() -> Result<T, BoxError>) -> Self {
        Self {
            instance: OnceLock::new(),
            init_lock: Mutex::new(()),
            init,
        }
    }

    /// Get the instance, constructing it on first access.
    ///
    /// Uses double-checked acquisition: the fast path reads the published
    /// instance without locking; the slow path takes the init lock, checks
    /// again, and only then runs the constructor.
    pub fn get_instance(&self) -> Result<&T, ConstructionError> {
        if let Some(instance) = self.instance.get() {
            return Ok(instance);
        }

        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished construction while we waited.
        if let Some(instance) = self.instance.get() {
            return Ok(instance);
        }

        let value = match panic::catch_unwind(AssertUnwindSafe(self.init)) {
            Ok(Ok(value)) => value,
            Ok(Err(err)) => return Err(ConstructionError::Failed(err)),
            Err(payload) => return Err(ConstructionError::Panicked(panic_message(payload))),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            instance = std::any::type_name::<T>(),
            "singleton constructed"
        );

        // Only this thread can publish while the init lock is held.
        Ok(self.instance.get_or_init(|| value))
    }

    /// Get the instance if it has already been constructed.
    pub fn get(&self) -> Option<&T> {
        self.instance.get()
    }

    /// Check whether the instance has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Singleton")
            .field("instance", &self.instance.get())
            .finish()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            Arc, Barrier,
            atomic::{AtomicUsize, Ordering},
        },
        thread,
    };

    #[derive(Debug)]
    struct Connection {
        id: usize,
    }

    #[test]
    fn test_constructs_once_and_returns_same_instance() {
        static BUILDS: AtomicUsize = AtomicUsize::new(0);
        fn build() -> Result<Connection, BoxError> {
            let id = BUILDS.fetch_add(1, Ordering::SeqCst);
            Ok(Connection { id })
        }

        let holder = Singleton::new(build);
        assert!(!holder.is_initialized());
        assert!(holder.get().is_none());

        let first = holder.get_instance().unwrap();
        let second = holder.get_instance().unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.id, 0);
        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert!(holder.is_initialized());
    }

    #[test]
    fn test_failed_construction_is_retried() {
        static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);
        fn flaky() -> Result<Connection, BoxError> {
            match ATTEMPTS.fetch_add(1, Ordering::SeqCst) {
                0 => Err("backend not ready".into()),
                n => Ok(Connection { id: n }),
            }
        }

        let holder = Singleton::new(flaky);

        let err = holder.get_instance().unwrap_err();
        assert!(matches!(err, ConstructionError::Failed(_)));
        assert!(!holder.is_initialized());

        let instance = holder.get_instance().unwrap();
        assert_eq!(instance.id, 1);
        assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_panicking_constructor_does_not_poison() {
        static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);
        fn panics_once() -> Result<Connection, BoxError> {
            if ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("constructor exploded");
            }
            Ok(Connection { id: 42 })
        }

        let holder = Singleton::new(panics_once);

        match holder.get_instance() {
            Err(ConstructionError::Panicked(message)) => {
                assert_eq!(message, "constructor exploded");
            }
            other => panic!("expected a panic error, got {other:?}"),
        }

        assert_eq!(holder.get_instance().unwrap().id, 42);
    }

    #[test]
    fn test_concurrent_first_access_constructs_once() {
        const THREADS: usize = 16;
        static BUILDS: AtomicUsize = AtomicUsize::new(0);
        static HOLDER: Singleton<Connection> = Singleton::new(|| {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            thread::yield_now();
            Ok(Connection { id: 7 })
        });

        let barrier = Arc::new(Barrier::new(THREADS));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    HOLDER.get_instance().unwrap() as *const Connection as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert!(addresses.iter().all(|&a| a == addresses[0]));
    }
}
