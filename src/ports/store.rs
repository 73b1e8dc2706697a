// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment store trait definition.
//!
//! This module defines the `EnvStore` trait, the port through which both the file
//! loader and the binder touch environment state. The process environment is one
//! implementation; tests substitute an isolated in-memory store so loading never
//! leaks across test boundaries.

use crate::domain::{EnvKey, Result};

/// A mutable key-to-string environment store.
///
/// The store models the process environment's contract: entries are added or
/// overwritten, never deleted, and a lookup either finds a value or it doesn't.
/// Writers abort on the first rejected assignment; the store decides what it
/// rejects (the process environment, for instance, cannot hold a key containing
/// `=`).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. That makes a store safe to share, but
/// the crate imposes no locking discipline across loads; callers are expected to
/// serialize configuration loading, typically once at process start.
///
/// # Examples
///
/// ```
/// use envbind::ports::EnvStore;
/// use envbind::domain::{EnvKey, Result};
///
/// struct FixedStore;
///
/// impl EnvStore for FixedStore {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &EnvKey) -> Option<String> {
///         (key.as_str() == "HOST").then(|| "example.com".to_string())
///     }
///
///     fn set(&self, _key: &EnvKey, _value: &str) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let store = FixedStore;
/// assert_eq!(store.get_str("HOST").as_deref(), Some("example.com"));
/// ```
pub trait EnvStore: Send + Sync {
    /// Returns the name of this store.
    ///
    /// Used for logging and error messages. It should be a short identifier like
    /// "process-env" or "memory".
    fn name(&self) -> &str;

    /// Looks up the value for the given key.
    ///
    /// Returns `None` when the key is not present. An entry set to the empty
    /// string is returned as `Some("")`; callers that treat empty as absent (the
    /// binder does) apply that policy themselves.
    fn get(&self, key: &EnvKey) -> Option<String>;

    /// Sets the key to the value, overwriting any prior entry.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The assignment was applied
    /// * `Err(EnvError::SetVar)` - The store rejected the assignment
    fn set(&self, key: &EnvKey, value: &str) -> Result<()>;

    /// Looks up the value for the given key string.
    ///
    /// This is a convenience method equivalent to `get(&EnvKey::from(key))`.
    fn get_str(&self, key: &str) -> Option<String> {
        self.get(&EnvKey::from(key))
    }
}

impl<T: EnvStore + ?Sized> EnvStore for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &EnvKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &EnvKey, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
