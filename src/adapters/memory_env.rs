// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment store adapter.
//!
//! This module provides an `EnvStore` implementation over a plain map. It exists
//! so tests (and callers who want isolation) can run the loader and binder
//! without mutating real process state, avoiding cross-test interference.

use crate::domain::{EnvKey, Result};
use crate::ports::EnvStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// Environment store backed by an in-memory map.
///
/// Behaves like the process environment from the pipeline's point of view:
/// entries are added or overwritten, never deleted, and repeated loads are
/// cumulative. Unlike the process environment it accepts any key, so assignments
/// never fail.
///
/// # Examples
///
/// ```
/// use envbind::adapters::MemoryEnv;
/// use envbind::ports::EnvStore;
///
/// let store = MemoryEnv::new();
/// store.set(&"HOST".into(), "example.com").unwrap();
/// assert_eq!(store.get_str("HOST").as_deref(), Some("example.com"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnv {
    /// The backing map, behind a lock so the store can be shared
    values: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        MemoryEnv {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store pre-populated with the given values.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::adapters::MemoryEnv;
    /// use envbind::ports::EnvStore;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("HOST".to_string(), "example.com".to_string());
    ///
    /// let store = MemoryEnv::with_values(values);
    /// assert_eq!(store.get_str("HOST").as_deref(), Some("example.com"));
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        MemoryEnv {
            values: RwLock::new(values),
        }
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.values.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvStore for MemoryEnv {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &EnvKey) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key.as_str())
            .cloned()
    }

    fn set(&self, key: &EnvKey, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.as_str().to_string(), value.to_string());
        Ok(())
    }
}
