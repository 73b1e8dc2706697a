// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment store adapter.
//!
//! This module provides an `EnvStore` implementation backed by the real process
//! environment. Assignments that the platform cannot represent are rejected with
//! a `SetVar` error instead of panicking.

use crate::domain::{EnvError, EnvKey, Result};
use crate::ports::EnvStore;
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Serializes mutations of the process environment, which is not thread-safe.
static ENV_WRITE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Environment store backed by the process environment.
///
/// Reads go through `std::env::var` and writes through `std::env::set_var`, so
/// entries written here are visible to the whole process, including child
/// processes spawned afterwards. Repeated loads are cumulative and last-write-wins
/// per key; nothing is ever deleted.
///
/// `std::env::set_var` panics on keys the platform cannot represent, so this
/// adapter validates keys and values first and surfaces a `SetVar` error for
/// anything the platform would reject.
///
/// # Examples
///
/// ```
/// use envbind::adapters::ProcessEnv;
/// use envbind::ports::EnvStore;
///
/// let store = ProcessEnv::new();
/// store.set(&"ENVBIND_DOC_EXAMPLE".into(), "1").unwrap();
/// assert_eq!(store.get_str("ENVBIND_DOC_EXAMPLE").as_deref(), Some("1"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Creates a new process environment store.
    pub fn new() -> Self {
        ProcessEnv
    }

    /// Checks that the platform can represent the assignment.
    fn check_assignment(key: &EnvKey, value: &str) -> Result<()> {
        if let Err(message) = key.check_platform_safe() {
            return Err(EnvError::SetVar {
                key: key.as_str().to_string(),
                message: message.to_string(),
            });
        }
        if value.contains('\0') {
            return Err(EnvError::SetVar {
                key: key.as_str().to_string(),
                message: "value must not contain NUL".to_string(),
            });
        }
        Ok(())
    }
}

impl EnvStore for ProcessEnv {
    fn name(&self) -> &str {
        "process-env"
    }

    fn get(&self, key: &EnvKey) -> Option<String> {
        env::var(key.as_str()).ok()
    }

    fn set(&self, key: &EnvKey, value: &str) -> Result<()> {
        Self::check_assignment(key, value)?;

        let _guard = ENV_WRITE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var(key.as_str(), value);
        Ok(())
    }
}
