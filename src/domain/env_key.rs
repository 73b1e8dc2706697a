// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable name newtype for type-safe key handling.
//!
//! This module provides the `EnvKey` type, a newtype wrapper around `String` that
//! keeps environment variable names distinct from ordinary strings and knows which
//! names a platform environment can represent.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for environment variable names.
///
/// `EnvKey` is a newtype that wraps a `String` to provide type safety when working
/// with environment variable names. Lookups are case-sensitive and exact; the type
/// performs no normalization.
///
/// # Examples
///
/// ```
/// use envbind::domain::env_key::EnvKey;
///
/// let key = EnvKey::from("DATABASE_HOST");
/// let key2 = EnvKey::from("DATABASE_PORT".to_string());
///
/// assert_eq!(key.as_str(), "DATABASE_HOST");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvKey(String);

impl EnvKey {
    /// Creates a new `EnvKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::domain::env_key::EnvKey;
    ///
    /// let key = EnvKey::new("APP_NAME".to_string());
    /// assert_eq!(key.as_str(), "APP_NAME");
    /// ```
    pub fn new(key: String) -> Self {
        EnvKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `EnvKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Checks whether a process environment can represent this key.
    ///
    /// Platform environments reject an empty key, a key containing `=`, and a
    /// key containing NUL; `std::env::set_var` panics on all three. Store
    /// adapters call this before writing and surface the returned message as a
    /// `SetVar` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::domain::env_key::EnvKey;
    ///
    /// assert!(EnvKey::from("DATABASE_HOST").check_platform_safe().is_ok());
    /// assert!(EnvKey::from("BAD=KEY").check_platform_safe().is_err());
    /// ```
    pub fn check_platform_safe(&self) -> std::result::Result<(), &'static str> {
        if self.0.is_empty() {
            return Err("key must not be empty");
        }
        if self.0.contains('=') {
            return Err("key must not contain '='");
        }
        if self.0.contains('\0') {
            return Err("key must not contain NUL");
        }
        Ok(())
    }
}

impl From<String> for EnvKey {
    fn from(s: String) -> Self {
        EnvKey(s)
    }
}

impl From<&str> for EnvKey {
    fn from(s: &str) -> Self {
        EnvKey(s.to_string())
    }
}

impl From<EnvKey> for String {
    fn from(key: EnvKey) -> Self {
        key.0
    }
}

impl AsRef<str> for EnvKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for EnvKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
