// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the envbind crate.
//!
//! This module defines the error types that can occur when loading an env file or
//! binding environment values onto a record. All errors use `thiserror` for proper
//! error handling and conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single field-level validation failure.
///
/// Carries the field name, the rule that rejected the value, and a human-readable
/// reason. Failures are aggregated into [`ValidationFailures`] rather than aborting
/// at the first rejected field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    /// The name of the record field that failed.
    pub field: String,
    /// The name of the rule that rejected the value.
    pub rule: String,
    /// A human-readable reason for the failure.
    pub reason: String,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.field, self.rule, self.reason)
    }
}

/// An aggregate of field-level validation failures.
///
/// Produced by a rule engine when one or more fields fail validation. The
/// aggregate preserves field-declaration order.
///
/// # Examples
///
/// ```
/// use envbind::domain::errors::{FieldFailure, ValidationFailures};
///
/// let mut failures = ValidationFailures::default();
/// failures.push(FieldFailure {
///     field: "Host".to_string(),
///     rule: "required".to_string(),
///     reason: "value is empty".to_string(),
/// });
/// assert_eq!(failures.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailures(Vec<FieldFailure>);

impl ValidationFailures {
    /// Adds a failure to the aggregate.
    pub fn push(&mut self, failure: FieldFailure) {
        self.0.push(failure);
    }

    /// Returns `true` if no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failed field/rule pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the individual failures in field-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldFailure> {
        self.0.iter()
    }

    /// Consumes the aggregate and returns the underlying failures.
    pub fn into_vec(self) -> Vec<FieldFailure> {
        self.0
    }
}

impl fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for failure in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", failure)?;
            first = false;
        }
        Ok(())
    }
}

/// The main error type for env loading and binding operations.
///
/// This enum represents all possible errors that can occur when loading an env
/// file into a store or binding environment values onto a record. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking backwards
/// compatibility.
///
/// Errors carry the context of the stage that produced them: loader errors name
/// the offending path (and line, where applicable), while binder errors are
/// validation-stage failures. Per-field mapping skips are defined no-ops and never
/// surface here.
///
/// # Examples
///
/// ```
/// use envbind::domain::errors::EnvError;
///
/// fn set_key() -> Result<(), EnvError> {
///     Err(EnvError::SetVar {
///         key: "BAD=KEY".to_string(),
///         message: "key must not contain '='".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// The env file could not be opened.
    #[error("failed to open env file '{}': {source}", .path.display())]
    FileOpen {
        /// The path that could not be opened
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A non-empty, non-comment line did not contain a `=` separator.
    #[error("bad line format in '{}' at line {line}: {content}", .path.display())]
    BadLine {
        /// The file containing the malformed line
        path: PathBuf,
        /// The 1-based line number
        line: usize,
        /// The raw offending line
        content: String,
    },

    /// The environment store rejected an assignment.
    #[error("failed to set environment variable '{key}': {message}")]
    SetVar {
        /// The key being assigned
        key: String,
        /// Why the store rejected the assignment
        message: String,
    },

    /// An I/O error occurred while scanning the env file.
    #[error("error reading env file '{}': {source}", .path.display())]
    FileRead {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A field declared a validator or transformer the rule engine does not know.
    #[error("validation error: unknown rule '{rule}' on field '{field}'")]
    UnknownRule {
        /// The field declaring the rule
        field: String,
        /// The unrecognized rule name
        rule: String,
    },

    /// A rule parameter could not be interpreted (e.g. `minLength:abc`).
    #[error("validation error: invalid parameter '{param}' for rule '{rule}' on field '{field}'")]
    InvalidRuleParam {
        /// The field declaring the rule
        field: String,
        /// The rule whose parameter is invalid
        rule: String,
        /// The parameter text as declared
        param: String,
    },

    /// One or more fields failed validation.
    #[error("validation failed: {0}")]
    Validation(ValidationFailures),
}

/// A specialized Result type for env loading and binding operations.
pub type Result<T> = std::result::Result<T, EnvError>;
