// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and business logic.
//!
//! This module contains the core domain types for the envbind crate. It is
//! independent of any external concerns and defines the fundamental concepts
//! used throughout the library: environment keys, field descriptors, the record
//! contract, and the error taxonomy.

pub mod env_key;
pub mod errors;
pub mod field;
pub mod record;

// Re-export commonly used types
pub use env_key::EnvKey;
pub use errors::{EnvError, FieldFailure, Result, ValidationFailures};
pub use field::{FieldSpec, RuleRef};
pub use record::EnvRecord;
