// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for dotenv-style configuration loading and
//! environment-to-record binding.
//!
//! This crate does two things, usable independently or in sequence: it loads
//! `KEY=VALUE` assignments from a plain-text file into the process environment,
//! and it populates a caller-supplied record from the environment using
//! per-field descriptors, applying declared validation and transformation rules
//! to the result.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`EnvKey`, `FieldSpec`, the `EnvRecord`
//!   contract, errors)
//! - **Ports**: Trait definitions that define interfaces (`EnvStore`,
//!   `RuleEngine`)
//! - **Adapters**: Implementations (process environment, in-memory store, the
//!   standard rule engine)
//! - **Service**: The loader and binder that orchestrate everything
//!
//! # File format
//!
//! One assignment per line, `KEY=VALUE`, split on the first `=`, with key and
//! value trimmed of surrounding whitespace. Empty lines and lines starting with
//! `#` are skipped. There is no quoting, no escaping, no multi-line values, and
//! no variable substitution; any other line without `=` is a fatal format
//! error. Loading is best-effort up to the first error: assignments already
//! applied stay applied.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envbind::domain::{EnvRecord, FieldSpec};
//! use envbind::{load_env_file, validate_env};
//!
//! #[derive(Default)]
//! struct Settings {
//!     host: String,
//!     admin_email: String,
//!     code: String,
//! }
//!
//! impl EnvRecord for Settings {
//!     fn field_specs(&self) -> Vec<FieldSpec> {
//!         vec![
//!             FieldSpec::new("Host")
//!                 .env("HOST")
//!                 .validators("required,minLength:3,maxLength:50"),
//!             FieldSpec::new("AdminEmail").env("ADMIN_EMAIL").validators("email"),
//!             FieldSpec::new("Code").env("CODE").transformers("uppercase"),
//!         ]
//!     }
//!
//!     fn field(&self, name: &str) -> Option<&str> {
//!         match name {
//!             "Host" => Some(&self.host),
//!             "AdminEmail" => Some(&self.admin_email),
//!             "Code" => Some(&self.code),
//!             _ => None,
//!         }
//!     }
//!
//!     fn field_mut(&mut self, name: &str) -> Option<&mut String> {
//!         match name {
//!             "Host" => Some(&mut self.host),
//!             "AdminEmail" => Some(&mut self.admin_email),
//!             "Code" => Some(&mut self.code),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # fn main() -> envbind::domain::Result<()> {
//! load_env_file(".env")?;
//!
//! let mut settings = Settings::default();
//! validate_env(&mut settings)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use std::path::Path;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{MemoryEnv, ProcessEnv, StandardRuleEngine};
    pub use crate::domain::{
        EnvError, EnvKey, EnvRecord, FieldFailure, FieldSpec, Result, ValidationFailures,
    };
    pub use crate::ports::{EnvStore, RuleEngine};
    pub use crate::service::{EnvBinder, EnvBinderBuilder, EnvFileLoader};
    pub use crate::{load_env_file, validate_env};
}

/// Loads `KEY=VALUE` assignments from the file at `path` into the process
/// environment.
///
/// This is the convenience entry point over [`service::EnvFileLoader`] with the
/// process environment store. See the loader for format and error details.
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> envbind::domain::Result<()> {
/// envbind::load_env_file(".env")?;
/// # Ok(())
/// # }
/// ```
pub fn load_env_file<P: AsRef<Path>>(path: P) -> domain::Result<()> {
    service::EnvFileLoader::new().load(path).map(|_| ())
}

/// Populates `record` from the process environment and validates it with the
/// standard rule engine.
///
/// This is the convenience entry point over [`service::EnvBinder`] with the
/// default store and engine. Mapping skips are defined no-ops; validation
/// failures surface as [`domain::EnvError::Validation`] with per-field
/// diagnostics.
pub fn validate_env(record: &mut dyn domain::EnvRecord) -> domain::Result<()> {
    service::EnvBinder::new().bind_and_validate(record)
}
