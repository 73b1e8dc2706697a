// SPDX-License-Identifier: MIT OR Apache-2.0

//! The record trait implemented by bindable configuration structs.
//!
//! This module defines the `EnvRecord` trait, the contract between a caller-owned
//! struct and the binder. Implementations describe their bindable fields with a
//! descriptor list and expose string fields by name for in-place writes, replacing
//! the runtime reflection a tag-based design would need.

use crate::domain::FieldSpec;

/// A caller-owned record whose string fields can be bound from the environment.
///
/// Implementations return one [`FieldSpec`] per participating field, in field
/// declaration order, and expose each field's storage by name. Only string fields
/// are bindable; a field the record does not expose through [`field_mut`] is
/// silently skipped by the mapping step.
///
/// [`field_mut`]: EnvRecord::field_mut
///
/// # Examples
///
/// ```
/// use envbind::domain::{EnvRecord, FieldSpec};
///
/// #[derive(Default)]
/// struct Settings {
///     host: String,
/// }
///
/// impl EnvRecord for Settings {
///     fn field_specs(&self) -> Vec<FieldSpec> {
///         vec![FieldSpec::new("Host").env("HOST").validators("required")]
///     }
///
///     fn field(&self, name: &str) -> Option<&str> {
///         match name {
///             "Host" => Some(&self.host),
///             _ => None,
///         }
///     }
///
///     fn field_mut(&mut self, name: &str) -> Option<&mut String> {
///         match name {
///             "Host" => Some(&mut self.host),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait EnvRecord {
    /// Returns the field descriptors in field-declaration order.
    fn field_specs(&self) -> Vec<FieldSpec>;

    /// Returns the current value of the named field, if the record exposes it.
    fn field(&self, name: &str) -> Option<&str>;

    /// Returns mutable access to the named string field, if the record exposes it.
    ///
    /// Returning `None` marks the field as not writable; both the mapping step and
    /// the rule engine's transformations treat that as a skip, not an error.
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;
}
