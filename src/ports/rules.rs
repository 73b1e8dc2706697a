// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule engine trait definition.
//!
//! This module defines the `RuleEngine` trait, the port representing the external
//! validation/transformation capability. The binder hands a fully mapped record
//! and its descriptors to the engine; any compliant engine satisfies the
//! contract, and the crate ships [`StandardRuleEngine`] as the default.
//!
//! [`StandardRuleEngine`]: crate::adapters::StandardRuleEngine

use crate::domain::{EnvRecord, FieldSpec, Result};

/// A validation/transformation engine applied to a mapped record.
///
/// The engine walks the descriptors in field-declaration order. For each field it
/// applies the declared transformations in place, then evaluates the declared
/// validators against the transformed value. Failures are collected across all
/// fields and returned as a single `EnvError::Validation` aggregate, so a caller
/// sees every data-quality problem at once. Transformations already applied stay
/// applied even when a later field fails.
///
/// Structural problems (an unknown rule name, an uninterpretable parameter) abort
/// immediately with their own error variants instead of joining the aggregate.
///
/// # Examples
///
/// ```
/// use envbind::ports::RuleEngine;
/// use envbind::domain::{EnvRecord, FieldSpec, Result};
///
/// /// An engine that accepts everything unchanged.
/// struct AcceptAll;
///
/// impl RuleEngine for AcceptAll {
///     fn apply(&self, _specs: &[FieldSpec], _record: &mut dyn EnvRecord) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait RuleEngine: Send + Sync {
    /// Transforms and validates the record against its field descriptors.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - every field passed validation
    /// * `Err(EnvError::Validation)` - one or more fields failed; the aggregate
    ///   carries (field, rule, reason) for each failure
    /// * `Err(EnvError::UnknownRule)` / `Err(EnvError::InvalidRuleParam)` - a
    ///   descriptor referenced a rule the engine cannot interpret
    fn apply(&self, specs: &[FieldSpec], record: &mut dyn EnvRecord) -> Result<()>;
}
