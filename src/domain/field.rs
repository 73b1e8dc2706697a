// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field descriptors for environment-to-record binding.
//!
//! This module provides the `FieldSpec` type, the static replacement for runtime
//! tag reflection: each record field that participates in binding is described
//! once by a descriptor naming the field, its environment key, and the validation
//! and transformation rules declared for it.

use crate::domain::EnvKey;

/// A reference to a named rule, with an optional parameter.
///
/// Rule tags use the `name` or `name:param` form, so `minLength:3` parses into a
/// `RuleRef` with name `minLength` and parameter `3`. Parameters are kept as text;
/// interpretation belongs to the rule engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleRef {
    /// The rule name (e.g. `required`, `minLength`).
    pub name: String,
    /// The parameter, if the tag carried one.
    pub param: Option<String>,
}

impl RuleRef {
    /// Parses a single `name` or `name:param` tag element.
    fn parse(element: &str) -> Self {
        match element.split_once(':') {
            Some((name, param)) => RuleRef {
                name: name.trim().to_string(),
                param: Some(param.trim().to_string()),
            },
            None => RuleRef {
                name: element.trim().to_string(),
                param: None,
            },
        }
    }
}

/// Parses a comma-delimited rule tag into rule references.
///
/// Empty elements are dropped, so a tag of `""` yields no rules.
fn parse_rule_tag(tag: &str) -> Vec<RuleRef> {
    tag.split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(RuleRef::parse)
        .collect()
}

/// A descriptor for one bindable record field.
///
/// A `FieldSpec` names a record field and carries the metadata the binder and rule
/// engine need: the environment key to look up (optional; a field without one is
/// never written by the mapping step), the validators to apply, and the
/// transformations to apply before validation.
///
/// # Examples
///
/// ```
/// use envbind::domain::field::FieldSpec;
///
/// let spec = FieldSpec::new("Host")
///     .env("HOST")
///     .validators("required,minLength:3,maxLength:50");
///
/// assert_eq!(spec.name(), "Host");
/// assert_eq!(spec.env_key().unwrap().as_str(), "HOST");
/// assert_eq!(spec.validators_ref().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// The record field name
    name: String,
    /// The environment key bound to this field, if any
    env_key: Option<EnvKey>,
    /// Declared validation rules, in declaration order
    validators: Vec<RuleRef>,
    /// Declared transformation names, in declaration order
    transformers: Vec<String>,
}

impl FieldSpec {
    /// Creates a descriptor for the named field with no binding and no rules.
    pub fn new(name: impl Into<String>) -> Self {
        FieldSpec {
            name: name.into(),
            env_key: None,
            validators: Vec::new(),
            transformers: Vec::new(),
        }
    }

    /// Sets the environment key this field binds to.
    ///
    /// An empty key is treated as no binding, matching the tag semantics where an
    /// absent and an empty binding name are equivalent.
    pub fn env(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.env_key = if key.is_empty() {
            None
        } else {
            Some(EnvKey::from(key))
        };
        self
    }

    /// Declares validation rules from a comma-delimited tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::domain::field::FieldSpec;
    ///
    /// let spec = FieldSpec::new("AdminEmail").env("ADMIN_EMAIL").validators("email");
    /// assert_eq!(spec.validators_ref()[0].name, "email");
    /// ```
    pub fn validators(mut self, tag: &str) -> Self {
        self.validators = parse_rule_tag(tag);
        self
    }

    /// Declares transformations from a comma-delimited tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::domain::field::FieldSpec;
    ///
    /// let spec = FieldSpec::new("Code").env("CODE").transformers("uppercase");
    /// assert_eq!(spec.transformers_ref(), &["uppercase".to_string()]);
    /// ```
    pub fn transformers(mut self, tag: &str) -> Self {
        self.transformers = tag
            .split(',')
            .map(str::trim)
            .filter(|element| !element.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    /// Returns the record field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the environment key this field binds to, if any.
    pub fn env_key(&self) -> Option<&EnvKey> {
        self.env_key.as_ref()
    }

    /// Returns the declared validation rules in declaration order.
    pub fn validators_ref(&self) -> &[RuleRef] {
        &self.validators
    }

    /// Returns the declared transformation names in declaration order.
    pub fn transformers_ref(&self) -> &[String] {
        &self.transformers
    }
}
