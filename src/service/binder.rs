// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-to-record binder.
//!
//! This module provides `EnvBinder`, which copies environment values onto a
//! record according to its field descriptors and then hands the populated record
//! to a rule engine for transformation and validation.

use crate::adapters::{ProcessEnv, StandardRuleEngine};
use crate::domain::{EnvRecord, Result};
use crate::ports::{EnvStore, RuleEngine};

/// Binds environment values onto a record and validates the result.
///
/// Binding runs in two sequential steps with no rollback between them:
///
/// 1. **Mapping**: each field descriptor with an environment key is looked up in
///    the store. A missing key, an empty value, or a field the record does not
///    expose is a defined skip, never an error; present, non-empty values
///    overwrite the field in place. This step cannot fail.
/// 2. **Validation**: the populated record and its descriptors go to the rule
///    engine, which applies declared transformations in place and evaluates
///    declared validators. A validation failure leaves the mapping step's writes
///    (and any transformations already applied) on the record.
///
/// # Examples
///
/// ```rust,no_run
/// use envbind::domain::{EnvRecord, FieldSpec};
/// use envbind::service::EnvBinder;
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
///     fn field(&self, name: &str) -> Option<&str> {
///         (name == "Host").then_some(self.host.as_str())
///     }
///     fn field_mut(&mut self, name: &str) -> Option<&mut String> {
///         (name == "Host").then_some(&mut self.host)
///     }
/// }
///
/// # fn main() -> envbind::domain::Result<()> {
/// let mut settings = Settings::default();
/// EnvBinder::new().bind_and_validate(&mut settings)?;
/// # Ok(())
/// # }
/// ```
pub struct EnvBinder {
    /// The store environment values are read from
    store: Box<dyn EnvStore>,
    /// The engine applied after mapping
    engine: Box<dyn RuleEngine>,
}

impl EnvBinder {
    /// Creates a binder over the process environment with the standard rules.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new binder builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::adapters::MemoryEnv;
    /// use envbind::service::EnvBinder;
    ///
    /// let binder = EnvBinder::builder().store(MemoryEnv::new()).build();
    /// ```
    pub fn builder() -> EnvBinderBuilder {
        EnvBinderBuilder::new()
    }

    /// Maps environment values onto the record, then validates it.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the record is populated and every field passed validation
    /// * `Err(EnvError::Validation)` - one or more fields failed; the record
    ///   keeps all mapped and transformed values
    /// * `Err(EnvError::UnknownRule)` / `Err(EnvError::InvalidRuleParam)` - a
    ///   descriptor declared a rule the engine cannot interpret
    pub fn bind_and_validate(&self, record: &mut dyn EnvRecord) -> Result<()> {
        self.map_env(record);

        let specs = record.field_specs();
        self.engine.apply(&specs, record)
    }

    /// Copies matching environment values into the record's fields.
    ///
    /// Iterates descriptors in field-declaration order. Skips are defined no-ops:
    /// a field with no environment key, a key that is unset or holds the empty
    /// string (the two are indistinguishable), or a field the record does not
    /// expose as a writable string.
    fn map_env(&self, record: &mut dyn EnvRecord) {
        for spec in record.field_specs() {
            let Some(key) = spec.env_key() else {
                continue;
            };

            let Some(value) = self.store.get(key) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            match record.field_mut(spec.name()) {
                Some(slot) => *slot = value,
                None => {
                    tracing::debug!(
                        "skipping non-writable field '{}' bound to '{}'",
                        spec.name(),
                        key
                    );
                }
            }
        }
    }
}

impl Default for EnvBinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`EnvBinder`].
///
/// Unset parts fall back to the defaults: the process environment and the
/// standard rule engine.
pub struct EnvBinderBuilder {
    store: Option<Box<dyn EnvStore>>,
    engine: Option<Box<dyn RuleEngine>>,
}

impl EnvBinderBuilder {
    /// Creates a builder with no parts configured.
    pub fn new() -> Self {
        EnvBinderBuilder {
            store: None,
            engine: None,
        }
    }

    /// Sets the environment store to read from.
    pub fn store(mut self, store: impl EnvStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Sets the rule engine to validate with.
    pub fn engine(mut self, engine: impl RuleEngine + 'static) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    /// Builds the binder, filling unset parts with defaults.
    pub fn build(self) -> EnvBinder {
        EnvBinder {
            store: self
                .store
                .unwrap_or_else(|| Box::new(ProcessEnv::new())),
            engine: self
                .engine
                .unwrap_or_else(|| Box::new(StandardRuleEngine::new())),
        }
    }
}

impl Default for EnvBinderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
