// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in validation/transformation rule engine.
//!
//! This module provides `StandardRuleEngine`, the default `RuleEngine`
//! implementation. It understands the stock rule vocabulary: `required`,
//! `minLength:N`, `maxLength:N` and `email` validators, and `uppercase`,
//! `lowercase` and `trim` transformers.

use crate::domain::{
    EnvError, EnvRecord, FieldFailure, FieldSpec, Result, RuleRef, ValidationFailures,
};
use crate::ports::RuleEngine;

/// The default rule engine.
///
/// For each field, in declaration order, the engine first applies the declared
/// transformations in place, then evaluates the declared validators against the
/// transformed value. Validation failures are collected across all fields into a
/// single aggregate; transformations already applied stay applied even when a
/// later field fails.
///
/// Length rules count characters, not bytes. The `email` rule is a shape check:
/// a non-empty local part, an `@`, and a domain part containing a `.`.
///
/// # Examples
///
/// ```
/// use envbind::adapters::StandardRuleEngine;
/// use envbind::ports::RuleEngine;
/// use envbind::domain::{EnvRecord, FieldSpec};
///
/// #[derive(Default)]
/// struct Rec {
///     code: String,
/// }
///
/// impl EnvRecord for Rec {
///     fn field_specs(&self) -> Vec<FieldSpec> {
///         vec![FieldSpec::new("Code").transformers("uppercase")]
///     }
///     fn field(&self, name: &str) -> Option<&str> {
///         (name == "Code").then_some(self.code.as_str())
///     }
///     fn field_mut(&mut self, name: &str) -> Option<&mut String> {
///         (name == "Code").then_some(&mut self.code)
///     }
/// }
///
/// let mut rec = Rec { code: "abc".to_string() };
/// let specs = rec.field_specs();
/// StandardRuleEngine::new().apply(&specs, &mut rec).unwrap();
/// assert_eq!(rec.code, "ABC");
/// ```
#[derive(Debug, Default, Clone)]
pub struct StandardRuleEngine;

impl StandardRuleEngine {
    /// Creates a new standard rule engine.
    pub fn new() -> Self {
        StandardRuleEngine
    }

    /// Applies one declared transformation to a value.
    fn transform(field: &str, name: &str, value: &str) -> Result<String> {
        match name {
            "uppercase" => Ok(value.to_uppercase()),
            "lowercase" => Ok(value.to_lowercase()),
            "trim" => Ok(value.trim().to_string()),
            _ => Err(EnvError::UnknownRule {
                field: field.to_string(),
                rule: name.to_string(),
            }),
        }
    }

    /// Parses a required numeric rule parameter.
    fn length_param(field: &str, rule: &RuleRef) -> Result<usize> {
        let param = rule.param.as_deref().unwrap_or("");
        param.parse::<usize>().map_err(|_| EnvError::InvalidRuleParam {
            field: field.to_string(),
            rule: rule.name.clone(),
            param: param.to_string(),
        })
    }

    /// Evaluates one validator against a value.
    ///
    /// Returns `Ok(Some(failure))` when the value is rejected, `Ok(None)` when it
    /// passes, and `Err` for structural problems with the rule itself.
    fn check(field: &str, rule: &RuleRef, value: &str) -> Result<Option<FieldFailure>> {
        let failure = match rule.name.as_str() {
            "required" => value.is_empty().then(|| "value is empty".to_string()),
            "minLength" => {
                let min = Self::length_param(field, rule)?;
                let count = value.chars().count();
                (count < min)
                    .then(|| format!("value is {} characters, minimum is {}", count, min))
            }
            "maxLength" => {
                let max = Self::length_param(field, rule)?;
                let count = value.chars().count();
                (count > max)
                    .then(|| format!("value is {} characters, maximum is {}", count, max))
            }
            "email" => {
                let valid = value
                    .split_once('@')
                    .map(|(local, domain)| {
                        !local.is_empty() && !domain.is_empty() && domain.contains('.')
                    })
                    .unwrap_or(false);
                (!valid).then(|| "not a valid email address".to_string())
            }
            _ => {
                return Err(EnvError::UnknownRule {
                    field: field.to_string(),
                    rule: rule.name.clone(),
                })
            }
        };

        Ok(failure.map(|reason| FieldFailure {
            field: field.to_string(),
            rule: rule.name.clone(),
            reason,
        }))
    }
}

impl RuleEngine for StandardRuleEngine {
    fn apply(&self, specs: &[FieldSpec], record: &mut dyn EnvRecord) -> Result<()> {
        let mut failures = ValidationFailures::default();

        for spec in specs {
            for name in spec.transformers_ref() {
                // A field the record does not expose is skipped, but an unknown
                // transformer is still a structural error.
                match record.field_mut(spec.name()) {
                    Some(slot) => {
                        let transformed = Self::transform(spec.name(), name, slot)?;
                        *slot = transformed;
                    }
                    None => {
                        Self::transform(spec.name(), name, "")?;
                        tracing::debug!(
                            "skipping transformer '{}' on non-writable field '{}'",
                            name,
                            spec.name()
                        );
                    }
                }
            }

            let value = record.field(spec.name()).unwrap_or("").to_string();
            for rule in spec.validators_ref() {
                if let Some(failure) = Self::check(spec.name(), rule, &value)? {
                    failures.push(failure);
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(EnvError::Validation(failures))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Settings {
        host: String,
        admin_email: String,
        code: String,
    }

    impl Settings {
        fn specs(&self) -> Vec<FieldSpec> {
            self.field_specs()
        }
    }

    impl EnvRecord for Settings {
        fn field_specs(&self) -> Vec<FieldSpec> {
            vec![
                FieldSpec::new("Host")
                    .env("HOST")
                    .validators("required,minLength:3,maxLength:50"),
                FieldSpec::new("AdminEmail").env("ADMIN_EMAIL").validators("email"),
                FieldSpec::new("Code").env("CODE").transformers("uppercase"),
            ]
        }

        fn field(&self, name: &str) -> Option<&str> {
            match name {
                "Host" => Some(&self.host),
                "AdminEmail" => Some(&self.admin_email),
                "Code" => Some(&self.code),
                _ => None,
            }
        }

        fn field_mut(&mut self, name: &str) -> Option<&mut String> {
            match name {
                "Host" => Some(&mut self.host),
                "AdminEmail" => Some(&mut self.admin_email),
                "Code" => Some(&mut self.code),
                _ => None,
            }
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let mut record = Settings {
            host: "example.com".to_string(),
            admin_email: "admin@example.com".to_string(),
            code: "abc".to_string(),
        };
        let specs = record.specs();

        StandardRuleEngine::new().apply(&specs, &mut record).unwrap();
        assert_eq!(record.code, "ABC");
    }

    #[test]
    fn test_required_fails_on_empty() {
        let mut record = Settings {
            admin_email: "admin@example.com".to_string(),
            ..Default::default()
        };
        let specs = record.specs();

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        match err {
            EnvError::Validation(failures) => {
                assert!(failures
                    .iter()
                    .any(|f| f.field == "Host" && f.rule == "required"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_min_length_rejects_short_value() {
        let mut record = Settings {
            host: "ex".to_string(),
            admin_email: "admin@example.com".to_string(),
            ..Default::default()
        };
        let specs = record.specs();

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        match err {
            EnvError::Validation(failures) => {
                assert!(failures
                    .iter()
                    .any(|f| f.field == "Host" && f.rule == "minLength"));
                // required passed, so it must not appear in the aggregate
                assert!(!failures.iter().any(|f| f.rule == "required"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_max_length_rejects_long_value() {
        let mut record = Settings {
            host: "a".repeat(51),
            admin_email: "admin@example.com".to_string(),
            ..Default::default()
        };
        let specs = record.specs();

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        match err {
            EnvError::Validation(failures) => {
                assert!(failures
                    .iter()
                    .any(|f| f.field == "Host" && f.rule == "maxLength"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_length_bounds_accept_boundary_values() {
        let engine = StandardRuleEngine::new();

        let mut record = Settings {
            host: "abc".to_string(),
            admin_email: "admin@example.com".to_string(),
            ..Default::default()
        };
        let specs = record.specs();
        engine.apply(&specs, &mut record).unwrap();

        record.host = "a".repeat(50);
        engine.apply(&specs, &mut record).unwrap();
    }

    #[test]
    fn test_email_rejects_missing_domain() {
        let mut record = Settings {
            host: "example.com".to_string(),
            admin_email: "admin@".to_string(),
            ..Default::default()
        };
        let specs = record.specs();

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        match err {
            EnvError::Validation(failures) => {
                assert!(failures
                    .iter()
                    .any(|f| f.field == "AdminEmail" && f.rule == "email"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_email_rejects_missing_at_sign() {
        let failure = StandardRuleEngine::check(
            "AdminEmail",
            &FieldSpec::new("x").validators("email").validators_ref()[0].clone(),
            "admin.example.com",
        )
        .unwrap();
        assert!(failure.is_some());
    }

    #[test]
    fn test_failures_aggregate_across_fields() {
        let mut record = Settings {
            host: String::new(),
            admin_email: "admin@".to_string(),
            ..Default::default()
        };
        let specs = record.specs();

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        match err {
            EnvError::Validation(failures) => {
                // empty host fails required and minLength; bad email fails email
                assert!(failures.len() >= 3);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_transform_applied_before_later_field_fails() {
        let mut record = Settings {
            host: "example.com".to_string(),
            admin_email: "admin@".to_string(),
            code: "abc".to_string(),
        };
        // Code is declared after AdminEmail, but transforms still land in place.
        let specs = record.specs();

        let result = StandardRuleEngine::new().apply(&specs, &mut record);
        assert!(result.is_err());
        assert_eq!(record.code, "ABC");
    }

    #[test]
    fn test_lowercase_and_trim_transformers() {
        let mut record = Settings {
            host: "example.com".to_string(),
            admin_email: "admin@example.com".to_string(),
            code: "  LOUD  ".to_string(),
        };
        let specs = vec![FieldSpec::new("Code").transformers("trim,lowercase")];

        StandardRuleEngine::new().apply(&specs, &mut record).unwrap();
        assert_eq!(record.code, "loud");
    }

    #[test]
    fn test_unknown_validator_is_structural_error() {
        let mut record = Settings::default();
        let specs = vec![FieldSpec::new("Host").validators("sparkles")];

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        assert!(matches!(err, EnvError::UnknownRule { .. }));
    }

    #[test]
    fn test_unknown_transformer_is_structural_error() {
        let mut record = Settings::default();
        let specs = vec![FieldSpec::new("Code").transformers("rot13")];

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        assert!(matches!(err, EnvError::UnknownRule { .. }));
    }

    #[test]
    fn test_bad_length_param_is_structural_error() {
        let mut record = Settings::default();
        let specs = vec![FieldSpec::new("Host").validators("minLength:abc")];

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        assert!(matches!(err, EnvError::InvalidRuleParam { .. }));
    }

    #[test]
    fn test_missing_length_param_is_structural_error() {
        let mut record = Settings::default();
        let specs = vec![FieldSpec::new("Host").validators("minLength")];

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        assert!(matches!(err, EnvError::InvalidRuleParam { .. }));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut record = Settings {
            host: "héllo".to_string(),
            admin_email: "admin@example.com".to_string(),
            ..Default::default()
        };
        let specs = vec![FieldSpec::new("Host").validators("minLength:5,maxLength:5")];

        StandardRuleEngine::new().apply(&specs, &mut record).unwrap();
    }

    #[test]
    fn test_validator_on_unknown_field_sees_empty_value() {
        let mut record = Settings::default();
        let specs = vec![FieldSpec::new("Ghost").validators("required")];

        let err = StandardRuleEngine::new()
            .apply(&specs, &mut record)
            .unwrap_err();
        assert!(matches!(err, EnvError::Validation(_)));
    }
}
