//! Core traits for the rule engine
//!
//! This module defines the trait every rule implements and the extension
//! trait carrying the locale-binding adapter.

use std::sync::Arc;

use serde_json::Value;

use crate::combinators::Localized;
use crate::foundation::{ErrorList, FieldSpec};
use crate::messages::{CatalogOverrides, MessageCatalog};

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The trait all rules implement.
///
/// A rule checks one value against one [`FieldSpec`]. The owning record
/// (`model`) is passed along for rules that compare fields with each other;
/// none of the built-in rules read it.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::foundation::{ErrorList, FieldRule, FieldSpec};
/// use formcheck::messages::{MessageCatalog, MessageKey};
/// use serde_json::Value;
///
/// struct MatchesPassword;
///
/// impl FieldRule for MatchesPassword {
///     fn validate_with(
///         &self,
///         value: &Value,
///         _field: &FieldSpec,
///         model: &Value,
///         catalog: &MessageCatalog,
///     ) -> ErrorList {
///         if model.get("password") == Some(value) {
///             ErrorList::new()
///         } else {
///             ErrorList::single(catalog.error(MessageKey::InvalidFormat, &[]))
///         }
///     }
/// }
/// ```
pub trait FieldRule: Send + Sync {
    /// Validates `value`, rendering messages from `catalog`.
    fn validate_with(
        &self,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
        catalog: &MessageCatalog,
    ) -> ErrorList;

    /// Validates `value` with the default catalog.
    fn validate(&self, value: &Value, field: &FieldSpec, model: &Value) -> ErrorList {
        self.validate_with(value, field, model, MessageCatalog::default_catalog())
    }
}

impl<R: FieldRule + ?Sized> FieldRule for &R {
    fn validate_with(
        &self,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
        catalog: &MessageCatalog,
    ) -> ErrorList {
        (**self).validate_with(value, field, model, catalog)
    }

    fn validate(&self, value: &Value, field: &FieldSpec, model: &Value) -> ErrorList {
        (**self).validate(value, field, model)
    }
}

impl<R: FieldRule + ?Sized> FieldRule for Arc<R> {
    fn validate_with(
        &self,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
        catalog: &MessageCatalog,
    ) -> ErrorList {
        (**self).validate_with(value, field, model, catalog)
    }

    fn validate(&self, value: &Value, field: &FieldSpec, model: &Value) -> ErrorList {
        (**self).validate(value, field, model)
    }
}

impl<R: FieldRule + ?Sized> FieldRule for Box<R> {
    fn validate_with(
        &self,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
        catalog: &MessageCatalog,
    ) -> ErrorList {
        (**self).validate_with(value, field, model, catalog)
    }

    fn validate(&self, value: &Value, field: &FieldSpec, model: &Value) -> ErrorList {
        (**self).validate(value, field, model)
    }
}

// ============================================================================
// CLOSURE RULES
// ============================================================================

/// Adapts a plain function or closure with the rule signature into a
/// [`FieldRule`].
#[derive(Clone)]
pub struct FnRule<F> {
    f: F,
}

impl<F> FieldRule for FnRule<F>
where
    F: Fn(&Value, &FieldSpec, &Value, &MessageCatalog) -> ErrorList + Send + Sync,
{
    fn validate_with(
        &self,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
        catalog: &MessageCatalog,
    ) -> ErrorList {
        (self.f)(value, field, model, catalog)
    }
}

impl<F> std::fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}

/// Wraps a function or closure as a rule.
///
/// ```rust,ignore
/// let even = rule_fn(|value, _field, _model, catalog| match value.as_i64() {
///     Some(n) if n % 2 == 0 => ErrorList::new(),
///     _ => ErrorList::single(catalog.error(MessageKey::InvalidNumber, &[])),
/// });
/// ```
pub fn rule_fn<F>(f: F) -> FnRule<F>
where
    F: Fn(&Value, &FieldSpec, &Value, &MessageCatalog) -> ErrorList + Send + Sync,
{
    FnRule { f }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing adapter methods for rules.
///
/// Automatically implemented for every [`FieldRule`].
pub trait FieldRuleExt: FieldRule + Sized {
    /// Binds the rule to a custom catalog merged over the default one.
    ///
    /// The returned rule renders overridden keys from `overrides` and every
    /// other key from the default catalog. `self` is consumed; bind a
    /// reference (`(&rule).locale(..)`) or a copy to keep the unbound rule.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use formcheck::prelude::*;
    ///
    /// let english = Rule::Email.locale(
    ///     CatalogOverrides::new().with(MessageKey::InvalidEmail, "Invalid e-mail address"),
    /// );
    /// let errors = english.validate(&json!("nope"), &FieldSpec::new(), &json!({}));
    /// assert_eq!(errors.to_messages(), ["Invalid e-mail address"]);
    /// ```
    fn locale(self, overrides: CatalogOverrides) -> Localized<Self> {
        Localized::new(self, overrides)
    }
}

impl<T: FieldRule> FieldRuleExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageKey;
    use serde_json::json;

    #[test]
    fn test_rule_fn_reads_model() {
        let confirm = rule_fn(|value: &Value, _: &FieldSpec, model: &Value, catalog: &MessageCatalog| {
            if model.get("password") == Some(value) {
                ErrorList::new()
            } else {
                ErrorList::single(catalog.error(MessageKey::InvalidFormat, &[]))
            }
        });
        let model = json!({ "password": "s3cret" });

        assert!(confirm.validate(&json!("s3cret"), &FieldSpec::new(), &model).is_valid());
        assert_eq!(
            confirm
                .validate(&json!("other"), &FieldSpec::new(), &model)
                .to_messages(),
            ["Format invalide"]
        );
    }

    #[test]
    fn test_smart_pointers_delegate() {
        let rule: Arc<dyn FieldRule> = Arc::new(rule_fn(
            |_: &Value, _: &FieldSpec, _: &Value, catalog: &MessageCatalog| {
                ErrorList::single(catalog.error(MessageKey::InvalidDate, &[]))
            },
        ));
        let boxed: Box<dyn FieldRule> = Box::new(Arc::clone(&rule));

        assert_eq!(
            boxed.validate(&Value::Null, &FieldSpec::new(), &Value::Null).to_messages(),
            ["Date invalide"]
        );
    }
}
