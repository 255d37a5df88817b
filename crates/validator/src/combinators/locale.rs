//! LOCALE combinator - rules bound to a custom message catalog

use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{ErrorList, FieldRule, FieldSpec};
use crate::messages::{CatalogOverrides, MessageCatalog};

// ============================================================================
// LOCALIZED COMBINATOR
// ============================================================================

/// A rule pre-configured with custom message templates.
///
/// The overrides are merged over the default catalog once, when the rule is
/// bound. The wrapped rule and the default catalog are left untouched, so
/// binding the same rule to several locales is safe.
///
/// When a caller supplies its own base catalog through
/// [`FieldRule::validate_with`], the bound overrides are merged over that base
/// instead: overridden keys always come from this binding.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::combinators::Localized;
/// use formcheck::prelude::*;
///
/// let email = Localized::new(
///     Rule::Email,
///     CatalogOverrides::new().with(MessageKey::InvalidEmail, "Bad"),
/// );
/// let errors = email.validate(&json!("nope"), &FieldSpec::new(), &json!({}));
/// assert_eq!(errors.to_messages(), ["Bad"]);
/// ```
#[derive(Debug, Clone)]
pub struct Localized<R> {
    inner: R,
    overrides: Arc<CatalogOverrides>,
    catalog: Arc<MessageCatalog>,
}

impl<R> Localized<R> {
    /// Binds `inner` to `overrides` merged over the default catalog.
    pub fn new(inner: R, overrides: CatalogOverrides) -> Self {
        tracing::debug!(overrides = overrides.len(), "binding rule to custom catalog");
        let catalog = Arc::new(MessageCatalog::from_overrides(&overrides));
        Self {
            inner,
            overrides: Arc::new(overrides),
            catalog,
        }
    }

    /// Returns a reference to the wrapped rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the overrides this rule was bound with.
    pub fn overrides(&self) -> &CatalogOverrides {
        &self.overrides
    }

    /// Returns the effective catalog (overrides merged over the default).
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Extracts the wrapped rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> FieldRule for Localized<R>
where
    R: FieldRule,
{
    fn validate_with(
        &self,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
        catalog: &MessageCatalog,
    ) -> ErrorList {
        let catalog = catalog.merged(&self.overrides);
        self.inner.validate_with(value, field, model, &catalog)
    }

    fn validate(&self, value: &Value, field: &FieldSpec, model: &Value) -> ErrorList {
        self.inner.validate_with(value, field, model, &self.catalog)
    }
}

// ============================================================================
// TESTS
// ============================================================================
