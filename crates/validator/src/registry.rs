//! Rule registry
//!
//! A [`RuleSet`] maps rule names to rules so that field schemas can refer to
//! validators by name (`"email"`, `"creditCard"`, …). Lookups that miss are
//! reported as [`RuleSetError::UnknownRule`]; they are never turned into
//! validation messages.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::combinators::Localized;
use crate::config::Configuration;
use crate::foundation::{ErrorList, FieldRule, FieldRuleExt, FieldSpec};
use crate::messages::CatalogOverrides;
use crate::rules::Rule;

/// A registered rule bound to a custom catalog.
pub type BoundRule = Localized<Arc<dyn FieldRule>>;

// ============================================================================
// RULE SET
// ============================================================================

/// Named collection of rules.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::prelude::*;
///
/// let rules = RuleSet::builtin();
/// let errors = rules.validate("email", &json!("nope"), &FieldSpec::new(), &json!({}))?;
/// assert_eq!(errors.to_messages(), ["Format d'email invalide"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, Arc<dyn FieldRule>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule set holding every built-in rule under its name.
    #[must_use]
    pub fn builtin() -> Self {
        let rules = Rule::ALL
            .into_iter()
            .map(|rule| (rule.name().to_owned(), Arc::new(rule) as Arc<dyn FieldRule>))
            .collect();
        Self { rules }
    }

    /// Registers a rule under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::AlreadyRegistered`] if the name is taken.
    pub fn register<R>(&mut self, name: impl Into<String>, rule: R) -> Result<(), RuleSetError>
    where
        R: FieldRule + 'static,
    {
        let name = name.into();
        if self.rules.contains_key(&name) {
            return Err(RuleSetError::AlreadyRegistered(name));
        }

        debug!(rule = %name, "registering rule");
        self.rules.insert(name, Arc::new(rule));
        Ok(())
    }

    /// Returns the rule registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn FieldRule>> {
        self.rules.get(name).cloned()
    }

    /// Returns `true` if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn lookup(&self, name: &str) -> Result<&Arc<dyn FieldRule>, RuleSetError> {
        self.rules
            .get(name)
            .ok_or_else(|| RuleSetError::UnknownRule(name.to_owned()))
    }

    /// Runs the rule registered under `name` with the default catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::UnknownRule`] if no rule has that name.
    pub fn validate(
        &self,
        name: &str,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
    ) -> Result<ErrorList, RuleSetError> {
        let rule = self.lookup(name)?;
        trace!(rule = name, "dispatching rule");
        Ok(rule.validate(value, field, model))
    }

    /// Runs the rule registered under `name` with the catalog described by
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::UnknownRule`] if no rule has that name.
    pub fn validate_with(
        &self,
        name: &str,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
        config: &Configuration,
    ) -> Result<ErrorList, RuleSetError> {
        let rule = self.lookup(name)?;
        trace!(rule = name, custom_catalog = config.catalog.is_some(), "dispatching rule");
        Ok(rule.validate_with(value, field, model, &config.effective_catalog()))
    }

    /// Binds the rule registered under `name` to `overrides`.
    ///
    /// The registered rule is shared, not copied, and keeps its default
    /// messages.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::UnknownRule`] if no rule has that name.
    pub fn bind(&self, name: &str, overrides: CatalogOverrides) -> Result<BoundRule, RuleSetError> {
        let rule = Arc::clone(self.lookup(name)?);
        Ok(rule.locale(overrides))
    }

    /// Returns a new rule set where every rule is bound to `overrides`.
    #[must_use]
    pub fn localized(&self, overrides: &CatalogOverrides) -> Self {
        let rules = self
            .rules
            .iter()
            .map(|(name, rule)| {
                let bound = Arc::clone(rule).locale(overrides.clone());
                (name.clone(), Arc::new(bound) as Arc<dyn FieldRule>)
            })
            .collect();
        Self { rules }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.names())
            .finish()
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Rule set lookup and registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleSetError {
    /// No rule is registered under the name.
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    /// A rule is already registered under the name.
    #[error("rule '{0}' is already registered")]
    AlreadyRegistered(String),
}
