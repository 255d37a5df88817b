//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck::prelude::*;` import that brings in the
//! rule traits, field specs, catalogs, the registry and every built-in rule.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//!
//! let rules = RuleSet::builtin();
//! let errors = rules.validate("creditCard", &json!("4111111111111112"), &FieldSpec::new(), &json!({}))?;
//! ```

// ============================================================================
// FOUNDATION: Traits, inputs, results
// ============================================================================

pub use crate::foundation::{
    Bound, ErrorList, FieldError, FieldRule, FieldRuleExt, FieldSpec, FnRule, rule_fn,
};

// ============================================================================
// MESSAGES
// ============================================================================

pub use crate::messages::{CatalogError, CatalogOverrides, MessageCatalog, MessageKey, render_message};

// ============================================================================
// RULES
// ============================================================================

pub use crate::rules::{
    Rule, alpha, alpha_numeric, array, check_empty, credit_card, date, double, email, integer,
    luhn_checksum_valid, number, regexp, required, string, url,
};

// ============================================================================
// COMBINATORS, REGISTRY, CONFIGURATION
// ============================================================================

pub use crate::combinators::Localized;
pub use crate::config::Configuration;
pub use crate::registry::{BoundRule, RuleSet, RuleSetError};

pub use serde_json::{Value, json};
