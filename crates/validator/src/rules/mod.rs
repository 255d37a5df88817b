//! Built-in rules
//!
//! Every rule is a plain function with the shared signature
//!
//! ```rust,ignore
//! fn(value: &Value, field: &FieldSpec, model: &Value, catalog: &MessageCatalog) -> ErrorList
//! ```
//!
//! and the [`Rule`] enum names them for registries and locale binding.
//!
//! # Categories
//!
//! - **Presence**: [`required`]
//! - **Numeric**: [`number`], [`integer`], [`double`]
//! - **Text**: [`string`], [`alpha`], [`alpha_numeric`]
//! - **Collection**: [`array`]
//! - **Temporal**: [`date`]
//! - **Format**: [`regexp`], [`email`], [`url`], [`credit_card`]
//!
//! All rules except [`array`] start with [`check_empty`]: an empty value
//! (`null` or `""`) yields `[fieldIsRequired]` when the field is required and
//! no error otherwise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::value::is_empty;
use crate::foundation::{ErrorList, FieldRule, FieldSpec};
use crate::messages::{MessageCatalog, MessageKey};
use crate::registry::RuleSetError;

pub mod collection;
pub mod content;
pub mod credit_card;
pub mod date;
pub mod numeric;
pub mod text;

pub use collection::array;
pub use content::{email, regexp, url};
pub use credit_card::{credit_card, luhn_checksum_valid};
pub use date::date;
pub use numeric::{double, integer, number};
pub use text::{alpha, alpha_numeric, string};

// ============================================================================
// EMPTINESS SHORT-CIRCUIT
// ============================================================================

/// Decides the outcome for empty values.
///
/// Returns `Some([fieldIsRequired])` for an empty required value, `Some([])`
/// for an empty optional value, and `None` when the value is present and the
/// calling rule must run its own checks.
#[must_use]
pub fn check_empty(value: &Value, required: bool, catalog: &MessageCatalog) -> Option<ErrorList> {
    if !is_empty(value) {
        return None;
    }

    if required {
        Some(ErrorList::single(
            catalog.error(MessageKey::FieldIsRequired, &[]),
        ))
    } else {
        Some(ErrorList::new())
    }
}

/// Checks presence only.
pub fn required(
    value: &Value,
    field: &FieldSpec,
    _model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    check_empty(value, field.required, catalog).unwrap_or_default()
}

// ============================================================================
// RULE NAMES
// ============================================================================

/// The built-in rules, by name.
///
/// Names follow form-schema conventions (`creditCard`, `alphaNumeric`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Required,
    Number,
    Integer,
    Double,
    String,
    Array,
    Date,
    Regexp,
    Email,
    Url,
    CreditCard,
    Alpha,
    AlphaNumeric,
}

impl Rule {
    /// Every built-in rule.
    pub const ALL: [Rule; 13] = [
        Rule::Required,
        Rule::Number,
        Rule::Integer,
        Rule::Double,
        Rule::String,
        Rule::Array,
        Rule::Date,
        Rule::Regexp,
        Rule::Email,
        Rule::Url,
        Rule::CreditCard,
        Rule::Alpha,
        Rule::AlphaNumeric,
    ];

    /// The rule's registry name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Number => "number",
            Rule::Integer => "integer",
            Rule::Double => "double",
            Rule::String => "string",
            Rule::Array => "array",
            Rule::Date => "date",
            Rule::Regexp => "regexp",
            Rule::Email => "email",
            Rule::Url => "url",
            Rule::CreditCard => "creditCard",
            Rule::Alpha => "alpha",
            Rule::AlphaNumeric => "alphaNumeric",
        }
    }

    /// The function implementing the rule.
    #[must_use]
    pub fn function(self) -> fn(&Value, &FieldSpec, &Value, &MessageCatalog) -> ErrorList {
        match self {
            Rule::Required => required,
            Rule::Number => number,
            Rule::Integer => integer,
            Rule::Double => double,
            Rule::String => string,
            Rule::Array => array,
            Rule::Date => date,
            Rule::Regexp => regexp,
            Rule::Email => email,
            Rule::Url => url,
            Rule::CreditCard => credit_card,
            Rule::Alpha => alpha,
            Rule::AlphaNumeric => alpha_numeric,
        }
    }
}

impl FieldRule for Rule {
    fn validate_with(
        &self,
        value: &Value,
        field: &FieldSpec,
        model: &Value,
        catalog: &MessageCatalog,
    ) -> ErrorList {
        (self.function())(value, field, model, catalog)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| RuleSetError::UnknownRule(s.to_owned()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
