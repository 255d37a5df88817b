//! # formcheck
//!
//! Field-level validation rules for form data, with localizable messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//! use serde_json::json;
//!
//! let field = FieldSpec::required().with_min(3).with_max(5);
//! let errors = Rule::String.validate(&json!("ab"), &field, &json!({}));
//! assert_eq!(errors.to_messages(), ["Le texte est trop court. Actuel: 2, Minimum: 3"]);
//! ```
//!
//! Every rule takes the value, its [`FieldSpec`](foundation::FieldSpec), the
//! enclosing record and a [`MessageCatalog`](messages::MessageCatalog), and
//! returns an [`ErrorList`](foundation::ErrorList). An empty list means valid.
//!
//! ## Localizing
//!
//! Messages default to French. Supply
//! [`CatalogOverrides`](messages::CatalogOverrides) per call through
//! [`Configuration`](config::Configuration), or bind them to a rule once with
//! [`FieldRuleExt::locale`](foundation::FieldRuleExt::locale) or
//! [`RuleSet::bind`](registry::RuleSet::bind). The default catalog is never
//! modified.
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`required`](rules::required)
//! - **Numeric**: [`number`](rules::number), [`integer`](rules::integer),
//!   [`double`](rules::double)
//! - **Text**: [`string`](rules::string), [`alpha`](rules::alpha),
//!   [`alpha_numeric`](rules::alpha_numeric)
//! - **Collection**: [`array`](rules::array)
//! - **Temporal**: [`date`](rules::date)
//! - **Format**: [`regexp`](rules::regexp), [`email`](rules::email),
//!   [`url`](rules::url), [`credit_card`](rules::credit_card)

#[macro_use]
mod macros;

pub mod combinators;
pub mod config;
pub mod foundation;
pub mod messages;
pub mod prelude;
pub mod registry;
pub mod rules;
