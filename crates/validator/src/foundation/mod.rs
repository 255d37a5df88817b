//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the rule engine:
//!
//! - **Traits**: [`FieldRule`], [`FieldRuleExt`]
//! - **Inputs**: [`FieldSpec`], [`Bound`]
//! - **Results**: [`FieldError`], [`ErrorList`]
//!
//! # Architecture
//!
//! Every rule shares one calling contract:
//!
//! ```rust,ignore
//! fn rule(value: &Value, field: &FieldSpec, model: &Value, catalog: &MessageCatalog) -> ErrorList;
//! ```
//!
//! A validation failure is an ordinary return value (a non-empty
//! [`ErrorList`]), never an `Err`. Rules borrow every input immutably, so the
//! same value, field and catalog can be checked by many rules, on many threads,
//! without copying.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//! use serde_json::json;
//!
//! let field = FieldSpec::new().with_min(10).with_max(20);
//! let errors = Rule::Number.validate(&json!(5), &field, &json!({}));
//! assert_eq!(errors.to_messages(), ["Le nombre est trop petit, minimum: 10"]);
//! ```

pub mod error;
pub mod field;
pub mod traits;
pub mod value;

pub use error::{ErrorList, FieldError};
pub use field::{Bound, FieldSpec};
pub use traits::{FieldRule, FieldRuleExt, FnRule, rule_fn};
