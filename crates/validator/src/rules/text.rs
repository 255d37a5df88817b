//! Text rules
//!
//! Length is measured in Unicode scalar values.

use serde_json::Value;

use super::check_empty;
use crate::foundation::{ErrorList, FieldSpec};
use crate::messages::{MessageCatalog, MessageKey};

// ============================================================================
// STRING
// ============================================================================

/// Checks that the value is a string whose length lies within `min..=max`.
///
/// Length messages carry the actual length first, then the bound.
pub fn string(
    value: &Value,
    field: &FieldSpec,
    _model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    if let Some(errors) = check_empty(value, field.required, catalog) {
        return errors;
    }

    let mut errors = ErrorList::new();
    let Value::String(text) = value else {
        errors.push(catalog.error(MessageKey::ThisNotText, &[]));
        return errors;
    };

    let len = text.chars().count();
    let actual = len as f64;

    if let Some(min) = &field.min
        && min.as_number().is_some_and(|min| actual < min)
    {
        errors.push(catalog.error(MessageKey::TextTooSmall, &[&len, min]));
    }

    if let Some(max) = &field.max
        && max.as_number().is_some_and(|max| actual > max)
    {
        errors.push(catalog.error(MessageKey::TextTooBig, &[&len, max]));
    }

    errors
}

// ============================================================================
// ALPHA / ALPHANUMERIC
// ============================================================================

format_rule! {
    /// Checks that the value contains ASCII letters only.
    pub fn alpha;
    test(text) { text.bytes().all(|b| b.is_ascii_alphabetic()) }
    error InvalidTextContainNumber;
}

format_rule! {
    /// Checks that the value contains ASCII letters and digits only.
    pub fn alpha_numeric;
    test(text) { text.bytes().all(|b| b.is_ascii_alphanumeric()) }
    error InvalidTextContainSpec;
}

// ============================================================================
// TESTS
// ============================================================================
