//! Collection rules

use serde_json::Value;

use crate::foundation::value::length_of;
use crate::foundation::{ErrorList, FieldSpec};
use crate::messages::{MessageCatalog, MessageKey};

/// Checks a multi-selection value.
///
/// Unlike the other rules this one stops at the first violated condition and
/// reports exactly one message:
///
/// 1. required and not an array → `thisNotArray`
/// 2. required and empty → `fieldIsRequired`
/// 3. length below `min` → `selectMinItems`
/// 4. length above `max` → `selectMaxItems`
///
/// Length bounds also apply to strings. Values without a length (numbers,
/// objects, booleans) skip them.
pub fn array(
    value: &Value,
    field: &FieldSpec,
    _model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    if field.required {
        let Value::Array(items) = value else {
            return ErrorList::single(catalog.error(MessageKey::ThisNotArray, &[]));
        };

        if items.is_empty() {
            return ErrorList::single(catalog.error(MessageKey::FieldIsRequired, &[]));
        }
    }

    let Some(len) = length_of(value) else {
        return ErrorList::new();
    };
    let len = len as f64;

    if let Some(min) = &field.min
        && min.as_number().is_some_and(|min| len < min)
    {
        return ErrorList::single(catalog.error(MessageKey::SelectMinItems, &[min]));
    }

    if let Some(max) = &field.max
        && max.as_number().is_some_and(|max| len > max)
    {
        return ErrorList::single(catalog.error(MessageKey::SelectMaxItems, &[max]));
    }

    ErrorList::new()
}
