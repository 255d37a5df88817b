//! Numeric rules
//!
//! Only JSON numbers are numbers here: `"5"` is rejected as
//! [`MessageKey::InvalidNumber`]. Bounds are read with [`Bound::as_number`],
//! so a bound without a numeric reading never reports an error.
//!
//! [`Bound::as_number`]: crate::foundation::Bound::as_number

use serde_json::Value;

use super::check_empty;
use crate::foundation::value::as_number;
use crate::foundation::{ErrorList, FieldSpec};
use crate::messages::{MessageCatalog, MessageKey};

/// Checks that the value is a finite number within `min..=max`.
///
/// Reports `invalidNumber`, or any of `numberTooSmall` / `numberTooBig`.
pub fn number(
    value: &Value,
    field: &FieldSpec,
    _model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    if let Some(errors) = check_empty(value, field.required, catalog) {
        return errors;
    }

    let mut errors = ErrorList::new();
    match as_number(value).filter(|n| n.is_finite()) {
        Some(n) => {
            if let Some(min) = &field.min
                && min.as_number().is_some_and(|min| n < min)
            {
                errors.push(catalog.error(MessageKey::NumberTooSmall, &[min]));
            }

            if let Some(max) = &field.max
                && max.as_number().is_some_and(|max| n > max)
            {
                errors.push(catalog.error(MessageKey::NumberTooBig, &[max]));
            }
        }
        None => errors.push(catalog.error(MessageKey::InvalidNumber, &[])),
    }

    errors
}

/// Runs [`number`], then checks the value has no fractional part.
pub fn integer(
    value: &Value,
    field: &FieldSpec,
    model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    if let Some(errors) = check_empty(value, field.required, catalog) {
        return errors;
    }

    let mut errors = number(value, field, model, catalog);
    let is_integer = as_number(value).is_some_and(|n| n.is_finite() && n.fract() == 0.0);
    if !is_integer {
        errors.push(catalog.error(MessageKey::InvalidInteger, &[]));
    }

    errors
}

/// Checks that the value is a number. No range check.
pub fn double(
    value: &Value,
    field: &FieldSpec,
    _model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    if let Some(errors) = check_empty(value, field.required, catalog) {
        return errors;
    }

    if as_number(value).is_some_and(|n| !n.is_nan()) {
        ErrorList::new()
    } else {
        ErrorList::single(catalog.error(MessageKey::InvalidNumber, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn run(
        rule: fn(&Value, &FieldSpec, &Value, &MessageCatalog) -> ErrorList,
        value: Value,
        field: &FieldSpec,
    ) -> Vec<String> {
        rule(&value, field, &Value::Null, MessageCatalog::default_catalog()).to_messages()
    }

    #[test]
    fn test_number_below_min() {
        let field = FieldSpec::new().with_min(10).with_max(20);
        assert_eq!(
            run(number, json!(5), &field),
            ["Le nombre est trop petit, minimum: 10"]
        );
    }

    #[test]
    fn test_number_above_max() {
        let field = FieldSpec::new().with_min(10).with_max(20);
        assert_eq!(
            run(number, json!(25.5), &field),
            ["Le nombre est trop grand, maximum: 20"]
        );
    }

    #[test]
    fn test_number_inclusive_bounds() {
        let field = FieldSpec::new().with_min(10).with_max(20);
        assert!(run(number, json!(10), &field).is_empty());
        assert!(run(number, json!(20), &field).is_empty());
    }

    #[test]
    fn test_inverted_bounds_report_both() {
        let field = FieldSpec::new().with_min(10).with_max(0);
        assert_eq!(
            run(number, json!(5), &field),
            [
                "Le nombre est trop petit, minimum: 10",
                "Le nombre est trop grand, maximum: 0"
            ]
        );
    }

    #[test]
    fn test_number_rejects_non_numbers() {
        let field = FieldSpec::new();
        for value in [json!("5"), json!(true), json!([1]), json!({})] {
            assert_eq!(run(number, value, &field), ["Nombre invalide"]);
        }
    }

    #[test]
    fn test_number_zero_is_present() {
        let field = FieldSpec::required().with_min(1);
        assert_eq!(
            run(number, json!(0), &field),
            ["Le nombre est trop petit, minimum: 1"]
        );
    }

    #[test]
    fn test_number_numeric_text_bound() {
        let field = FieldSpec::new().with_min("10");
        assert_eq!(
            run(number, json!(5), &field),
            ["Le nombre est trop petit, minimum: 10"]
        );
    }

    #[test]
    fn test_number_non_numeric_bound_is_ignored() {
        let field = FieldSpec::new().with_min("abc");
        assert!(run(number, json!(5), &field).is_empty());
    }

    #[test]
    fn test_integer() {
        let field = FieldSpec::required();
        assert!(run(integer, json!(3), &field).is_empty());
        assert!(run(integer, json!(3.0), &field).is_empty());
        assert_eq!(
            run(integer, json!(3.5), &field),
            ["La valeur attendue est un nombre"]
        );
    }

    #[test]
    fn test_integer_accumulates_number_errors() {
        let field = FieldSpec::new().with_min(10);
        assert_eq!(
            run(integer, json!(2.5), &field),
            [
                "Le nombre est trop petit, minimum: 10",
                "La valeur attendue est un nombre"
            ]
        );
        assert_eq!(
            run(integer, json!("x"), &field),
            ["Nombre invalide", "La valeur attendue est un nombre"]
        );
    }

    #[test]
    fn test_double() {
        let field = FieldSpec::required().with_min(100);
        assert!(run(double, json!(0), &field).is_empty());
        assert!(run(double, json!(1.25), &field).is_empty());
        assert_eq!(run(double, json!("1.25"), &field), ["Nombre invalide"]);
    }

    #[test]
    fn test_empty_values() {
        for rule in [number, integer, double] {
            assert_eq!(
                run(rule, Value::Null, &FieldSpec::required()),
                ["Ce champ est obligatoire"]
            );
            assert!(run(rule, json!(""), &FieldSpec::new()).is_empty());
        }
    }
}
