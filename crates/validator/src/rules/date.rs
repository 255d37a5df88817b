//! Date rule
//!
//! Accepted inputs:
//!
//! - numbers: milliseconds since the Unix epoch
//! - RFC 3339 strings (`2024-01-15T10:30:00+02:00`)
//! - `YYYY-MM-DD` and `YYYY/MM/DD`
//! - `YYYY` and `YYYY-MM` (first day of the year or month)
//! - `YYYY-MM-DDTHH:MM[:SS[.fff]]` and `YYYY-MM-DD HH:MM[:SS[.fff]]`
//!
//! - the message form `Mon Jan 15 2024 00:00:00`, with or without the time
//!
//! Strings without an offset are read as UTC. Dates are rendered in messages
//! as `Mon Jan 15 2024 00:00:00` (UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::check_empty;
use crate::foundation::{Bound, ErrorList, FieldSpec};
use crate::messages::{MessageCatalog, MessageKey};

const DISPLAY_FORMAT: &str = "%a %b %d %Y %H:%M:%S";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%a %b %d %Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    DISPLAY_FORMAT,
];

// `YYYY` and `YYYY-MM`, padded to a full date.
fn parse_partial_date(text: &str) -> Option<NaiveDate> {
    if !text.bytes().take(4).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = match text.len() {
        4 => format!("{text}-01-01"),
        7 => format!("{text}-01"),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

/// Parses a date string in one of the accepted layouts.
#[must_use]
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.and_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| parse_partial_date(text))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

fn value_instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_f64().and_then(from_millis),
        Value::String(s) => parse_date(s),
        _ => None,
    }
}

fn bound_instant(bound: &Bound) -> Option<DateTime<Utc>> {
    match bound {
        Bound::Number(n) => from_millis(*n),
        Bound::Text(s) => parse_date(s),
        Bound::Other(v) => value_instant(v),
    }
}

/// Formats a date the way it appears in messages.
#[must_use]
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Checks that the value is a date within `min..=max`.
///
/// Reports `invalidDate`, or any of `dateIsEarly` / `dateIsLate` rendered
/// with the value's date and the bound's date. A bound that does not parse
/// as a date never reports an error.
pub fn date(
    value: &Value,
    field: &FieldSpec,
    _model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    if let Some(errors) = check_empty(value, field.required, catalog) {
        return errors;
    }

    let Some(instant) = value_instant(value) else {
        return ErrorList::single(catalog.error(MessageKey::InvalidDate, &[]));
    };

    let mut errors = ErrorList::new();

    if let Some(min) = field.min.as_ref().and_then(bound_instant)
        && instant < min
    {
        errors.push(catalog.error(
            MessageKey::DateIsEarly,
            &[&format_date(&instant), &format_date(&min)],
        ));
    }

    if let Some(max) = field.max.as_ref().and_then(bound_instant)
        && instant > max
    {
        errors.push(catalog.error(
            MessageKey::DateIsLate,
            &[&format_date(&instant), &format_date(&max)],
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn check(value: Value, field: &FieldSpec) -> Vec<String> {
        date(&value, field, &Value::Null, MessageCatalog::default_catalog()).to_messages()
    }

    #[test]
    fn test_parse_layouts() {
        let expected = parse_date("2024-01-15T00:00:00Z").unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date("2024-01-15T00:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15 00:00:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T00:00:00.000"), Some(expected));
        assert_eq!(parse_date("2024-01-15T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }

    #[test]
    fn test_parse_year_and_month() {
        assert_eq!(parse_date("2024"), parse_date("2024-01-01"));
        assert_eq!(parse_date("2024-03"), parse_date("2024-03-01"));
        assert!(parse_date("2024").is_some());
        assert_eq!(parse_date("2024-13"), None);
        assert_eq!(parse_date("20x4"), None);
        assert_eq!(parse_date("+202"), None);
    }

    #[test]
    fn test_message_form_parses_back() {
        let dt = parse_date("2024-01-15T10:30:05Z").unwrap();
        assert_eq!(parse_date(&format_date(&dt)), Some(dt));
        assert_eq!(parse_date("Mon Jan 15 2024"), parse_date("2024-01-15"));
        assert!(check(json!("Mon Jan 15 2024 00:00:00"), &FieldSpec::new()).is_empty());
    }

    #[test]
    fn test_format() {
        let dt = parse_date("2024-01-15T10:30:05Z").unwrap();
        assert_eq!(format_date(&dt), "Mon Jan 15 2024 10:30:05");
    }

    #[test]
    fn test_invalid_date() {
        let field = FieldSpec::new();
        for value in [json!("yesterday"), json!(true), json!([2024]), json!({})] {
            assert_eq!(check(value, &field), ["Date invalide"]);
        }
    }

    #[test]
    fn test_epoch_millis() {
        let field = FieldSpec::new().with_max("1970-01-01");
        assert_eq!(
            check(json!(86_400_000), &field),
            ["La date est trop éloignée. Actuelle: Fri Jan 02 1970 00:00:00, Maximum: Thu Jan 01 1970 00:00:00"]
        );
    }

    #[test]
    fn test_epoch_millis_bounds() {
        // 2024-01-15T00:00:00Z and 2024-01-31T00:00:00Z
        let field = FieldSpec::new()
            .with_min(1_705_276_800_000_i64)
            .with_max(1_706_659_200_000_i64);
        assert!(check(json!("2024-01-20"), &field).is_empty());
        assert_eq!(
            check(json!("2024-01-10"), &field),
            ["La date est trop proche. Actuelle: Wed Jan 10 2024 00:00:00, Minimum: Mon Jan 15 2024 00:00:00"]
        );
        assert_eq!(
            check(json!("2024-02-01"), &field),
            ["La date est trop éloignée. Actuelle: Thu Feb 01 2024 00:00:00, Maximum: Wed Jan 31 2024 00:00:00"]
        );
    }

    #[test]
    fn test_year_value() {
        let field = FieldSpec::new().with_min("2024-01-01");
        assert!(check(json!("2024"), &field).is_empty());
        assert_eq!(check(json!("2023"), &field).len(), 1);
    }

    #[test]
    fn test_date_too_early() {
        let field = FieldSpec::new().with_min("2024-01-15");
        assert_eq!(
            check(json!("2024-01-10"), &field),
            ["La date est trop proche. Actuelle: Wed Jan 10 2024 00:00:00, Minimum: Mon Jan 15 2024 00:00:00"]
        );
    }

    #[test]
    fn test_date_too_late() {
        let field = FieldSpec::new().with_max("2024-01-15");
        assert_eq!(
            check(json!("2024-02-01T12:00:00Z"), &field),
            ["La date est trop éloignée. Actuelle: Thu Feb 01 2024 12:00:00, Maximum: Mon Jan 15 2024 00:00:00"]
        );
    }

    #[test]
    fn test_date_within_range() {
        let field = FieldSpec::new().with_min("2024-01-01").with_max("2024-12-31");
        assert!(check(json!("2024-06-01"), &field).is_empty());
        assert!(check(json!("2024-01-01"), &field).is_empty());
    }

    #[test]
    fn test_unparseable_bound_is_ignored() {
        let field = FieldSpec::new().with_min("soon");
        assert!(check(json!("2024-01-10"), &field).is_empty());
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(check(json!(""), &FieldSpec::required()), ["Ce champ est obligatoire"]);
        assert!(check(Value::Null, &FieldSpec::new()).is_empty());
    }
}
