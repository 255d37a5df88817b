//! Loose value coercions shared by the rules.
//!
//! Form values arrive as untyped JSON. These helpers give them the same
//! loose reading a browser-side form layer applies: what counts as empty,
//! how a value prints inside a message, and what its length is.

use std::borrow::Cow;

use serde_json::{Number, Value};

/// Returns `true` for the values treated as "not filled in": `null` and `""`.
///
/// `0`, `false`, `[]` and `{}` are present values.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Formats a float the way a form layer prints numbers: `10`, `2.5`, `-3`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // drop the sign of negative zero
        return "0".to_owned();
    }
    format!("{n}")
}

fn format_json_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), format_number)
    }
}

/// Returns the string form of a value used by pattern-based rules.
///
/// Strings are borrowed; numbers print without a trailing `.0`; arrays join
/// their elements with `,`; `null` prints as an empty string.
#[must_use]
pub fn loose_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(format_json_number(n)),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| loose_string(item).into_owned())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

/// Returns the length of values that have one: arrays and strings.
///
/// String length counts Unicode scalar values.
#[must_use]
pub fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::String(s) => Some(s.chars().count()),
        _ => None,
    }
}

/// Reads a JSON number as a float.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
