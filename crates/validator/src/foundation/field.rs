//! Field specification: the constraints attached to one form field.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::foundation::value::{format_number, loose_string};

// ============================================================================
// BOUND
// ============================================================================

/// A `min`/`max` attribute.
///
/// The meaning depends on the rule reading it: a numeric limit, a length
/// limit, a selection count or a date. Field specs coming from a form schema
/// are not type-checked, so any JSON value is accepted and kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    /// A numeric bound (also read as epoch milliseconds by the date rule).
    Number(f64),
    /// A textual bound: a numeric string or a date string.
    Text(String),
    /// Anything else the schema happened to carry.
    Other(Value),
}

impl Bound {
    /// Numeric reading of the bound.
    ///
    /// Text is trimmed and parsed, empty text reads as `0`. Other values have
    /// no numeric reading, which makes every comparison against them false.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Bound::Number(n) => Some(*n),
            Bound::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
                }
            }
            Bound::Other(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            Bound::Other(_) => None,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Number(n) => f.write_str(&format_number(*n)),
            Bound::Text(s) => f.write_str(s),
            Bound::Other(v) => f.write_str(&loose_string(v)),
        }
    }
}

macro_rules! bound_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Bound {
                fn from(n: $ty) -> Self {
                    Bound::Number(n as f64)
                }
            }
        )+
    };
}

bound_from_number!(i32, i64, u32, u64, usize, f32);

impl From<f64> for Bound {
    fn from(n: f64) -> Self {
        Bound::Number(n)
    }
}

impl From<&str> for Bound {
    fn from(s: &str) -> Self {
        Bound::Text(s.to_owned())
    }
}

impl From<String> for Bound {
    fn from(s: String) -> Self {
        Bound::Text(s)
    }
}

// ============================================================================
// FIELD SPEC
// ============================================================================

/// Constraints for one field.
///
/// Every attribute is optional. Rules read only the attributes they
/// understand and ignore the rest.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::foundation::FieldSpec;
///
/// let field = FieldSpec::required().with_min(3).with_max(20);
///
/// let from_schema: FieldSpec =
///     serde_json::from_str(r#"{ "required": true, "min": 3, "label": "Name" }"#)?;
/// assert_eq!(field, from_schema);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    /// Whether an empty value is an error.
    #[serde(deserialize_with = "truthy")]
    pub required: bool,

    /// Lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Bound>,

    /// Upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Bound>,

    /// Regular-expression source for the `regexp` rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldSpec {
    /// Creates a spec with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a spec for a required field.
    #[must_use]
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// Sets the `required` flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_min(mut self, min: impl Into<Bound>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Sets the upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max(mut self, max: impl Into<Bound>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Sets the pattern used by the `regexp` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// Reads `required` with loose truthiness: `1`, `"yes"` and `{}` count as
/// set; `null`, `false`, `0` and `""` do not.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
