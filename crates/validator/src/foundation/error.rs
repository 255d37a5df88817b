//! Error list returned by every rule
//!
//! A rule never fails out-of-band: it returns an [`ErrorList`], and an empty
//! list means the value is acceptable. Each entry keeps the catalog key it was
//! rendered from next to the rendered text, so callers can branch on the kind
//! of failure without parsing messages.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::messages::MessageKey;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// One rendered validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Catalog key the message was rendered from.
    pub key: MessageKey,

    /// Human-readable message, placeholders already substituted.
    pub message: String,
}

impl FieldError {
    /// Creates an error from a key and an already rendered message.
    pub fn new(key: MessageKey, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// ERROR LIST
// ============================================================================

/// Ordered list of validation messages produced by one rule invocation.
///
/// Order follows the sequence of checks inside the rule; duplicates are kept.
/// Backed by a `SmallVec` since a rule rarely reports more than two problems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList {
    errors: SmallVec<[FieldError; 2]>,
}

impl ErrorList {
    /// Creates an empty (valid) list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding exactly one error.
    #[must_use]
    pub fn single(error: FieldError) -> Self {
        let mut list = Self::new();
        list.push(error);
        list
    }

    /// Returns `true` when the validated value is acceptable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` when no error was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Appends an error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns the first recorded error, if any.
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Iterates over recorded errors in check order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Iterates over the rendered messages.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    /// Iterates over the catalog keys.
    pub fn keys(&self) -> impl Iterator<Item = MessageKey> + '_ {
        self.errors.iter().map(|e| e.key)
    }

    /// Returns `true` if an error with the given key was recorded.
    #[must_use]
    pub fn contains_key(&self, key: MessageKey) -> bool {
        self.errors.iter().any(|e| e.key == key)
    }

    /// Collects the rendered messages, the shape a form layer displays.
    #[must_use]
    pub fn to_messages(&self) -> Vec<String> {
        self.messages().map(str::to_owned).collect()
    }
}

impl Extend<FieldError> for ErrorList {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = smallvec::IntoIter<[FieldError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&error.message)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
