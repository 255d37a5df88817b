//! String content rules
//!
//! Rules checking the string form of a value against a regular expression.
//!
//! Field patterns come from form schemas written for browsers, so they are
//! compiled with the ECMAScript dialect ([`regress`]): lookaround and
//! backreferences work, and `\d`, `\w`, `\b` are ASCII-only. The fixed
//! patterns below use [`regex`].

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::check_empty;
use crate::foundation::value::loose_string;
use crate::foundation::{ErrorList, FieldSpec};
use crate::messages::{MessageCatalog, MessageKey};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

// Unanchored: a URL anywhere in the value is accepted.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,4}(?-u:\b)([-a-zA-Z0-9@:%_+.~#?&/=]*)",
    )
    .unwrap()
});

// ============================================================================
// REGEXP RULE
// ============================================================================

/// Checks the value against `field.pattern`, when one is set.
///
/// The pattern is an ECMAScript regular expression without flags. It is
/// searched, not anchored: add `^…$` to match the whole value. A pattern that
/// does not compile reports `invalidFormat`.
pub fn regexp(
    value: &Value,
    field: &FieldSpec,
    _model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    if let Some(errors) = check_empty(value, field.required, catalog) {
        return errors;
    }

    let Some(pattern) = field.pattern.as_deref() else {
        return ErrorList::new();
    };

    let matched = match regress::Regex::new(pattern) {
        Ok(re) => re.find(&loose_string(value)).is_some(),
        Err(error) => {
            tracing::warn!(pattern, %error, "field pattern does not compile");
            false
        }
    };

    if matched {
        ErrorList::new()
    } else {
        ErrorList::single(catalog.error(MessageKey::InvalidFormat, &[]))
    }
}

// ============================================================================
// EMAIL RULE
// ============================================================================

format_rule! {
    /// Checks the value is shaped like an e-mail address.
    ///
    /// The local part is a dot-separated run of ordinary characters or a
    /// quoted string; the domain is a bracketed IPv4 literal or dotted labels
    /// ending with a top-level domain of two letters or more.
    pub fn email;
    test(text) { EMAIL_REGEX.is_match(text) }
    error InvalidEmail;
}

// ============================================================================
// URL RULE
// ============================================================================

format_rule! {
    /// Checks the value contains an `http` or `https` URL.
    pub fn url;
    test(text) { URL_REGEX.is_match(text) }
    error InvalidUrl;
}

// ============================================================================
// TESTS
// ============================================================================
