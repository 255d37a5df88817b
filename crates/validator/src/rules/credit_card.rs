//! Credit card number rule with Luhn checksum.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::check_empty;
use crate::foundation::value::loose_string;
use crate::foundation::{ErrorList, FieldSpec};
use crate::messages::{MessageCatalog, MessageKey};

// Visa, Mastercard, Discover, American Express, Diners Club, JCB.
static CARD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35\d{3})\d{11})$",
    )
    .unwrap()
});

/// Validates a digit string using the Luhn algorithm (mod 10 check).
///
/// Digits are processed right to left; every second digit, starting with the
/// one left of the check digit, is doubled (minus 9 when above 9).
/// Non-digit characters make the checksum fail.
#[must_use]
pub fn luhn_checksum_valid(digits: &str) -> bool {
    let mut sum = 0;
    let mut double = false;

    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

/// Checks a payment card number.
///
/// Every non-digit character is stripped first, so `4111 1111-1111 1111` is
/// read as `4111111111111111`. Reports `invalidCard` when the digits do not
/// match a known issuer prefix and length, and `invalidCardNumber` when they
/// do but fail the Luhn checksum.
pub fn credit_card(
    value: &Value,
    field: &FieldSpec,
    _model: &Value,
    catalog: &MessageCatalog,
) -> ErrorList {
    if let Some(errors) = check_empty(value, field.required, catalog) {
        return errors;
    }

    let sanitized: String = loose_string(value)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if !CARD_REGEX.is_match(&sanitized) {
        return ErrorList::single(catalog.error(MessageKey::InvalidCard, &[]));
    }

    if !luhn_checksum_valid(&sanitized) {
        return ErrorList::single(catalog.error(MessageKey::InvalidCardNumber, &[]));
    }

    ErrorList::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn check(value: &str) -> Vec<String> {
        credit_card(
            &json!(value),
            &FieldSpec::new(),
            &Value::Null,
            MessageCatalog::default_catalog(),
        )
        .to_messages()
    }

    #[rstest]
    #[case::visa("4111111111111111")]
    #[case::visa_13("4222222222222")]
    #[case::mastercard("5500000000000004")]
    #[case::amex("378282246310005")]
    #[case::discover("6011111111111117")]
    #[case::diners("30569309025904")]
    #[case::jcb("3530111333300000")]
    #[case::separators("4111 1111-1111 1111")]
    fn test_valid_cards(#[case] number: &str) {
        assert!(check(number).is_empty(), "{number}");
    }

    #[test]
    fn test_luhn_failure() {
        assert_eq!(check("4111111111111112"), ["Numéro de carte invalide"]);
    }

    #[rstest]
    #[case::too_short("411111111111111")]
    #[case::unknown_prefix("9111111111111111")]
    #[case::no_digits("abcd")]
    fn test_bad_format(#[case] number: &str) {
        assert_eq!(check(number), ["Format de carte invalide"]);
    }

    #[test]
    fn test_luhn() {
        assert!(luhn_checksum_valid("79927398713"));
        assert!(!luhn_checksum_valid("79927398710"));
        assert!(luhn_checksum_valid("0"));
        assert!(!luhn_checksum_valid("12a4"));
    }

    #[test]
    fn test_numeric_value() {
        let errors = credit_card(
            &json!(4_111_111_111_111_111_u64),
            &FieldSpec::new(),
            &Value::Null,
            MessageCatalog::default_catalog(),
        );
        assert!(errors.is_valid());
    }
}
