//! Property-based tests for formcheck.

use formcheck::prelude::*;
use proptest::prelude::*;

fn any_rule() -> impl Strategy<Value = Rule> {
    proptest::sample::select(Rule::ALL.to_vec())
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1e9f64..1e9).prop_map(Value::from),
        ".{0,24}".prop_map(Value::from),
        proptest::collection::vec(any::<u8>(), 0..5).prop_map(Value::from),
    ]
}

fn any_field() -> impl Strategy<Value = FieldSpec> {
    (any::<bool>(), proptest::option::of(0i64..20), proptest::option::of(0i64..20)).prop_map(
        |(required, min, max)| {
            let mut field = FieldSpec::new().with_required(required);
            if let Some(min) = min {
                field = field.with_min(min);
            }
            if let Some(max) = max {
                field = field.with_max(max);
            }
            field
        },
    )
}

/// Appends the Luhn check digit to `payload`.
fn with_check_digit(payload: &str) -> String {
    (0..10)
        .map(|d| format!("{payload}{d}"))
        .find(|candidate| luhn_checksum_valid(candidate))
        .unwrap()
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn rules_are_idempotent(rule in any_rule(), value in any_value(), field in any_field()) {
        let first = rule.validate(&value, &field, &Value::Null);
        let second = rule.validate(&value, &field, &Value::Null);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn required_empty_values(rule in any_rule(), empty in prop_oneof![Just(Value::Null), Just(json!(""))]) {
        let errors = rule.validate(&empty, &FieldSpec::required(), &Value::Null);
        let keys: Vec<_> = errors.keys().collect();
        if rule == Rule::Array {
            // neither null nor "" is an array
            prop_assert_eq!(keys, vec![MessageKey::ThisNotArray]);
        } else {
            prop_assert_eq!(keys, vec![MessageKey::FieldIsRequired]);
        }
    }
}

// ============================================================================
// LUHN
// ============================================================================

proptest! {
    #[test]
    fn check_digit_makes_checksum_pass(payload in "[0-9]{1,18}") {
        prop_assert!(luhn_checksum_valid(&with_check_digit(&payload)));
    }

    #[test]
    fn single_digit_change_breaks_checksum(payload in "[0-9]{12,18}", index in any::<proptest::sample::Index>(), bump in 1u32..10) {
        let number = with_check_digit(&payload);
        let position = index.index(number.len());
        let mut digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
        digits[position] = (digits[position] + bump) % 10;
        let changed: String = digits.iter().map(u32::to_string).collect();
        prop_assert!(!luhn_checksum_valid(&changed));
    }

    #[test]
    fn visa_numbers_with_valid_checksum_pass(payload in "4[0-9]{14}") {
        let number = with_check_digit(&payload);
        let errors = Rule::CreditCard.validate(&json!(number), &FieldSpec::required(), &Value::Null);
        prop_assert!(errors.is_valid());
    }
}

// ============================================================================
// LOCALE ISOLATION
// ============================================================================

proptest! {
    #[test]
    fn binding_never_touches_default_catalog(template in "[a-zA-Z ]{1,30}", rule in any_rule(), value in any_value()) {
        let overrides: CatalogOverrides = MessageKey::ALL.into_iter().map(|k| (k, template.clone())).collect();
        let bound = rule.locale(overrides);
        let field = FieldSpec::required().with_min(3).with_max(5);

        let localized = bound.validate(&value, &field, &Value::Null);
        prop_assert!(localized.messages().all(|m| m == template));

        let default = rule.validate(&value, &field, &Value::Null);
        prop_assert_eq!(localized.keys().collect::<Vec<_>>(), default.keys().collect::<Vec<_>>());
        prop_assert_eq!(
            MessageCatalog::default_catalog().template(MessageKey::FieldIsRequired),
            "Ce champ est obligatoire"
        );
    }
}
