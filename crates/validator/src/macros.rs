//! Macros for defining rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`format_rule!`]: a rule that checks the string form of a value with a
//!   single test and reports one message on failure

// ============================================================================
// FORMAT RULE MACRO
// ============================================================================

/// Creates a complete format rule: emptiness short-circuit, one test over the
/// loose string form of the value, one message on failure.
///
/// ```rust,ignore
/// format_rule! {
///     /// Letters only.
///     pub fn alpha;
///     test(text) { text.bytes().all(|b| b.is_ascii_alphabetic()) }
///     error InvalidTextContainNumber;
/// }
/// ```
///
/// expands to a `pub fn alpha(value, field, model, catalog) -> ErrorList`.
macro_rules! format_rule {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident;
        test($text:ident) $test:block
        error $key:ident;
    ) => {
        $(#[$meta])*
        $vis fn $name(
            value: &::serde_json::Value,
            field: &$crate::foundation::FieldSpec,
            _model: &::serde_json::Value,
            catalog: &$crate::messages::MessageCatalog,
        ) -> $crate::foundation::ErrorList {
            if let Some(errors) = $crate::rules::check_empty(value, field.required, catalog) {
                return errors;
            }

            let text = $crate::foundation::value::loose_string(value);
            let $text: &str = &text;
            if $test {
                $crate::foundation::ErrorList::new()
            } else {
                $crate::foundation::ErrorList::single(
                    catalog.error($crate::messages::MessageKey::$key, &[]),
                )
            }
        }
    };
}
