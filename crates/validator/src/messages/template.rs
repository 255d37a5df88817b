use std::fmt::Display;

/// Fills the positional placeholders of a message template.
///
/// Every `{i}` is replaced by the string form of `args[i]`. Arguments are
/// substituted one after another, so an argument whose text contains a later
/// placeholder gets that placeholder filled too. There is no escaping.
///
/// An absent template stays absent.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::messages::render_message;
///
/// let text = render_message(Some("Actuel: {0}, Minimum: {1}"), &[&2, &3]);
/// assert_eq!(text.as_deref(), Some("Actuel: 2, Minimum: 3"));
/// assert_eq!(render_message(None, &[&1]), None);
/// ```
#[must_use]
pub fn render_message(template: Option<&str>, args: &[&dyn Display]) -> Option<String> {
    let mut text = template?.to_owned();
    for (i, arg) in args.iter().enumerate() {
        let placeholder = format!("{{{i}}}");
        if text.contains(&placeholder) {
            text = text.replace(&placeholder, &arg.to_string());
        }
    }
    Some(text)
}
