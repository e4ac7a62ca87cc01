//! Utility functions.

use std::borrow::Cow;

/// Escape a string so that it can be embedded in markup.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with character references and leaves every other
/// character as-is. Borrows the input when nothing needs escaping.
///
/// ```
/// assert_eq!(nodehtml::util::escape("a & b"), "a &amp; b");
/// assert_eq!(nodehtml::util::escape("plain"), "plain");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(s)
}

/// Escape a tag or attribute name when the `escape-names` feature is enabled.
///
/// Names are written verbatim otherwise.
pub(crate) fn escape_name(name: &str) -> Cow<'_, str> {
    if cfg!(feature = "escape-names") {
        escape(name)
    } else {
        Cow::Borrowed(name)
    }
}
