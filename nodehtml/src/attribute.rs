use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::{node::fmt_markup, Error, NodeKind, Render, ShortCircuitWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A name with an optional value, rendered inside its parent's opening tag.
///
/// A name-only attribute renders as ` name`; an attribute with a value renders as
/// ` name="value"` with the value escaped.
pub struct Attribute<'bump> {
    /// The key of the attribute.
    pub key: BumpString<'bump>,
    /// The value of the attribute.
    pub value: Option<BumpString<'bump>>,
}

impl<'bump> Attribute<'bump> {
    /// Create a new attribute with a key and value.
    pub fn new(bump: &'bump Bump, key: &str, value: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: Some(BumpString::from_str_in(value, bump)),
        }
    }

    /// Create a boolean attribute (no value).
    pub fn boolean(bump: &'bump Bump, key: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: None,
        }
    }

    /// Create an attribute with an optional value.
    pub fn with_optional_value(bump: &'bump Bump, key: &str, value: Option<&str>) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: value.map(|v| BumpString::from_str_in(v, bump)),
        }
    }

    /// Create an attribute from a list of positional values.
    ///
    /// No values gives a boolean attribute and one value gives a name-value attribute.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidArity`] if more than one value is given.
    pub fn try_from_values(bump: &'bump Bump, key: &str, values: &[&str]) -> Result<Self, Error> {
        match values {
            [] => Ok(Self::boolean(bump, key)),
            [value] => Ok(Self::new(bump, key, value)),
            _ => Err(Error::InvalidArity {
                name: key.to_string(),
                count: values.len(),
            }),
        }
    }

    /// Create an attribute from a list of positional values.
    ///
    /// ## Panics
    ///
    /// Panics if more than one value is given; see [`Attribute::try_from_values`].
    pub fn from_values(bump: &'bump Bump, key: &str, values: &[&str]) -> Self {
        match Self::try_from_values(bump, key, values) {
            Ok(attribute) => attribute,
            Err(e) => panic!("{e}"),
        }
    }

    /// Get the value as a string slice, if present.
    pub fn value_as_str(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.as_str())
    }
}

impl Render for Attribute<'_> {
    fn render_to(&self, w: &mut ShortCircuitWriter<'_>) {
        render_attribute(self.key.as_str(), self.value_as_str(), w);
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Attribute
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_markup(self, f)
    }
}

/// Write ` key` or ` key="value"`, escaping the value.
pub(crate) fn render_attribute(key: &str, value: Option<&str>, w: &mut ShortCircuitWriter<'_>) {
    w.write_str(" ");
    w.write_name(key);
    if let Some(value) = value {
        w.write_str("=\"");
        w.write_escaped(value);
        w.write_str("\"");
    }
}

/// Trait for types that can be converted into an Attribute with a bump allocator.
pub trait IntoAttribute<'bump> {
    /// Convert this value into an Attribute using the given bump allocator.
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump>;
}
impl<'bump> IntoAttribute<'bump> for Attribute<'bump> {
    fn into_attribute(self, _bump: &'bump Bump) -> Attribute<'bump> {
        self
    }
}
impl<'bump> IntoAttribute<'bump> for &str {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::boolean(bump, self)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, &str) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, &self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (String, &str) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, &self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (String, String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, &self.0, &self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, Option<&str>) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::with_optional_value(bump, self.0, self.1)
    }
}
