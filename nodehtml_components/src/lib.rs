//! Higher-level components composed from the elements and attributes of [nodehtml].

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use std::fmt;

use nodehtml::{builder::Builder, fmt_markup, Node, NodeKind, Render, ShortCircuitWriter};

/// Props for [html5].
///
/// The title is always set; the description and language only if non-empty.
#[derive(Debug, Default)]
pub struct Html5Props<'bump> {
    /// Contents of the `<title>` element.
    pub title: &'bump str,
    /// Contents of the description `<meta>` element.
    pub description: &'bump str,
    /// Value of the `lang` attribute on `<html>`.
    pub language: &'bump str,
    /// Extra nodes for `<head>`.
    pub head: Vec<Node<'bump>>,
    /// Nodes for `<body>`.
    pub body: Vec<Node<'bump>>,
    /// Extra attributes for `<html>`.
    pub html_attrs: Vec<Node<'bump>>,
}

/// An HTML5 document template.
pub fn html5<'bump>(bump: &'bump Bump, props: Html5Props<'bump>) -> Node<'bump> {
    let b = Builder::new(bump);
    b.doctype(b.html([
        b.when_with(!props.language.is_empty(), || b.lang(props.language)),
        b.group(props.html_attrs),
        b.head([
            b.meta([b.charset("utf-8")]),
            b.meta([
                b.name("viewport"),
                b.content("width=device-width, initial-scale=1"),
            ]),
            b.title([b.text(props.title)]),
            b.when_with(!props.description.is_empty(), || {
                b.meta([b.name("description"), b.content(props.description)])
            }),
            b.group(props.head),
        ]),
        b.body([b.group(props.body)]),
    ]))
}

/// A set of class names with flags, rendered as a `class` attribute.
///
/// The attribute value is the sorted, space-separated list of names whose flag is true.
/// When a name is set more than once, the last flag wins.
#[derive(Debug)]
pub struct Classes<'bump> {
    entries: BumpVec<'bump, (BumpString<'bump>, bool)>,
}
impl<'bump> Classes<'bump> {
    /// Create an empty set of classes.
    pub fn new(bump: &'bump Bump) -> Self {
        Self {
            entries: BumpVec::new_in(bump),
        }
    }

    /// Create a set of classes from name-flag pairs.
    pub fn from_pairs<'a>(
        bump: &'bump Bump,
        entries: impl IntoIterator<Item = (&'a str, bool)>,
    ) -> Self {
        entries
            .into_iter()
            .fold(Self::new(bump), |classes, (name, include)| classes.with(name, include))
    }

    /// Set the flag for a class name.
    pub fn with(mut self, name: &str, include: bool) -> Self {
        match self.entries.iter().position(|(n, _)| n.as_str() == name) {
            Some(index) => self.entries[index].1 = include,
            None => {
                let name = BumpString::from_str_in(name, self.entries.bump());
                self.entries.push((name, include));
            }
        }
        self
    }

    /// The included class names, sorted.
    pub fn included(&self) -> Vec<&str> {
        let mut included: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, include)| *include)
            .map(|(name, _)| name.as_str())
            .collect();
        included.sort_unstable();
        included
    }
}
impl Render for Classes<'_> {
    fn render_to(&self, w: &mut ShortCircuitWriter<'_>) {
        w.write_str(" class=\"");
        w.write_escaped(&self.included().join(" "));
        w.write_str("\"");
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Attribute
    }
}

impl fmt::Display for Classes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_markup(self, f)
    }
}

/// Merge the attributes named `name` among `children` into one.
///
/// Only first-level attributes are considered, with groups flattened. The values are
/// joined by a space and the merged attribute takes the position of the first one;
/// everything else keeps its place. Name-only and empty attributes are left alone.
///
/// Attributes are detected by rendering each attribute-kind child, so this works for
/// user-defined nodes too.
pub fn join_attrs<'bump>(
    bump: &'bump Bump,
    name: &str,
    children: impl IntoIterator<Item = Node<'bump>>,
) -> Node<'bump> {
    let mut values: Vec<String> = vec![];
    let mut result = BumpVec::new_in(bump);
    let mut first_attr_index = None;

    fn process<'bump>(
        child: Node<'bump>,
        name: &str,
        values: &mut Vec<String>,
        result: &mut BumpVec<'bump, Node<'bump>>,
        first_attr_index: &mut Option<usize>,
    ) {
        if let Node::Group { children } = child {
            for child in children {
                process(child, name, values, result, first_attr_index);
            }
            return;
        }

        match extract_attr_value(name, &child) {
            Some(value) if !value.is_empty() => {
                values.push(value);
                if first_attr_index.is_none() {
                    *first_attr_index = Some(result.len());
                    result.push(Node::Empty);
                }
            }
            _ => result.push(child),
        }
    }

    for child in children {
        process(child, name, &mut values, &mut result, &mut first_attr_index);
    }

    if let Some(index) = first_attr_index {
        result[index] = Node::attr(bump, (name, values.join(" ")));
    }
    Node::Group { children: result }
}

fn extract_attr_value(name: &str, node: &Node<'_>) -> Option<String> {
    if node.kind() != NodeKind::Attribute {
        return None;
    }

    let rendered = match node.write_to_string() {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::trace!(error = %e, "skipping attribute that failed to render");
            return None;
        }
    };

    let value = rendered
        .strip_prefix(&format!(" {name}=\""))?
        .strip_suffix('"')?;
    // Unescape, since the joined attribute is escaped again when rendered
    Some(html_escape::decode_html_entities(value).into_owned())
}

/// A hidden `<input>` with a name and value.
pub fn input_hidden<'bump>(
    bump: &'bump Bump,
    name: &str,
    value: &str,
    children: impl IntoIterator<Item = Node<'bump>>,
) -> Node<'bump> {
    let b = Builder::new(bump);
    b.input([
        b.type_("hidden"),
        b.name(name),
        b.value(value),
        b.group(children),
    ])
}
