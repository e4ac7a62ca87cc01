use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{
    node::fmt_markup, Attribute, Error, IntoAttribute, NodeKind, Render, ShortCircuitWriter,
};

/// Tags that never have a body or a closing tag.
///
/// `command` and `keygen` are obsolete but still closed as void when they appear.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Returns `true` if `name` is one of the [`VOID_ELEMENTS`].
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// A node in an HTML tree.
///
/// Children of a [`Node::Tag`] are split by [`NodeKind`] when rendered: attribute-kind
/// children go inside the opening tag, element-kind children go into the body, each in
/// their original relative order. [`Node::Group`]s are unwrapped into the surrounding
/// child list and [`Node::Empty`] is skipped.
#[derive(Debug, Clone, Default)]
pub enum Node<'bump> {
    /// Nothing. Used as a placeholder for conditionally omitted children.
    #[default]
    Empty,
    /// A tag element.
    Tag {
        /// The name of the tag.
        name: BumpString<'bump>,
        /// The children of the tag, attributes and elements mixed.
        children: BumpVec<'bump, Node<'bump>>,
    },
    /// An attribute of the parent tag.
    Attribute(Attribute<'bump>),
    /// A sequence of nodes that is flattened into the parent's children.
    ///
    /// A group has no markup of its own; rendering one directly fails with
    /// [`Error::UnrenderableGroup`].
    Group {
        /// The children of the group.
        children: BumpVec<'bump, Node<'bump>>,
    },
    /// A text element, escaped when rendered.
    Text {
        /// The text of the element.
        text: BumpString<'bump>,
    },
    /// A raw element, written as-is.
    Raw {
        /// The raw HTML of the element.
        html: BumpString<'bump>,
    },
    /// A user-defined node.
    Component(&'bump (dyn Render + 'bump)),
}

impl<'bump> Node<'bump> {
    /// Create a tag element.
    ///
    /// Attributes and elements can be mixed freely in `children`; attributes are
    /// rendered inside the opening tag regardless of their position.
    pub fn element(
        bump: &'bump Bump,
        name: &str,
        children: impl IntoIterator<Item = Node<'bump>>,
    ) -> Node<'bump> {
        Node::Tag {
            name: BumpString::from_str_in(name, bump),
            children: BumpVec::from_iter_in(children, bump),
        }
    }

    /// Create an attribute node from a value that implements [IntoAttribute].
    pub fn attr(bump: &'bump Bump, value: impl IntoAttribute<'bump>) -> Node<'bump> {
        Node::Attribute(value.into_attribute(bump))
    }

    /// Create a group from an iterator of nodes.
    pub fn group(
        bump: &'bump Bump,
        children: impl IntoIterator<Item = Node<'bump>>,
    ) -> Node<'bump> {
        Node::Group {
            children: BumpVec::from_iter_in(children, bump),
        }
    }

    /// Create a text element.
    pub fn text(bump: &'bump Bump, text: &str) -> Node<'bump> {
        Node::Text {
            text: BumpString::from_str_in(text, bump),
        }
    }

    /// Create a text element from format arguments.
    ///
    /// ```
    /// use nodehtml::{bumpalo::Bump, Node, Render};
    ///
    /// let bump = Bump::new();
    /// let n = Node::text_fmt(&bump, format_args!("{} > {}", 2, 1));
    /// assert_eq!(n.write_to_string().unwrap(), "2 &gt; 1");
    /// ```
    pub fn text_fmt(bump: &'bump Bump, args: fmt::Arguments<'_>) -> Node<'bump> {
        Node::Text {
            text: bumpalo::format!(in bump, "{}", args),
        }
    }

    /// Create a raw HTML element.
    pub fn raw(bump: &'bump Bump, html: &str) -> Node<'bump> {
        Node::Raw {
            html: BumpString::from_str_in(html, bump),
        }
    }

    /// Create a raw HTML element from format arguments.
    pub fn raw_fmt(bump: &'bump Bump, args: fmt::Arguments<'_>) -> Node<'bump> {
        Node::Raw {
            html: bumpalo::format!(in bump, "{}", args),
        }
    }

    /// Move a user-defined node into the arena.
    pub fn component(bump: &'bump Bump, component: impl Render + 'bump) -> Node<'bump> {
        Node::Component(bump.alloc(component))
    }

    /// Get the tag name of the element if it is a [`Tag`].
    ///
    /// [`Tag`]: Node::Tag
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Tag { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns `true` if the node is [`Empty`].
    ///
    /// [`Empty`]: Node::Empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the node is a [`Group`].
    ///
    /// [`Group`]: Node::Group
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

impl Render for Node<'_> {
    fn render_to(&self, w: &mut ShortCircuitWriter<'_>) {
        match self {
            Node::Empty => {}
            Node::Tag { name, children } => render_tag(name.as_str(), children.as_slice(), w),
            Node::Attribute(attribute) => attribute.render_to(w),
            Node::Group { .. } => w.fail(Error::UnrenderableGroup),
            Node::Text { text } => w.write_escaped(text.as_str()),
            Node::Raw { html } => w.write_str(html.as_str()),
            Node::Component(component) => component.render_to(w),
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Node::Attribute(_) => NodeKind::Attribute,
            Node::Component(component) => component.kind(),
            _ => NodeKind::Element,
        }
    }
}
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_markup(self, f)
    }
}

impl TreeNode for Node<'_> {
    fn group_children(&self) -> Option<&[Self]> {
        match self {
            Node::Group { children } => Some(children.as_slice()),
            _ => None,
        }
    }
}

/// A tree node type that the render walk knows how to unwrap groups of.
pub(crate) trait TreeNode: Render + Sized {
    /// The members of this node if it is a group.
    fn group_children(&self) -> Option<&[Self]>;
}

/// Write a tag: attribute-kind children inside the opening tag, then, unless the tag is
/// void, element-kind children and the closing tag.
pub(crate) fn render_tag<N: TreeNode>(
    name: &str,
    children: &[N],
    w: &mut ShortCircuitWriter<'_>,
) {
    // start tag
    w.write_str("<");
    w.write_name(name);
    render_children(children, NodeKind::Attribute, w);
    w.write_str(">");

    if is_void_element(name) {
        return;
    }

    render_children(children, NodeKind::Element, w);

    // end tag
    w.write_str("</");
    w.write_name(name);
    w.write_str(">");
}

/// Render the children that have the given kind, unwrapping groups.
pub(crate) fn render_children<N: TreeNode>(
    children: &[N],
    kind: NodeKind,
    w: &mut ShortCircuitWriter<'_>,
) {
    for child in children {
        if w.is_failed() {
            return;
        }
        match child.group_children() {
            Some(members) => render_children(members, kind, w),
            None if child.kind() == kind => child.render_to(w),
            None => {}
        }
    }
}
