//! Owned types that use standard heap allocation.
//!
//! Arena nodes borrow from a [bumpalo::Bump] and cannot leave the thread that owns it.
//! [`OwnedNode`] holds its data in `String`s and `Vec`s and its components behind
//! `Send + Sync` boxes, so a single tree can be shared and rendered from several
//! threads at once. It renders through the same walk as [`crate::Node`].

use std::fmt;

use crate::{
    attribute::render_attribute,
    element::{render_tag, TreeNode},
    node::fmt_markup,
    Error, NodeKind, Render, ShortCircuitWriter,
};

/// An owned attribute using standard heap allocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OwnedAttribute {
    /// The key of the attribute.
    pub key: String,
    /// The value of the attribute.
    pub value: Option<String>,
}
impl OwnedAttribute {
    /// Create a new owned attribute with a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        OwnedAttribute {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Create a boolean attribute (no value).
    pub fn boolean(key: impl Into<String>) -> Self {
        OwnedAttribute {
            key: key.into(),
            value: None,
        }
    }
}
impl Render for OwnedAttribute {
    fn render_to(&self, w: &mut ShortCircuitWriter<'_>) {
        render_attribute(&self.key, self.value.as_deref(), w);
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Attribute
    }
}
impl From<&str> for OwnedAttribute {
    fn from(s: &str) -> Self {
        OwnedAttribute::boolean(s)
    }
}
impl From<(&str, &str)> for OwnedAttribute {
    fn from((key, value): (&str, &str)) -> Self {
        OwnedAttribute::new(key, value)
    }
}
impl From<(String, String)> for OwnedAttribute {
    fn from((key, value): (String, String)) -> Self {
        OwnedAttribute::new(key, value)
    }
}

/// An owned node using standard heap allocation.
///
/// Mirrors [`crate::Node`]; see there for how children are placed.
#[derive(Debug, Default)]
pub enum OwnedNode {
    #[default]
    /// Nothing.
    Empty,
    /// A tag element.
    Tag {
        /// The name of the tag.
        name: String,
        /// The children of the tag, attributes and elements mixed.
        children: Vec<OwnedNode>,
    },
    /// An attribute of the parent tag.
    Attribute(OwnedAttribute),
    /// A sequence of nodes that is flattened into the parent's children.
    Group {
        /// The children of the group.
        children: Vec<OwnedNode>,
    },
    /// A text element, escaped when rendered.
    Text {
        /// The text of the element.
        text: String,
    },
    /// A raw element, written as-is.
    Raw {
        /// The raw HTML of the element.
        html: String,
    },
    /// A user-defined node that can be shared between threads.
    Component(Box<dyn Render + Send + Sync>),
}
impl OwnedNode {
    /// Create a tag element.
    pub fn element(
        name: impl Into<String>,
        children: impl IntoIterator<Item = OwnedNode>,
    ) -> Self {
        OwnedNode::Tag {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Create an attribute node.
    pub fn attr(attribute: impl Into<OwnedAttribute>) -> Self {
        OwnedNode::Attribute(attribute.into())
    }

    /// Create a group from an iterator of nodes.
    pub fn group(children: impl IntoIterator<Item = OwnedNode>) -> Self {
        OwnedNode::Group {
            children: children.into_iter().collect(),
        }
    }

    /// Create a text element.
    pub fn text(text: impl Into<String>) -> Self {
        OwnedNode::Text { text: text.into() }
    }

    /// Create a raw HTML element.
    pub fn raw(html: impl Into<String>) -> Self {
        OwnedNode::Raw { html: html.into() }
    }

    /// Box a user-defined node.
    pub fn component(component: impl Render + Send + Sync + 'static) -> Self {
        OwnedNode::Component(Box::new(component))
    }
}
impl Render for OwnedNode {
    fn render_to(&self, w: &mut ShortCircuitWriter<'_>) {
        match self {
            OwnedNode::Empty => {}
            OwnedNode::Tag { name, children } => render_tag(name, children.as_slice(), w),
            OwnedNode::Attribute(attribute) => attribute.render_to(w),
            OwnedNode::Group { .. } => w.fail(Error::UnrenderableGroup),
            OwnedNode::Text { text } => w.write_escaped(text),
            OwnedNode::Raw { html } => w.write_str(html),
            OwnedNode::Component(component) => component.render_to(w),
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            OwnedNode::Attribute(_) => NodeKind::Attribute,
            OwnedNode::Component(component) => component.kind(),
            _ => NodeKind::Element,
        }
    }
}
impl TreeNode for OwnedNode {
    fn group_children(&self) -> Option<&[Self]> {
        match self {
            OwnedNode::Group { children } => Some(children.as_slice()),
            _ => None,
        }
    }
}
impl fmt::Display for OwnedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_markup(self, f)
    }
}
impl From<String> for OwnedNode {
    fn from(s: String) -> Self {
        OwnedNode::Text { text: s }
    }
}
impl From<&str> for OwnedNode {
    fn from(s: &str) -> Self {
        OwnedNode::text(s)
    }
}
impl From<OwnedAttribute> for OwnedNode {
    fn from(attribute: OwnedAttribute) -> Self {
        OwnedNode::Attribute(attribute)
    }
}
impl From<Vec<OwnedNode>> for OwnedNode {
    fn from(children: Vec<OwnedNode>) -> Self {
        OwnedNode::Group { children }
    }
}
impl FromIterator<OwnedNode> for OwnedNode {
    fn from_iter<I: IntoIterator<Item = OwnedNode>>(iter: I) -> Self {
        OwnedNode::group(iter)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn page() -> OwnedNode {
        OwnedNode::element(
            "ul",
            [
                OwnedNode::element("li", ["hat".into()]),
                OwnedNode::attr(("class", "hats")),
                ["party hat", "super hat"]
                    .into_iter()
                    .map(|item| OwnedNode::element("li", [OwnedNode::text(item)]))
                    .collect(),
                OwnedNode::Empty,
            ],
        )
    }

    const PAGE: &str =
        r#"<ul class="hats"><li>hat</li><li>party hat</li><li>super hat</li></ul>"#;

    #[test]
    fn renders_like_arena_nodes() {
        assert_eq!(page().write_to_string().unwrap(), PAGE);
        assert_eq!(page().to_string(), PAGE);
    }

    #[test]
    fn void_elements_drop_element_children() {
        let img = OwnedNode::element("img", [OwnedNode::attr(("src", "x.png")), "alt".into()]);
        assert_eq!(img.write_to_string().unwrap(), r#"<img src="x.png">"#);
    }

    #[test]
    fn group_cannot_render_on_its_own() {
        let err = OwnedNode::group([OwnedNode::text("x")])
            .write_to_string()
            .unwrap_err();
        assert!(matches!(err, Error::UnrenderableGroup));
    }

    #[test]
    fn one_tree_renders_on_many_threads() {
        let tree = page();
        let outputs: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| tree.write_to_string().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(outputs.iter().all(|output| output == PAGE));
    }

    #[test]
    fn shared_tree_can_move_between_threads() {
        #[derive(Debug)]
        struct Hidden;
        impl Render for Hidden {
            fn render_to(&self, w: &mut ShortCircuitWriter<'_>) {
                w.write_str(" hidden");
            }

            fn kind(&self) -> NodeKind {
                NodeKind::Attribute
            }
        }

        let tree = Arc::new(OwnedNode::element("div", [OwnedNode::component(Hidden)]));
        let other = Arc::clone(&tree);
        let output = std::thread::spawn(move || other.write_to_string().unwrap())
            .join()
            .unwrap();
        assert_eq!(output, "<div hidden></div>");
        assert_eq!(tree.to_string(), output);
    }
}
