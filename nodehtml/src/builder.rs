//! Implements a builder DSL for creating HTML documents through a series of methods.
//!
//! Every HTML element has a method taking its children, with attributes and elements
//! mixed in the same list. Attributes have methods of their own; an attribute that shares
//! its name with an element gets an `_attr` suffix (`title` is the element,
//! `title_attr` the attribute), and names that are Rust keywords get a trailing
//! underscore (`type_`, `for_`).

use std::fmt;

use bumpalo::Bump;

use crate::{combinators, document::Doctype, Document, IntoAttribute, Node, Render};

/// A builder for creating HTML nodes using a bump allocator.
///
/// # Example
///
/// ```
/// use nodehtml::{bumpalo::Bump, builder::Builder};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let doc = b.document([
///     b.div([b.class("container"), b.h1([b.text("Hello, World!")])]),
/// ]);
/// assert_eq!(
///     doc.write_to_string().unwrap(),
///     r#"<div class="container"><h1>Hello, World!</h1></div>"#,
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Builder<'bump> {
    bump: &'bump Bump,
}
impl<'bump> Builder<'bump> {
    /// Create a new builder with the given bump allocator.
    pub fn new(bump: &'bump Bump) -> Self {
        Self { bump }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Create an element with any tag name.
    ///
    /// Use this if no named method exists for the tag.
    pub fn el(&self, name: &str, children: impl IntoIterator<Item = Node<'bump>>) -> Node<'bump> {
        Node::element(self.bump, name, children)
    }

    /// Create an attribute from a value that implements [IntoAttribute].
    ///
    /// Use this if no named method exists for the attribute.
    pub fn attr(&self, value: impl IntoAttribute<'bump>) -> Node<'bump> {
        Node::attr(self.bump, value)
    }

    /// Create a text element from a string.
    pub fn text(&self, text: &str) -> Node<'bump> {
        Node::text(self.bump, text)
    }

    /// Create a text element from format arguments.
    pub fn text_fmt(&self, args: fmt::Arguments<'_>) -> Node<'bump> {
        Node::text_fmt(self.bump, args)
    }

    /// Create a raw HTML element from a string.
    pub fn raw(&self, html: &str) -> Node<'bump> {
        Node::raw(self.bump, html)
    }

    /// Create a raw HTML element from format arguments.
    pub fn raw_fmt(&self, args: fmt::Arguments<'_>) -> Node<'bump> {
        Node::raw_fmt(self.bump, args)
    }

    /// Create a group from an iterator of nodes.
    pub fn group(&self, children: impl IntoIterator<Item = Node<'bump>>) -> Node<'bump> {
        Node::group(self.bump, children)
    }

    /// Move a user-defined node into the arena.
    pub fn component(&self, component: impl Render + 'bump) -> Node<'bump> {
        Node::component(self.bump, component)
    }

    /// See [`combinators::when`].
    pub fn when(&self, condition: bool, node: Node<'bump>) -> Node<'bump> {
        combinators::when(condition, node)
    }

    /// See [`combinators::when_with`].
    pub fn when_with(&self, condition: bool, f: impl FnOnce() -> Node<'bump>) -> Node<'bump> {
        combinators::when_with(condition, f)
    }

    /// Map values to nodes, grouped so they can be placed in a child list.
    ///
    /// See [`combinators::map_group`].
    pub fn map<T>(
        &self,
        values: impl IntoIterator<Item = T>,
        f: impl FnMut(T) -> Node<'bump>,
    ) -> Node<'bump> {
        combinators::map_group(self.bump, values, f)
    }

    /// Create a node that writes `<!doctype html>` followed by `sibling`.
    pub fn doctype(&self, sibling: Node<'bump>) -> Node<'bump> {
        self.component(Doctype { sibling })
    }

    /// Create a document from an iterator of nodes.
    ///
    /// This is a convenience wrapper around [`Document::new`].
    pub fn document(&self, children: impl IntoIterator<Item = Node<'bump>>) -> Document<'bump> {
        Document::new(self.bump, children)
    }

    /// Create a document with a doctype declaration followed by the given node.
    ///
    /// This is a convenience wrapper around [`Document::new_with_doctype`].
    pub fn document_with_doctype(&self, element: Node<'bump>) -> Document<'bump> {
        Document::new_with_doctype(self.bump, element)
    }

    /// Create a `data-*` attribute.
    pub fn data(&self, name: &str, value: &str) -> Node<'bump> {
        self.attr((format!("data-{name}"), value))
    }

    /// Create a `data` element.
    ///
    /// Named to keep [`Builder::data`] free for `data-*` attributes.
    pub fn data_el(&self, children: impl IntoIterator<Item = Node<'bump>>) -> Node<'bump> {
        self.el("data", children)
    }

    /// Create an `aria-*` attribute.
    pub fn aria(&self, name: &str, value: &str) -> Node<'bump> {
        self.attr((format!("aria-{name}"), value))
    }
}

macro_rules! non_void_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a `", stringify!($tag_ident), "` element from a list of attributes and children.")]
                pub fn $tag_ident(
                    &self,
                    children: impl IntoIterator<Item = Node<'bump>>,
                ) -> Node<'bump> {
                    self.el(stringify!($tag_ident), children)
                }
            )*
        }
        /// A list of all non-void tags with a builder method.
        pub const NON_VOID_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
non_void_builders! {
    a, abbr, address, article, aside, audio, b, bdi, bdo, blockquote, body, button,
    canvas, caption, cite, code, colgroup, datalist, dd, del, details, dfn,
    dialog, div, dl, dt, em, fieldset, figcaption, figure, footer, form,
    h1, h2, h3, h4, h5, h6, head, header, hgroup, html, i, iframe, ins, kbd, label,
    legend, li, main, mark, menu, meter, nav, noscript, object, ol, optgroup, option,
    output, p, picture, pre, progress, q, rp, rt, ruby, s, samp, script, section,
    select, slot, small, span, strong, style, sub, summary, sup, svg, table, tbody,
    td, template, textarea, tfoot, th, thead, time, title, tr, u, ul, var, video
}

macro_rules! void_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a void `", stringify!($tag_ident), "` element from a list of attributes.\n\nElement children are ignored when rendering.")]
                pub fn $tag_ident(
                    &self,
                    children: impl IntoIterator<Item = Node<'bump>>,
                ) -> Node<'bump> {
                    self.el(stringify!($tag_ident), children)
                }
            )*
        }
        /// A list of all void tags with a builder method.
        pub const VOID_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
void_builders! {
    area, base, br, col, embed, hr, img, input, link, meta,
    param, source, track, wbr
}

macro_rules! boolean_attribute_builders {
    ($($attr_ident:ident => $attr_name:literal),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a boolean `", $attr_name, "` attribute.")]
                pub fn $attr_ident(&self) -> Node<'bump> {
                    self.attr($attr_name)
                }
            )*
        }
    };
}
boolean_attribute_builders! {
    async_ => "async", autofocus => "autofocus", autoplay => "autoplay",
    checked => "checked", controls => "controls", defer => "defer",
    disabled => "disabled", hidden => "hidden", loop_ => "loop",
    multiple => "multiple", muted => "muted", novalidate => "novalidate",
    open => "open", readonly => "readonly", required => "required",
    selected => "selected"
}

macro_rules! valued_attribute_builders {
    ($($attr_ident:ident => $attr_name:literal),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a `", $attr_name, "` attribute with a value.")]
                pub fn $attr_ident(&self, value: &str) -> Node<'bump> {
                    self.attr(($attr_name, value))
                }
            )*
        }
    };
}
valued_attribute_builders! {
    accept => "accept", action => "action", alt => "alt",
    autocomplete => "autocomplete", charset => "charset", cite_attr => "cite",
    class => "class", cols => "cols", colspan => "colspan", content => "content",
    enctype => "enctype", for_ => "for", form_attr => "form", height => "height",
    href => "href", id => "id", label_attr => "label", lang => "lang", list => "list",
    max => "max", maxlength => "maxlength", method => "method", min => "min",
    minlength => "minlength", name => "name", pattern => "pattern",
    placeholder => "placeholder", rel => "rel", role => "role", rows => "rows",
    rowspan => "rowspan", slot_attr => "slot", src => "src", srcset => "srcset",
    step => "step", style_attr => "style", tabindex => "tabindex",
    target => "target", title_attr => "title", type_ => "type", value => "value",
    width => "width"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_void_element;

    #[test]
    fn builds_named_elements_with_mixed_children() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let form = b.form([
            b.input([b.type_("text"), b.name("q"), b.required()]),
            b.action("/search"),
            b.button([b.text("Go"), b.disabled()]),
        ]);
        assert_eq!(
            form.write_to_string().unwrap(),
            r#"<form action="/search"><input type="text" name="q" required><button disabled>Go</button></form>"#
        );
    }

    #[test]
    fn prefixes_data_and_aria_attributes() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let div = b.div([b.data("id", "7"), b.aria("label", "Close")]);
        assert_eq!(
            div.write_to_string().unwrap(),
            r#"<div data-id="7" aria-label="Close"></div>"#
        );
    }

    #[test]
    fn element_and_attribute_names_do_not_collide() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let head = b.head([b.title([b.text("Hats")]), b.style([b.raw("p{}")])]);
        assert_eq!(
            head.write_to_string().unwrap(),
            "<head><title>Hats</title><style>p{}</style></head>"
        );
        let abbr = b.abbr([b.title_attr("HyperText"), b.text("HTML")]);
        assert_eq!(
            abbr.write_to_string().unwrap(),
            r#"<abbr title="HyperText">HTML</abbr>"#
        );
    }

    #[test]
    fn formats_text() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let span = b.span([b.text_fmt(format_args!("{} party hats > {} normal hats.", 2, 3))]);
        assert_eq!(
            span.write_to_string().unwrap(),
            "<span>2 party hats &gt; 3 normal hats.</span>"
        );
    }

    #[test]
    fn void_tag_list_matches_void_elements() {
        assert!(VOID_TAGS.iter().all(|t| is_void_element(t)));
        assert!(!NON_VOID_TAGS.iter().any(|t| is_void_element(t)));
    }

    #[test]
    fn maps_into_a_list() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let items = ["party hat", "super hat"];
        let list = b.ul([b.map(items, |item| b.li([b.text(item)]))]);
        assert_eq!(
            list.write_to_string().unwrap(),
            "<ul><li>party hat</li><li>super hat</li></ul>"
        );
    }
}
