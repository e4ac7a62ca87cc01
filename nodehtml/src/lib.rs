#![deny(missing_docs)]
//! A crate for writing HTML from a tree of nodes built in ordinary code.
//!
//! A tree is made of [Node]s: tags, attributes, text, raw HTML, groups and user-defined
//! [Render] implementations. Attributes and elements can be passed to a tag in any
//! order; when the tag is rendered, attribute-kind children are written inside the
//! opening tag and element-kind children into its body. Void elements such as `br` and
//! `img` never get a body or a closing tag.
//!
//! Nodes are created through either [Node]'s constructors or the named methods of
//! [builder::Builder], and written with [Render::write] or [render], which stream markup
//! to any [std::io::Write] without an intermediate buffer.
//!
//! All allocations are done through a bump allocator ([bumpalo::Bump]) which must be passed
//! to all node-creating functions. Arena trees are tied to a single thread; [OwnedNode]
//! is a heap-allocated tree that is `Send + Sync`, so one tree can be rendered from
//! several threads at once.
//!
//! # Example
//!
//! ```
//! use nodehtml::{bumpalo::Bump, Node, Render};
//!
//! let bump = Bump::new();
//! let element = Node::element(&bump, "div", [
//!     Node::element(&bump, "span", []),
//!     Node::attr(&bump, ("class", "a")),
//! ]);
//! assert_eq!(element.write_to_string().unwrap(), r#"<div class="a"><span></span></div>"#);
//! ```

pub mod builder;
pub mod combinators;
pub mod util;

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::{Attribute, IntoAttribute};

mod document;
pub use document::Document;

mod element;
pub use element::{is_void_element, Node, VOID_ELEMENTS};

mod error;
pub use error::Error;

mod node;
pub use node::{fmt_markup, render, NodeKind, Render};

mod owned;
pub use owned::{OwnedAttribute, OwnedNode};

mod writer;
pub use writer::ShortCircuitWriter;
