use std::fmt;
use std::io::Write;

use crate::{Error, ShortCircuitWriter};

/// Where a node is placed relative to its parent tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Rendered into the parent's body, after the opening tag is closed.
    #[default]
    Element,
    /// Rendered inside the parent's opening tag, before the closing `>`.
    Attribute,
}

/// A value that can write itself as markup.
///
/// Implementors write through a [`ShortCircuitWriter`], which records the first failure
/// instead of returning it, so an implementation can issue its writes back to back.
/// Nodes that belong inside the opening tag of their parent should override
/// [`Render::kind`]; everything else defaults to [`NodeKind::Element`].
///
/// # Example
///
/// ```
/// use nodehtml::{bumpalo::Bump, Node, NodeKind, Render, ShortCircuitWriter};
///
/// #[derive(Debug)]
/// struct Hidden;
/// impl Render for Hidden {
///     fn render_to(&self, w: &mut ShortCircuitWriter<'_>) {
///         w.write_str(" hidden");
///     }
///
///     fn kind(&self) -> NodeKind {
///         NodeKind::Attribute
///     }
/// }
///
/// let bump = Bump::new();
/// let div = Node::element(&bump, "div", [Node::text(&bump, "hi"), Node::component(&bump, Hidden)]);
/// assert_eq!(div.write_to_string().unwrap(), "<div hidden>hi</div>");
/// ```
pub trait Render: fmt::Debug {
    /// Write this node's markup.
    fn render_to(&self, w: &mut ShortCircuitWriter<'_>);

    /// The placement of this node relative to its parent tag.
    fn kind(&self) -> NodeKind {
        NodeKind::Element
    }

    /// Write this node to a sink, returning the first error encountered.
    fn write(&self, sink: &mut dyn Write) -> Result<(), Error> {
        let mut w = ShortCircuitWriter::new(sink);
        self.render_to(&mut w);
        w.finish()
    }

    /// Write this node to a string.
    fn write_to_string(&self) -> Result<String, Error> {
        let mut output = vec![];
        self.write(&mut output)?;
        Ok(String::from_utf8(output)?)
    }
}

/// Render a node to a sink.
///
/// Partial output written before a failure stays in the sink.
pub fn render(node: &dyn Render, sink: &mut dyn Write) -> Result<(), Error> {
    node.write(sink)
}

/// Format a node's markup, for use in [`fmt::Display`] implementations.
///
/// Render failures, such as a group rendered on its own, become [`fmt::Error`], which
/// makes `to_string` panic.
pub fn fmt_markup(node: &dyn Render, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let markup = node.write_to_string().map_err(|_| fmt::Error)?;
    f.write_str(&markup)
}
