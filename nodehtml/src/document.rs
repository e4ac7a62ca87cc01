use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{element::render_children, Error, Node, NodeKind, Render, ShortCircuitWriter};

const DOCTYPE: &str = "<!doctype html>";

#[derive(Debug)]
/// A document is the root sequence of nodes that will be rendered to HTML.
pub struct Document<'bump> {
    /// The root nodes of the document, in order.
    pub children: BumpVec<'bump, Node<'bump>>,
    /// Whether to write a doctype declaration before the children.
    pub doctype: bool,
}
impl<'bump> Document<'bump> {
    /// Create a new document with a list of children.
    ///
    /// Groups are flattened into the root like they are into an element's body.
    pub fn new(bump: &'bump Bump, children: impl IntoIterator<Item = Node<'bump>>) -> Self {
        Document {
            children: BumpVec::from_iter_in(children, bump),
            doctype: false,
        }
    }

    /// Create a new document with a doctype declaration followed by the given element.
    pub fn new_with_doctype(bump: &'bump Bump, element: Node<'bump>) -> Self {
        Document {
            doctype: true,
            ..Self::new(bump, [element])
        }
    }

    /// Write the document to a writer.
    ///
    /// ## Errors
    ///
    /// Fails with [`Error::HostlessAttribute`] if an attribute-kind node sits at the root,
    /// or with the first error returned by the writer.
    pub fn write(&self, writer: &mut dyn std::io::Write) -> Result<(), Error> {
        tracing::trace!(root_nodes = self.children.len(), "writing document");
        let mut w = ShortCircuitWriter::new(writer);
        if has_root_attribute(&self.children) {
            w.fail(Error::HostlessAttribute);
        }
        if self.doctype {
            w.write_str(DOCTYPE);
        }
        render_children(self.children.as_slice(), NodeKind::Element, &mut w);
        w.finish()
    }

    /// Write the document to a string.
    pub fn write_to_string(&self) -> Result<String, Error> {
        let mut output = vec![];
        self.write(&mut output)?;
        Ok(String::from_utf8(output)?)
    }
}

fn has_root_attribute(children: &[Node<'_>]) -> bool {
    children.iter().any(|child| match child {
        Node::Group { children } => has_root_attribute(children),
        child => child.kind() == NodeKind::Attribute,
    })
}

/// A node that writes a doctype declaration followed by its sibling.
#[derive(Debug)]
pub(crate) struct Doctype<'bump> {
    pub(crate) sibling: Node<'bump>,
}
impl Render for Doctype<'_> {
    fn render_to(&self, w: &mut ShortCircuitWriter<'_>) {
        w.write_str(DOCTYPE);
        self.sibling.render_to(w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;

    #[test]
    fn test_inline_code() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.p([
            b.text("This is an example of "),
            b.code([b.text("inline code")]),
            b.text(" in a paragraph."),
        ])]);

        let output = input.write_to_string().unwrap();
        assert_eq!(
            output,
            "<p>This is an example of <code>inline code</code> in a paragraph.</p>"
        );
    }

    #[test]
    fn test_empty_ul_with_tags_class() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.ul([b.class("tags")])]);
        let output = input.write_to_string().unwrap();
        assert_eq!(output, "<ul class=\"tags\"></ul>");
    }

    #[test]
    fn test_void_element() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.br([])]);
        let output = input.write_to_string().unwrap();
        assert_eq!(output, "<br>");
    }

    #[test]
    fn successive_root_nodes_are_not_indented() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([
            b.p([b.text("Hello")]),
            b.group([b.p([b.text("World")]), Node::Empty]),
        ]);
        let output = input.write_to_string().unwrap();
        assert_eq!(output, "<p>Hello</p><p>World</p>");
    }

    #[test]
    fn test_new_with_doctype() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document_with_doctype(b.html([b.body([b.text("Hello")])]));
        let output = input.write_to_string().unwrap();
        assert_eq!(output, "<!doctype html><html><body>Hello</body></html>");
    }

    #[test]
    fn root_attributes_have_no_host() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.p([]), b.group([b.id("stray")])]);
        let mut out = vec![];
        let err = input.write(&mut out).unwrap_err();
        assert!(matches!(err, Error::HostlessAttribute));
        assert!(out.is_empty());
    }

    #[test]
    fn doctype_prefixes_its_sibling() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let page = b.doctype(b.html([b.lang("en")]));
        assert_eq!(
            page.write_to_string().unwrap(),
            r#"<!doctype html><html lang="en"></html>"#
        );
    }
}
