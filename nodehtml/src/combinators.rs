//! Helpers for building child lists conditionally and from data.
//!
//! These only construct nodes; none of them render anything.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::Node;

/// Returns `node` if `condition` is true, otherwise [`Node::Empty`].
///
/// `node` is always evaluated. Use [`when_with`] if building it is only valid when the
/// condition holds.
pub fn when(condition: bool, node: Node<'_>) -> Node<'_> {
    if condition {
        node
    } else {
        Node::Empty
    }
}

/// Calls `f` and returns its node if `condition` is true, otherwise [`Node::Empty`].
///
/// `f` is not called at all when the condition is false.
///
/// ```
/// use nodehtml::{bumpalo::Bump, combinators::when_with, Node, Render};
///
/// let bump = Bump::new();
/// let message: Option<&str> = None;
/// let div = Node::element(&bump, "div", [
///     when_with(message.is_some(), || Node::text(&bump, message.unwrap())),
/// ]);
/// assert_eq!(div.write_to_string().unwrap(), "<div></div>");
/// ```
pub fn when_with<'bump>(condition: bool, f: impl FnOnce() -> Node<'bump>) -> Node<'bump> {
    if condition {
        f()
    } else {
        Node::Empty
    }
}

/// Map each value to a node, preserving order and length.
pub fn map<'bump, T>(
    bump: &'bump Bump,
    values: impl IntoIterator<Item = T>,
    f: impl FnMut(T) -> Node<'bump>,
) -> BumpVec<'bump, Node<'bump>> {
    BumpVec::from_iter_in(values.into_iter().map(f), bump)
}

/// Map each value to a node and wrap the result in a [`Node::Group`].
pub fn map_group<'bump, T>(
    bump: &'bump Bump,
    values: impl IntoIterator<Item = T>,
    f: impl FnMut(T) -> Node<'bump>,
) -> Node<'bump> {
    Node::Group {
        children: map(bump, values, f),
    }
}
