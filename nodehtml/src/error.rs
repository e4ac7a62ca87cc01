/// Errors produced while building or rendering nodes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An attribute was given more than one value.
    #[error("attribute `{name}` must be just a name or a name and value pair, got {count} values")]
    InvalidArity {
        /// The name of the attribute.
        name: String,
        /// The number of values that were passed.
        count: usize,
    },
    /// A group was rendered on its own, outside of a parent element.
    #[error("a group has no markup of its own and can only be rendered inside an element")]
    UnrenderableGroup,
    /// An attribute-kind node was placed at the root of a document, where no tag can host it.
    #[error("attribute-kind node at the document root has no tag to attach to")]
    HostlessAttribute,
    /// The output sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Rendered output could not be turned into a string.
    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
