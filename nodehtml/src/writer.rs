use std::io::Write;

use crate::{util, Error};

/// A sink wrapper that stops writing after the first failure.
///
/// Every write after an error is a no-op, and the first error is kept until
/// [`ShortCircuitWriter::finish`] hands it back. This lets the render walk issue
/// many small writes without checking each one.
pub struct ShortCircuitWriter<'w> {
    sink: &'w mut dyn Write,
    error: Option<Error>,
}
impl<'w> ShortCircuitWriter<'w> {
    /// Wrap the given sink.
    pub fn new(sink: &'w mut dyn Write) -> Self {
        Self { sink, error: None }
    }

    /// Write raw bytes, unless an earlier write failed.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.sink.write_all(bytes) {
            self.error = Some(Error::Io(e));
        }
    }

    /// Write a string verbatim.
    pub fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Write a string after escaping it with [`util::escape`].
    pub fn write_escaped(&mut self, s: &str) {
        if self.error.is_some() {
            return;
        }
        let escaped = util::escape(s);
        self.write_str(&escaped);
    }

    /// Write a tag or attribute name.
    pub(crate) fn write_name(&mut self, name: &str) {
        let name = util::escape_name(name);
        self.write_str(&name);
    }

    /// Record a failure that did not come from the sink.
    ///
    /// Ignored if an error has already been recorded.
    pub fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Returns `true` once any write has failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// The first recorded error, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Finish writing, returning the first recorded error.
    pub fn finish(self) -> Result<(), Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
