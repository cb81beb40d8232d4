//! The data carrier of a drop.
use crate::Error;
use crate::target;

use std::borrow::Cow;

/// The container used to pass the dragged payload from the source's
/// `drag-data-get` handlers to the destination's `drag-data-received`
/// handlers.
///
/// A selection is created empty for the target both sides agreed on. The
/// source fills it, the destination reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionData {
    target: Cow<'static, str>,
    data: Option<Vec<u8>>,
}

impl SelectionData {
    /// Creates an empty [`SelectionData`] for the given target.
    pub fn new(target: impl Into<Cow<'static, str>>) -> Self {
        Self {
            target: target.into(),
            data: None,
        }
    }

    /// Returns the negotiated target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the raw bytes, if the source provided any.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Returns the length of the raw bytes, if the source provided any.
    pub fn length(&self) -> Option<usize> {
        self.data.as_ref().map(Vec::len)
    }

    /// Returns the contents as text.
    ///
    /// Returns `None` when nothing was set yet or when the target does not
    /// carry text. Invalid UTF-8 is replaced lossily.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        if !target::is_text_target(&self.target) {
            return None;
        }

        self.data.as_deref().map(String::from_utf8_lossy)
    }

    /// Stores `text` as the contents.
    ///
    /// With `Some(len)`, only the first `len` bytes of `text` are stored.
    pub fn set_text(&mut self, text: &str, len: Option<usize>) -> Result<(), Error> {
        if !target::is_text_target(&self.target) {
            return Err(Error::NotText {
                target: self.target.clone(),
            });
        }

        let text = match len {
            None => text,
            Some(len) => text.get(..len).ok_or(Error::InvalidLength {
                len,
                available: text.len(),
            })?,
        };

        self.data = Some(text.as_bytes().to_vec());

        Ok(())
    }

    /// Stores raw bytes as the contents, regardless of the target.
    pub fn set(&mut self, data: impl Into<Vec<u8>>) {
        self.data = Some(data.into());
    }
}
