use std::borrow::Cow;

/// An error raised while filling a [`SelectionData`](crate::SelectionData).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Text was written into a selection negotiated for a non-text target.
    #[error("the target `{target}` does not carry text")]
    NotText {
        /// The negotiated target of the selection.
        target: Cow<'static, str>,
    },

    /// The requested length does not select a valid prefix of the text.
    #[error("length {len} is not a valid prefix of a {available} byte text")]
    InvalidLength {
        /// The requested length, in bytes.
        len: usize,
        /// The length of the given text, in bytes.
        available: usize,
    },
}
