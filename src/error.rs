use std::io;

/// Errors produced by [`Tree`][crate::Tree] operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The operation requires a non-empty tree but the tree is empty.
    #[error("tree is empty")]
    Underflow,

    /// Writing the textual form of the tree to the caller's writer failed.
    #[error("failed to write tree: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this is an [`Error::Underflow`].
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow)
    }
}

/// Result alias for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
