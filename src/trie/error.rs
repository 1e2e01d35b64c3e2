//! Error types for trie operations.

/// Errors that can occur when mutating or scanning a [`Trie`](super::Trie).
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// An empty keyword or an empty text was given where one is required.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A keyword list could not be read.
    #[error("failed to read keyword list: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

pub(crate) const EMPTY_KEYWORD: &str = "keyword must not be empty";
pub(crate) const EMPTY_TEXT: &str = "text must not be empty";
