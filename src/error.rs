//! Error types for Huffman coding.

use thiserror::Error;

/// Errors produced by the coding pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// No symbols to build a tree from.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// A symbol in the input has no entry in the code map.
    #[error("symbol {0:#04x} has no code")]
    UnknownSymbol(u8),

    /// The stream drove the cursor to a child the tree does not have.
    #[error("malformed stream: bit {position} does not follow any code")]
    MalformedStream { position: usize },

    /// The stream ended in the middle of a code.
    #[error("truncated stream: {position} bits consumed but the last code is incomplete")]
    TruncatedStream { position: usize },

    /// A character other than '0' or '1' in a textual bit stream.
    #[error("invalid bit character {found:?} at offset {position}")]
    InvalidBitChar { position: usize, found: char },
}

/// Result type for Huffman coding operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
