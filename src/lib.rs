//! # huffcode
//!
//! Lossless byte compression with Huffman codes.
//!
//! The pipeline runs in four steps, each exposed on its own:
//!
//! ```
//! use huffcode::{assign_codes, build_tree, count_frequencies, decode, encode};
//!
//! let data = b"abracadabra";
//! let tree = build_tree(&count_frequencies(data))?;
//! let codes = assign_codes(&tree);
//! let stream = encode(data, &codes)?;
//! assert!(stream.len() < data.len() * 8);
//! assert_eq!(decode(&stream, &tree)?, data);
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```
//!
//! [`Compressed`] runs them all at once and keeps the tree next to the
//! stream, since the stream cannot be decoded without it.

pub mod bits;
pub mod code;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod tree;

pub use code::{Code, CodeMap, assign_codes};
pub use decoder::decode;
pub use encoder::{EncodedStream, encode};
pub use error::{HuffmanError, Result};
pub use frequency::{FrequencyMap, count_frequencies};
pub use pipeline::{Compressed, CompressionStats};
pub use tree::{HuffmanTree, Node, NodeId, build_tree};
