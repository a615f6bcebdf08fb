//! Decoding a Huffman bit stream back into bytes.

use bitvec::prelude::*;
use tracing::trace;

use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanTree, Node};

/// Walks `tree` from the root once per code in `stream` and emits the symbol
/// of every leaf reached.
///
/// A tree that is a single leaf reads one `0` bit per symbol. A bit that has
/// no matching child yields [`HuffmanError::MalformedStream`]; a stream that
/// stops between the root and a leaf yields
/// [`HuffmanError::TruncatedStream`].
pub fn decode(stream: &BitSlice<u8, Msb0>, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut result = Vec::with_capacity(tree.frequency().min(stream.len()));

    if let Node::Leaf { symbol, .. } = *tree.node(root) {
        if let Some(position) = stream.first_one() {
            return Err(HuffmanError::MalformedStream { position });
        }
        result.resize(stream.len(), symbol);
        trace!(bits = stream.len(), symbols = result.len(), "decoded stream");
        return Ok(result);
    }

    let mut current = root;
    for (position, bit) in stream.iter().by_vals().enumerate() {
        let Node::Internal { left, right, .. } = *tree.node(current) else {
            return Err(HuffmanError::MalformedStream { position });
        };
        current = if bit { right } else { left };

        if let Node::Leaf { symbol, .. } = *tree.node(current) {
            result.push(symbol);
            current = root;
        }
    }

    if current != root {
        return Err(HuffmanError::TruncatedStream {
            position: stream.len(),
        });
    }

    trace!(bits = stream.len(), symbols = result.len(), "decoded stream");
    Ok(result)
}
