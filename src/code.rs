//! Code assignment.

use std::collections::BTreeMap;

use bitvec::prelude::*;
use tracing::debug;

use crate::frequency::FrequencyMap;
use crate::tree::{HuffmanTree, Node, NodeId};

/// A single code word. `false` is a left edge, `true` a right edge.
pub type Code = BitVec<u8, Msb0>;

/// Code word of every symbol in a tree. Codes are prefix-free since each
/// one is the path to a distinct leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMap {
    codes: BTreeMap<u8, Code>,
}

impl CodeMap {
    pub fn get(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Length of the longest code.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// Number of bits an input with these `frequencies` encodes to.
    ///
    /// Symbols without a code contribute nothing; encoding such an input
    /// fails anyway.
    pub fn encoded_len(&self, frequencies: &FrequencyMap) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, freq)| self.codes.get(&symbol).map(|code| code.len() * freq))
            .sum()
    }
}

/// Walks `tree` and records the root-to-leaf path of every leaf.
///
/// Descending left appends `0`, descending right appends `1`. A tree made of
/// a single leaf gives its symbol the one-bit code `0`, so every occurrence
/// still takes up a bit in the stream.
pub fn assign_codes(tree: &HuffmanTree) -> CodeMap {
    let mut codes = BTreeMap::new();

    if let Node::Leaf { symbol, .. } = *tree.node(tree.root()) {
        codes.insert(symbol, bitvec![u8, Msb0; 0]);
        debug!(symbols = 1, max_len = 1, "assigned huffman codes");
        return CodeMap { codes };
    }

    let mut stack: Vec<(NodeId, Code)> = vec![(tree.root(), Code::new())];
    while let Some((id, mut code)) = stack.pop() {
        match *tree.node(id) {
            Node::Leaf { symbol, .. } => {
                codes.insert(symbol, code);
            }
            Node::Internal { left, right, .. } => {
                let mut left_code = code.clone();
                left_code.push(false);
                code.push(true);
                stack.push((right, code));
                stack.push((left, left_code));
            }
        }
    }

    let codes = CodeMap { codes };
    debug!(symbols = codes.len(), max_len = codes.max_len(), "assigned huffman codes");
    codes
}
