//! Huffman tree construction.
//!
//! Nodes live in a flat arena and refer to their children by index. Leaves
//! occupy the first slots in ascending symbol order, merged nodes are
//! appended as they are created, so the root is always the last node.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyMap;

/// Index of a node inside a [`HuffmanTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        frequency: usize,
    },
    Internal {
        frequency: usize,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn frequency(&self) -> usize {
        match *self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Immutable Huffman tree. Shared by reference between code assignment and
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node stored at `id`.
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Weight of the root, equal to the number of symbols counted.
    pub fn frequency(&self) -> usize {
        self.nodes[self.root].frequency()
    }

    /// Length of the longest code this tree produces.
    ///
    /// A lone leaf still takes one bit, so the depth is never zero.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        deepest.max(1)
    }
}

/// Priority queue entry. Ordered so that `BinaryHeap` pops the lowest
/// frequency first; ties go to the node created earliest.
#[derive(PartialEq, Eq)]
struct QueueEntry {
    frequency: usize,
    node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.frequency.cmp(&self.frequency) {
            Ordering::Equal => other.node.cmp(&self.node),
            ord => ord,
        }
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the Huffman tree for `frequencies`.
///
/// The two lowest-weight nodes are merged until one remains; the first one
/// extracted becomes the left child. Fails with [`HuffmanError::EmptyInput`]
/// if no symbol has a non-zero count.
pub fn build_tree(frequencies: &FrequencyMap) -> Result<HuffmanTree> {
    let leaves = frequencies.len();
    if leaves == 0 {
        return Err(HuffmanError::EmptyInput);
    }

    let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaves - 1);
    nodes.extend(
        frequencies
            .iter()
            .map(|(symbol, frequency)| Node::Leaf { symbol, frequency }),
    );

    let mut heap: BinaryHeap<QueueEntry> = nodes
        .iter()
        .enumerate()
        .map(|(node, leaf)| QueueEntry {
            frequency: leaf.frequency(),
            node,
        })
        .collect();

    while let (Some(left), Some(right)) = (heap.pop(), heap.pop()) {
        let frequency = left.frequency + right.frequency;
        let node = nodes.len();
        nodes.push(Node::Internal {
            frequency,
            left: left.node,
            right: right.node,
        });
        heap.push(QueueEntry { frequency, node });
    }

    // the last pop drained the root's entry; the root is the newest node
    let root = nodes.len() - 1;
    debug!(leaves, nodes = nodes.len(), weight = nodes[root].frequency(), "built huffman tree");

    Ok(HuffmanTree { nodes, root })
}
