//! The full compression pipeline over one in-memory buffer.

use tracing::debug;

use crate::code::{CodeMap, assign_codes};
use crate::decoder::decode;
use crate::encoder::{EncodedStream, encode};
use crate::error::Result;
use crate::frequency::{FrequencyMap, count_frequencies};
use crate::tree::{HuffmanTree, build_tree};

/// A compressed buffer together with everything needed to restore it.
#[derive(Debug, Clone)]
pub struct Compressed {
    frequencies: FrequencyMap,
    tree: HuffmanTree,
    codes: CodeMap,
    stream: EncodedStream,
}

impl Compressed {
    /// Counts, builds the tree, assigns codes and encodes `data`.
    pub fn new(data: &[u8]) -> Result<Self> {
        let frequencies = count_frequencies(data);
        let tree = build_tree(&frequencies)?;
        let codes = assign_codes(&tree);
        let stream = encode(data, &codes)?;
        debug!(
            input_bytes = data.len(),
            encoded_bits = stream.len(),
            "compressed buffer"
        );
        Ok(Compressed {
            frequencies,
            tree,
            codes,
            stream,
        })
    }

    pub fn decompress(&self) -> Result<Vec<u8>> {
        decode(&self.stream, &self.tree)
    }

    pub fn frequencies(&self) -> &FrequencyMap {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn codes(&self) -> &CodeMap {
        &self.codes
    }

    pub fn stream(&self) -> &EncodedStream {
        &self.stream
    }

    pub fn stats(&self) -> CompressionStats {
        CompressionStats {
            input_bytes: self.frequencies.total(),
            distinct_symbols: self.codes.len(),
            encoded_bits: self.stream.len(),
            max_code_len: self.tree.depth(),
            entropy: self.frequencies.entropy(),
        }
    }
}

/// Size figures of a compressed buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub input_bytes: usize,
    pub distinct_symbols: usize,
    pub encoded_bits: usize,
    /// Longest code in the table, the depth of the tree.
    pub max_code_len: usize,
    /// Shannon entropy of the input in bits per symbol; a lower bound for
    /// `bits_per_symbol`.
    pub entropy: f64,
}

impl CompressionStats {
    /// Encoded size relative to the input's 8 bits per byte.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / (self.input_bytes * 8) as f64
    }

    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.input_bytes as f64
    }
}
