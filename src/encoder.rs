//! Encoding a byte sequence into its Huffman bit stream.

use bitvec::prelude::*;
use tracing::trace;

use crate::code::CodeMap;
use crate::error::{HuffmanError, Result};

/// Concatenated codes of an input, in input order.
pub type EncodedStream = BitVec<u8, Msb0>;

/// Replaces every byte of `data` by its code.
///
/// Fails with [`HuffmanError::UnknownSymbol`] on the first byte that has no
/// entry in `codes`.
pub fn encode(data: &[u8], codes: &CodeMap) -> Result<EncodedStream> {
    let mut stream = EncodedStream::with_capacity(data.len() * codes.max_len().min(8));
    for &byte in data {
        let code = codes.get(byte).ok_or(HuffmanError::UnknownSymbol(byte))?;
        stream.extend_from_bitslice(code);
    }
    trace!(symbols = data.len(), bits = stream.len(), "encoded stream");
    Ok(stream)
}
