//! Textual form of a bit stream: one ASCII `'0'` or `'1'` per bit.

use bitvec::prelude::*;

use crate::encoder::EncodedStream;
use crate::error::{HuffmanError, Result};

/// Renders `bits` as a string of `'0'` and `'1'` characters.
pub fn to_text(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Parses a string of `'0'` and `'1'` characters.
///
/// Trailing whitespace, such as the newline an editor appends, is ignored.
pub fn from_text(text: &str) -> Result<EncodedStream> {
    let mut bits = EncodedStream::with_capacity(text.len());
    for (position, found) in text.trim_end().char_indices() {
        match found {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(HuffmanError::InvalidBitChar { position, found }),
        }
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_msb_first() {
        assert_eq!(to_text(0b1011_0001u8.view_bits::<Msb0>()), "10110001");
        assert_eq!(to_text(BitSlice::empty()), "");
    }

    #[test]
    fn parses_text() {
        assert_eq!(from_text("0110\n").unwrap(), bits![u8, Msb0; 0, 1, 1, 0]);
        assert!(from_text("").unwrap().is_empty());
    }

    #[test]
    fn rejects_other_characters() {
        assert_eq!(
            from_text("01x1"),
            Err(HuffmanError::InvalidBitChar {
                position: 2,
                found: 'x'
            })
        );
    }
}
