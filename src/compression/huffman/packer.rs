//! Packing symbol codes into payload bytes.

use super::codes::CodeTable;
use crate::compression::Result;
use crate::error::Error;
use bitvec::prelude::*;

/// Packed payload plus the number of zero bits used to fill the last byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPayload {
    pub bytes: Vec<u8>,
    pub padding_bits: u8,
}

/// Encode `input` with `codes`, concatenating codes MSB-first and padding
/// with zero bits up to a byte boundary.
///
/// # Errors
///
/// [`Error::UnknownSymbol`] if a byte of `input` has no code.
///
/// # Example
///
/// ```
/// use huffpack::compression::huffman::{
///     build_code_table, build_frequency_table, build_huffman_tree, encode,
/// };
///
/// let input = b"aaab";
/// let tree = build_huffman_tree(&build_frequency_table(input).unwrap()).unwrap();
/// let packed = encode(input, &build_code_table(&tree)).unwrap();
/// // b = 0, a = 1
/// assert_eq!(packed.bytes, vec![0b1110_0000]);
/// assert_eq!(packed.padding_bits, 4);
/// ```
pub fn encode(input: &[u8], codes: &CodeTable) -> Result<PackedPayload> {
    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(input.len() * 2);
    for &symbol in input {
        let code = codes.get(symbol).ok_or(Error::UnknownSymbol(symbol))?;
        bits.extend_from_bitslice(code);
    }

    let padding = (8 - bits.len() % 8) % 8;
    bits.resize(bits.len() + padding, false);

    Ok(PackedPayload {
        bytes: bits.into_vec(),
        padding_bits: padding as u8,
    })
}
