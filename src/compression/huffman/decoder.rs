//! Payload decoding by walking the Huffman tree.

use super::tree::{HuffmanNode, HuffmanTree};
use crate::compression::Result;
use crate::error::Error;
use bitvec::prelude::*;

/// Decode exactly `symbol_count` symbols from `payload`.
///
/// Bits are read MSB-first: `0` descends left, `1` descends right, and each
/// leaf reached emits its symbol. Whatever follows the last symbol is padding
/// and is never interpreted.
///
/// # Errors
///
/// [`Error::Truncated`] if the payload runs out first.
pub fn decode(payload: &[u8], tree: &HuffmanTree, symbol_count: u64) -> Result<Vec<u8>> {
    decode_bits(payload, tree, symbol_count).map(|(output, _)| output)
}

/// Like [`decode`], also returning how many payload bits the symbols used.
pub(crate) fn decode_bits(
    payload: &[u8],
    tree: &HuffmanTree,
    symbol_count: u64,
) -> Result<(Vec<u8>, usize)> {
    let bits = payload.view_bits::<Msb0>();
    // Every code is at least one bit long.
    let capacity = symbol_count.min(bits.len() as u64) as usize;
    let mut output = Vec::with_capacity(capacity);

    if symbol_count == 0 {
        return Ok((output, 0));
    }

    // A lone leaf was coded with the one-bit code 0.
    if let Some(symbol) = tree.single_symbol() {
        for (pos, bit) in bits.iter().by_vals().enumerate() {
            if bit {
                return Err(Error::Format(format!(
                    "bit {} is set in a single-symbol payload",
                    pos
                )));
            }
            output.push(symbol);
            if output.len() as u64 == symbol_count {
                return Ok((output, pos + 1));
            }
        }
        return Err(truncated(symbol_count, &output));
    }

    let root = tree.root();
    let mut current = root;
    for (pos, bit) in bits.iter().by_vals().enumerate() {
        if let HuffmanNode::Internal { left, right, .. } = *tree.node(current) {
            current = if bit { right } else { left };
        }
        if let HuffmanNode::Leaf { symbol, .. } = *tree.node(current) {
            output.push(symbol);
            if output.len() as u64 == symbol_count {
                return Ok((output, pos + 1));
            }
            current = root;
        }
    }
    Err(truncated(symbol_count, &output))
}

fn truncated(expected: u64, output: &[u8]) -> Error {
    Error::Truncated {
        expected,
        decoded: output.len() as u64,
    }
}
