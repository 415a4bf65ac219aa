//! Static Huffman coding.
//!
//! Compression runs the components in order: count byte frequencies, build the
//! tree, derive one code per symbol, write the header, then pack the payload.
//! Decompression reads the header, rebuilds the same tree from the stored
//! frequencies and walks the payload until the declared symbol count is reached.
//!
//! # Container layout
//!
//! All integers are big-endian.
//!
//! ```text
//! entry_count    : u32
//! entry_count x  { symbol: u8, frequency: u32 }
//! symbol_count   : u32
//! padding_bits   : u8
//! payload        : remaining bytes, MSB-first
//! ```

use crate::compression::{Compression, Result};
use crate::error::Error;
use log::debug;

pub mod codes;
pub mod decoder;
pub mod frequency;
pub mod header;
pub mod packer;
pub mod tree;

pub use codes::{build_code_table, CodeTable};
pub use decoder::decode;
pub use frequency::{build_frequency_table, FrequencyTable};
pub use header::Header;
pub use packer::{encode, PackedPayload};
pub use tree::{build_huffman_tree, HuffmanNode, HuffmanTree, NodeId};


/// The Huffman codec as a [`Compression`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Huffman;

impl Compression for Huffman {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress(data)
    }
}

/// Compresses `data` into a self-describing container.
///
/// Empty input is not an error: it produces a header with no entries, a
/// symbol count of zero and an empty payload.
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] if `data` has more than `u32::MAX` bytes.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let table = build_frequency_table(data)?;
    let tree = match build_huffman_tree(&table) {
        Ok(tree) => tree,
        Err(Error::NoData) => {
            debug!("compress: empty input, writing bare header");
            let header = Header::new(table, 0);
            let mut out = Vec::with_capacity(header.encoded_len());
            header.write_to(&mut out);
            return Ok(out);
        }
        Err(e) => return Err(e),
    };
    let codes = build_code_table(&tree);
    let packed = encode(data, &codes)?;

    let header = Header::new(table, packed.padding_bits);
    let mut out = Vec::with_capacity(header.encoded_len() + packed.bytes.len());
    header.write_to(&mut out);
    out.extend_from_slice(&packed.bytes);

    debug!(
        "compress: {} bytes -> {} bytes ({} distinct symbols, {} padding bits)",
        data.len(),
        out.len(),
        codes.len(),
        packed.padding_bits
    );
    Ok(out)
}

/// Decompresses a container produced by [`compress`].
///
/// # Errors
///
/// - [`Error::Format`] if the header is malformed, or the payload length does
///   not agree with the declared padding.
/// - [`Error::Truncated`] if the payload ends before every symbol is decoded.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let (header, payload) = Header::read_from(data)?;
    let symbol_count = u64::from(header.symbol_count);

    let tree = match build_huffman_tree(&header.table) {
        Ok(tree) => tree,
        Err(Error::NoData) => {
            // An empty table already implies symbol_count == 0.
            if !payload.is_empty() || header.padding_bits != 0 {
                return Err(Error::format("empty table followed by payload data"));
            }
            debug!("decompress: empty container");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let (output, consumed_bits) = decoder::decode_bits(payload, &tree, symbol_count)?;
    let trailing_bits = payload.len() * 8 - consumed_bits;
    if trailing_bits != usize::from(header.padding_bits) {
        return Err(Error::Format(format!(
            "payload has {} bits after the last symbol, header declares {} padding bits",
            trailing_bits, header.padding_bits
        )));
    }

    debug!(
        "decompress: {} bytes -> {} bytes",
        data.len(),
        output.len()
    );
    Ok(output)
}
