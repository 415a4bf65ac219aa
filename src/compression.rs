//! Compression algorithms implementation.
//!
//! Currently implemented:
//! - Static Huffman coding over the byte alphabet
//!
//! # Examples
//!
//! ```rust
//! use huffpack::compression::{huffman::Huffman, Compression};
//!
//! let codec = Huffman;
//! let packed = codec.compress(b"mississippi").unwrap();
//! assert_eq!(codec.decompress(&packed).unwrap(), b"mississippi");
//! ```

use crate::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for compression algorithms
pub trait Compression {
    /// Compress the input data
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress the compressed data
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod huffman;
pub use huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode, CodeTable,
    FrequencyTable, Header, HuffmanNode, HuffmanTree,
};
