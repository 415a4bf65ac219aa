//! Static Huffman compression for in-memory byte buffers.
//!
//! The crate counts byte frequencies, builds a prefix code with a
//! deterministic tie-break, and writes a self-describing container: the
//! frequency table, the symbol count, the padding count, and the packed
//! payload. Decompression rebuilds the identical tree from the stored table.
//!
//! ```rust
//! let data = b"abracadabra";
//! let packed = huffpack::compress(data).unwrap();
//! assert_eq!(huffpack::decompress(&packed).unwrap(), data);
//! ```

pub mod compression;
pub mod error;
pub mod io;

pub use compression::huffman::{compress, decompress, Huffman};
pub use compression::Compression;
pub use error::{Error, Result};
