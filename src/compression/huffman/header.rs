//! Container header: frequency table, symbol count and padding.
//!
//! ```text
//! entry_count   : u32 (big-endian)
//! entries       : entry_count x { symbol: u8, frequency: u32 }
//! symbol_count  : u32
//! padding_bits  : u8
//! ```

use super::frequency::FrequencyTable;
use crate::compression::Result;
use crate::error::Error;

/// Bytes per serialized table entry: symbol + frequency.
const ENTRY_LEN: usize = 1 + 4;
/// Bytes of the fixed fields: entry count, symbol count, padding.
const FIXED_LEN: usize = 4 + 4 + 1;

/// Decoded header of a compressed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Symbol frequencies the tree is rebuilt from.
    pub table: FrequencyTable,
    /// Number of symbols in the payload; equals the table's total.
    pub symbol_count: u32,
    /// Zero bits appended to the payload to reach a byte boundary (0-7).
    pub padding_bits: u8,
}

impl Header {
    pub fn new(table: FrequencyTable, padding_bits: u8) -> Self {
        let symbol_count = table.total();
        Header {
            table,
            symbol_count,
            padding_bits,
        }
    }

    /// Serialized size in bytes.
    pub fn encoded_len(&self) -> usize {
        FIXED_LEN + ENTRY_LEN * self.table.len()
    }

    /// Append the serialized header to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len());
        // At most 256 entries, always fits.
        out.extend_from_slice(&(self.table.len() as u32).to_be_bytes());
        for (symbol, count) in self.table.iter() {
            out.push(symbol);
            out.extend_from_slice(&count.to_be_bytes());
        }
        out.extend_from_slice(&self.symbol_count.to_be_bytes());
        out.push(self.padding_bits);
    }

    /// Parse a header from the front of `input`, returning it with the
    /// remaining bytes (the payload).
    ///
    /// # Errors
    ///
    /// [`Error::Format`] when the header is cut short, declares more than 256
    /// entries, holds a zero or repeated entry, declares more than 7 padding
    /// bits, or when its symbol count differs from the sum of the frequencies.
    pub fn read_from(input: &[u8]) -> Result<(Header, &[u8])> {
        let mut reader = ByteReader::new(input);

        let entry_count = reader.read_u32("entry count")? as usize;
        if entry_count > 256 {
            return Err(Error::Format(format!(
                "entry count {} exceeds the 256-symbol alphabet",
                entry_count
            )));
        }
        if reader.remaining() < entry_count * ENTRY_LEN + (FIXED_LEN - 4) {
            return Err(Error::Format(format!(
                "header declares {} entries but only {} bytes follow",
                entry_count,
                reader.remaining()
            )));
        }

        let mut entries = Vec::with_capacity(entry_count);
        for _ in 0..entry_count {
            let symbol = reader.read_u8("entry symbol")?;
            let count = reader.read_u32("entry frequency")?;
            entries.push((symbol, count));
        }
        let table = FrequencyTable::from_entries(entries)?;

        let symbol_count = reader.read_u32("symbol count")?;
        if symbol_count != table.total() {
            return Err(Error::Format(format!(
                "symbol count {} does not match frequency total {}",
                symbol_count,
                table.total()
            )));
        }

        let padding_bits = reader.read_u8("padding")?;
        if padding_bits > 7 {
            return Err(Error::Format(format!(
                "padding of {} bits is not below one byte",
                padding_bits
            )));
        }

        let header = Header {
            table,
            symbol_count,
            padding_bits,
        };
        Ok((header, reader.rest()))
    }
}

/// Bounds-checked big-endian reader over a byte slice.
struct ByteReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(input: &'a [u8]) -> Self {
        ByteReader { input, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    fn take<const N: usize>(&mut self, field: &str) -> Result<[u8; N]> {
        let bytes = self
            .input
            .get(self.pos..self.pos + N)
            .ok_or_else(|| Error::Format(format!("header ends inside the {} field", field)))?;
        self.pos += N;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn read_u8(&mut self, field: &str) -> Result<u8> {
        Ok(self.take::<1>(field)?[0])
    }

    fn read_u32(&mut self, field: &str) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take::<4>(field)?))
    }

    fn rest(self) -> &'a [u8] {
        &self.input[self.pos..]
    }
}
