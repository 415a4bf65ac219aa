//! Error types shared by the whole crate.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Failures produced while compressing or decompressing.
#[derive(Debug, Error)]
pub enum Error {
    /// There is nothing to build a code from (empty frequency table).
    #[error("no data to encode")]
    NoData,

    /// The container header is malformed or internally inconsistent.
    #[error("invalid container format: {0}")]
    Format(String),

    /// The payload ran out before the declared number of symbols was decoded.
    #[error("truncated payload: expected {expected} symbols, decoded {decoded}")]
    Truncated { expected: u64, decoded: u64 },

    /// A byte was handed to the packer that has no code in the table.
    #[error("symbol {0:#04x} has no code in the code table")]
    UnknownSymbol(u8),

    /// The input is longer than the 32-bit symbol count can describe.
    #[error("input of {0} bytes exceeds the container's 32-bit symbol count")]
    InputTooLarge(usize),

    /// Upstream I/O failure from the file wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}
