//! Whole-file wrappers around [`compress`] and [`decompress`].
//!
//! Files are read into memory in full before coding starts; I/O failures are
//! passed through as [`Error::Io`](crate::Error::Io).

use crate::compression::huffman::{
    build_code_table, build_huffman_tree, compress, decompress, CodeTable, Header,
};
use crate::error::{Error, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Sizes observed by a file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub input_bytes: usize,
    pub output_bytes: usize,
}

impl FileStats {
    /// Output size as a fraction of input size; 0.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// Compress the file at `input` and write the container to `output`.
pub fn compress_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<FileStats> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let data = fs::read(input)?;
    let packed = compress(&data)?;
    fs::write(output, &packed)?;

    let stats = FileStats {
        input_bytes: data.len(),
        output_bytes: packed.len(),
    };
    info!(
        "compressed {} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        stats.input_bytes,
        stats.output_bytes
    );
    Ok(stats)
}

/// Decompress the container at `input` and write the original bytes to `output`.
///
/// Nothing is written if the container fails to decode.
pub fn decompress_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<FileStats> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let packed = fs::read(input)?;
    let data = decompress(&packed)?;
    fs::write(output, &data)?;

    let stats = FileStats {
        input_bytes: packed.len(),
        output_bytes: data.len(),
    };
    info!(
        "decompressed {} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        stats.input_bytes,
        stats.output_bytes
    );
    Ok(stats)
}

/// What a container's header says about its contents.
#[derive(Debug, Clone)]
pub struct ContainerSummary {
    pub header: Header,
    pub header_bytes: usize,
    pub payload_bytes: usize,
    /// `None` for an empty container.
    pub codes: Option<CodeTable>,
}

/// Parse the header of a container and rebuild its code table, without
/// decoding the payload.
pub fn inspect(container: &[u8]) -> Result<ContainerSummary> {
    let (header, payload) = Header::read_from(container)?;
    let codes = match build_huffman_tree(&header.table) {
        Ok(tree) => Some(build_code_table(&tree)),
        Err(Error::NoData) => None,
        Err(e) => return Err(e),
    };
    Ok(ContainerSummary {
        header_bytes: container.len() - payload.len(),
        payload_bytes: payload.len(),
        header,
        codes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let packed = dir.path().join("src.huff");
        let restored = dir.path().join("restored.txt");
        let text = b"It was the best of times, it was the worst of times.".repeat(20);
        fs::write(&src, &text).unwrap();

        let c = compress_file(&src, &packed).unwrap();
        assert_eq!(c.input_bytes, text.len());
        assert!(c.ratio() < 1.0);

        let d = decompress_file(&packed, &restored).unwrap();
        assert_eq!(d.output_bytes, text.len());
        assert_eq!(fs::read(&restored).unwrap(), text);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = compress_file(dir.path().join("does-not-exist"), dir.path().join("never"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!dir.path().join("never").exists());
    }

    #[test]
    fn test_corrupt_container_writes_nothing() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("corrupt.huff");
        let out = dir.path().join("corrupt.out");
        fs::write(&src, [0u8, 0, 0]).unwrap();
        assert!(matches!(decompress_file(&src, &out), Err(Error::Format(_))));
        assert!(!out.exists());
    }

    #[test]
    fn test_inspect() {
        let packed = compress(b"aaab").unwrap();
        let summary = inspect(&packed).unwrap();
        assert_eq!(summary.header.symbol_count, 4);
        assert_eq!(summary.header_bytes, 4 + 2 * 5 + 5);
        assert_eq!(summary.payload_bytes, 1);
        assert_eq!(summary.codes.map(|c| c.len()), Some(2));

        let empty = inspect(&compress(b"").unwrap()).unwrap();
        assert!(empty.codes.is_none());
        assert_eq!(empty.payload_bytes, 0);
    }
}
