//! Byte frequency analysis.

use crate::compression::Result;
use crate::error::Error;
use std::collections::BTreeMap;

/// Inputs at least this long are counted in parallel when the `parallel`
/// feature is enabled.
pub const PARALLEL_THRESHOLD: usize = 1 << 20;

/// Occurrence counts for the bytes present in an input.
///
/// Only symbols that occur are stored, iteration is in ascending symbol
/// order, and the counts always sum to at most `u32::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u32>,
    total: u32,
}

impl FrequencyTable {
    /// Build a table from `(symbol, count)` pairs, e.g. as read from a header.
    ///
    /// Rejects zero counts, repeated symbols and totals that overflow `u32`.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u32)>,
    {
        let mut counts = BTreeMap::new();
        let mut total: u32 = 0;
        for (symbol, count) in entries {
            if count == 0 {
                return Err(Error::Format(format!(
                    "symbol {:#04x} has a zero frequency",
                    symbol
                )));
            }
            if counts.insert(symbol, count).is_some() {
                return Err(Error::Format(format!(
                    "symbol {:#04x} appears more than once",
                    symbol
                )));
            }
            total = total
                .checked_add(count)
                .ok_or_else(|| Error::format("frequencies sum past u32::MAX"))?;
        }
        Ok(FrequencyTable { counts, total })
    }

    /// Count of `symbol`, zero if it never occurs.
    pub fn get(&self, symbol: u8) -> u32 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the input it was built from.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    fn from_histogram(histogram: &[u32; 256]) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for (symbol, &count) in (0..=u8::MAX).zip(histogram.iter()) {
            if count > 0 {
                counts.insert(symbol, count);
                total += count;
            }
        }
        FrequencyTable { counts, total }
    }
}

/// Build a frequency table mapping each byte in `input` to its count.
///
/// An empty input yields an empty table.
///
/// # Errors
///
/// [`Error::InputTooLarge`] if `input` is longer than `u32::MAX` bytes.
pub fn build_frequency_table(input: &[u8]) -> Result<FrequencyTable> {
    if u32::try_from(input.len()).is_err() {
        return Err(Error::InputTooLarge(input.len()));
    }
    Ok(FrequencyTable::from_histogram(&histogram(input)))
}

fn count_into(histogram: &mut [u32; 256], input: &[u8]) {
    for &byte in input {
        histogram[byte as usize] += 1;
    }
}

#[cfg(feature = "parallel")]
fn histogram(input: &[u8]) -> [u32; 256] {
    use rayon::prelude::*;

    if input.len() < PARALLEL_THRESHOLD {
        let mut counts = [0u32; 256];
        count_into(&mut counts, input);
        return counts;
    }

    // Addition is commutative, so the merged result matches the sequential one.
    input
        .par_chunks(PARALLEL_THRESHOLD / 4)
        .map(|chunk| {
            let mut counts = [0u32; 256];
            count_into(&mut counts, chunk);
            counts
        })
        .reduce(
            || [0u32; 256],
            |mut acc, part| {
                for (a, p) in acc.iter_mut().zip(part.iter()) {
                    *a += p;
                }
                acc
            },
        )
}

#[cfg(not(feature = "parallel"))]
fn histogram(input: &[u8]) -> [u32; 256] {
    let mut counts = [0u32; 256];
    count_into(&mut counts, input);
    counts
}
