//! Code table generation from a Huffman tree.

use super::tree::{HuffmanNode, HuffmanTree, NodeId};
use bitvec::prelude::*;

/// A single Huffman code, most significant (first emitted) bit first.
pub type Code = BitVec<u8, Msb0>;

/// Maps each symbol present in the tree to its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
    len: usize,
}

impl CodeTable {
    fn empty() -> Self {
        CodeTable {
            codes: vec![None; 256],
            len: 0,
        }
    }

    fn insert(&mut self, symbol: u8, code: Code) {
        if self.codes[symbol as usize].replace(code).is_none() {
            self.len += 1;
        }
    }

    /// The code for `symbol`, if it has one.
    pub fn get(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[symbol as usize].as_deref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        (0..=u8::MAX)
            .zip(self.codes.iter())
            .filter_map(|(symbol, code)| code.as_deref().map(|code| (symbol, code)))
    }
}

/// Build the code table for `tree`: `0` for a left edge, `1` for a right edge.
///
/// If the tree is a single leaf, that symbol gets the one-bit code `0`.
pub fn build_code_table(tree: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable::empty();

    if let Some(symbol) = tree.single_symbol() {
        table.insert(symbol, bitvec![u8, Msb0; 0]);
        return table;
    }

    let mut stack: Vec<(NodeId, Code)> = vec![(tree.root(), Code::new())];
    while let Some((id, prefix)) = stack.pop() {
        match *tree.node(id) {
            HuffmanNode::Leaf { symbol, .. } => table.insert(symbol, prefix),
            HuffmanNode::Internal { left, right, .. } => {
                let mut right_prefix = prefix.clone();
                right_prefix.push(true);
                stack.push((right, right_prefix));
                let mut left_prefix = prefix;
                left_prefix.push(false);
                stack.push((left, left_prefix));
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::huffman::frequency::{build_frequency_table, FrequencyTable};
    use crate::compression::huffman::tree::build_huffman_tree;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn codes_for(input: &[u8]) -> CodeTable {
        let freq = build_frequency_table(input).unwrap();
        build_code_table(&build_huffman_tree(&freq).unwrap())
    }

    fn bits(s: &str) -> Code {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_every_symbol_has_a_code() {
        let input = b"this is an example for huffman encoding";
        let table = codes_for(input);
        for &byte in input.iter() {
            assert!(table.get(byte).is_some(), "missing code for {:?}", byte as char);
        }
        assert_eq!(table.len(), build_frequency_table(input).unwrap().len());
    }

    #[test]
    fn test_single_symbol_gets_zero_code() {
        let table = codes_for(b"aaaaaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'a').unwrap(), bits("0").as_bitslice());
    }

    #[test]
    fn test_known_codes() {
        // a:1 b:1 c:2 -> root(c, (a, b))
        let freq = FrequencyTable::from_entries([(b'a', 1), (b'b', 1), (b'c', 2)]).unwrap();
        let table = build_code_table(&build_huffman_tree(&freq).unwrap());
        assert_eq!(table.get(b'c').unwrap(), bits("0").as_bitslice());
        assert_eq!(table.get(b'a').unwrap(), bits("10").as_bitslice());
        assert_eq!(table.get(b'b').unwrap(), bits("11").as_bitslice());
    }

    fn assert_prefix_free(table: &CodeTable) {
        let codes: Vec<_> = table.iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(*a), "code {:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let all: Vec<u8> = (0..=255u8)
            .flat_map(|b| std::iter::repeat(b).take(1 + (b as usize * 7) % 13))
            .collect();
        let table = codes_for(&all);
        assert_eq!(table.len(), 256);
        assert_prefix_free(&table);
    }

    #[test]
    fn test_random_tables_are_prefix_free() {
        let mut rng = StdRng::seed_from_u64(0xc0de);
        for _ in 0..200 {
            let symbols = rng.gen_range(1..=256usize);
            // Mix tiny and huge counts so ties and deep chains both occur.
            let rng_cell = std::cell::RefCell::new(&mut rng);
            let entries: Vec<(u8, u32)> = (0..=255u8)
                .filter(|_| rng_cell.borrow_mut().gen_range(0..256usize) < symbols)
                .map(|s| {
                    let mut rng = rng_cell.borrow_mut();
                    let count = if rng.gen_bool(0.5) {
                        rng.gen_range(1..4)
                    } else {
                        rng.gen_range(1..1_000_000)
                    };
                    (s, count)
                })
                .collect();
            if entries.is_empty() {
                continue;
            }
            let freq = FrequencyTable::from_entries(entries.iter().copied()).unwrap();
            let table = build_code_table(&build_huffman_tree(&freq).unwrap());
            assert_eq!(table.len(), entries.len());
            for &(symbol, _) in &entries {
                assert!(table.get(symbol).map_or(false, |c| !c.is_empty()));
            }
            assert_prefix_free(&table);
        }
    }

    #[test]
    fn test_more_frequent_symbols_get_shorter_codes() {
        let table = codes_for(b"eeeeeeeeeeeeeeeetaoi");
        let e = table.get(b'e').unwrap().len();
        for sym in [b't', b'a', b'o', b'i'] {
            assert!(e <= table.get(sym).unwrap().len());
        }
    }
}
