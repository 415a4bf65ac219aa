//! Huffman tree construction.
//!
//! Nodes live in an arena and refer to their children by index. Leaves are
//! pushed in ascending symbol order and every merged node is appended after
//! them, so a node's index is also its insertion order into the working set.
//! The queue orders by `(freq, index)`: the lowest frequency wins and ties go
//! to the node inserted first. Encoder and decoder therefore build the same
//! tree from the same frequency table.

use super::frequency::FrequencyTable;
use crate::compression::Result;
use crate::error::Error;
use log::trace;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Index of a node inside a [`HuffmanTree`].
pub type NodeId = usize;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node holds a symbol and its frequency.
    Leaf { symbol: u8, freq: u64 },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }
}

/// A complete Huffman tree stored as a node arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
    root: NodeId,
}

impl HuffmanTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &HuffmanNode {
        &self.nodes[id]
    }

    /// Total number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The symbol of the root if the whole tree is a single leaf.
    pub fn single_symbol(&self) -> Option<u8> {
        match self.nodes[self.root] {
            HuffmanNode::Leaf { symbol, .. } => Some(symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }
}

/// Working-set entry; the smallest `(freq, id)` has the highest priority.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct QueueEntry {
    freq: u64,
    id: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table.
///
/// A table with one symbol yields a tree that is a single leaf.
///
/// # Errors
///
/// [`Error::NoData`] if the table is empty.
pub fn build_huffman_tree(table: &FrequencyTable) -> Result<HuffmanTree> {
    if table.is_empty() {
        return Err(Error::NoData);
    }

    // n leaves plus n - 1 merges
    let mut nodes = Vec::with_capacity(2 * table.len() - 1);
    let mut heap = BinaryHeap::with_capacity(table.len());
    for (symbol, count) in table.iter() {
        let freq = u64::from(count);
        heap.push(QueueEntry {
            freq,
            id: nodes.len(),
        });
        nodes.push(HuffmanNode::Leaf { symbol, freq });
    }

    while let (Some(left), Some(right)) = (heap.pop(), heap.pop()) {
        let freq = left.freq + right.freq;
        let id = nodes.len();
        trace!(
            "merge node {} (freq {}) + node {} (freq {}) -> node {}",
            left.id,
            left.freq,
            right.id,
            right.freq,
            id
        );
        nodes.push(HuffmanNode::Internal {
            freq,
            left: left.id,
            right: right.id,
        });
        heap.push(QueueEntry { freq, id });
    }

    // The root is always the last node pushed.
    let root = nodes.len() - 1;
    Ok(HuffmanTree { nodes, root })
}
