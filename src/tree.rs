//! Suffix tree by Ukkonen's algorithm.
//!
//! # Overview
//!
//! An explicit compressed trie of every suffix of the sentinel-padded text,
//! built online in one pass. The construction cursor is the **active
//! point** (node, edge position, length along edge) plus `remainder`, the
//! number of suffixes still pending insertion in the current phase.
//!
//! Two classic tricks keep the pass linear:
//!
//! - all open leaves share a single `leaf_end` cursor, so advancing one
//!   counter extends every open leaf edge at once;
//! - suffix links let the active point jump to the next pending suffix
//!   without rescanning from the root.
//!
//! The sentinel guarantees no suffix is left implicit: every suffix of the
//! padded text ends at its own explicit leaf.
//!
//! Nodes live in an append-only arena indexed by `usize`; edge labels are
//! half-open ranges `[start, end)` into the padded text, and a leaf stores
//! [`EdgeEnd::Open`] instead of a fixed endpoint.
//!
//! # Examples
//!
//! ```rust
//! use suffix_index::text::Text;
//! use suffix_index::tree::SuffixTree;
//!
//! let text = Text::new(vec![1, 2, 1, 2], 2).unwrap();
//! let tree = SuffixTree::build(&text);
//!
//! // One leaf per suffix of the padded text (sentinel suffix included).
//! assert_eq!(tree.suffixes().len(), 5);
//! ```

use smallvec::SmallVec;

use crate::text::{Text, SENTINEL};

/// Arena index of the root node.
const ROOT: usize = 0;

/// Child edges of one node, sorted by the first symbol of the edge label.
type ChildList = SmallVec<[(u8, usize); 4]>;

/// Endpoint of an edge label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeEnd {
    /// Fixed endpoint (internal nodes, and the root's empty label).
    Closed(usize),
    /// Open leaf edge: the endpoint is the tree's shared `leaf_end`
    /// cursor, advanced once per phase for all open leaves at once.
    Open,
}

/// A suffix tree node.
///
/// The edge label is the path from the parent; the root carries the empty
/// range. Suffix links of internal nodes point at the node whose path is
/// this node's path minus its first symbol; the root links to itself.
#[derive(Clone, Debug)]
struct Node {
    start: usize,
    end: EdgeEnd,
    children: ChildList,
    suffix_link: usize,
}

impl Node {
    fn new(start: usize, end: EdgeEnd) -> Self {
        Self {
            start,
            end,
            children: ChildList::new(),
            suffix_link: ROOT,
        }
    }

    fn child(&self, label: u8) -> Option<usize> {
        self.children
            .iter()
            .find(|(code, _)| *code == label)
            .map(|(_, target)| *target)
    }

    fn set_child(&mut self, label: u8, target: usize) {
        match self
            .children
            .binary_search_by_key(&label, |(code, _)| *code)
        {
            Ok(idx) => self.children[idx].1 = target,
            Err(idx) => self.children.insert(idx, (label, target)),
        }
    }
}

/// Suffix tree over one fixed text, sentinel-terminated internally.
///
/// Fully built by [`SuffixTree::build`]; the arena is read-only afterward.
#[derive(Clone, Debug)]
pub struct SuffixTree {
    nodes: Vec<Node>,
    padded: Vec<u8>,

    /// Shared endpoint of every open leaf; equals `padded.len()` once
    /// construction is done.
    leaf_end: usize,

    // Active point and pending-suffix count, only meaningful mid-build.
    active_node: usize,
    active_edge: usize,
    active_length: usize,
    remainder: usize,
}

impl SuffixTree {
    /// Build the tree over the sentinel-padded text in one online pass.
    pub fn build(text: &Text) -> Self {
        let padded = text.padded();
        let mut tree = Self {
            nodes: vec![Node::new(0, EdgeEnd::Closed(0))],
            padded,
            leaf_end: 0,
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remainder: 0,
        };
        for pos in 0..tree.padded.len() {
            tree.extend(pos);
        }
        tree
    }

    /// One Ukkonen phase: insert (implicitly or explicitly) every suffix
    /// ending at `pos`.
    fn extend(&mut self, pos: usize) {
        self.leaf_end = pos + 1;
        self.remainder += 1;
        let mut last_new_node: Option<usize> = None;

        while self.remainder > 0 {
            if self.active_length == 0 {
                self.active_edge = pos;
            }
            let edge_label = self.padded[self.active_edge];

            if let Some(next) = self.nodes[self.active_node].child(edge_label) {
                let next_len = self.edge_length(next);
                if self.active_length >= next_len {
                    // Walk down: the active point lies past this edge.
                    self.active_node = next;
                    self.active_length -= next_len;
                    self.active_edge += next_len;
                    continue;
                }

                let probe = self.nodes[next].start + self.active_length;
                if self.padded[probe] == self.padded[pos] {
                    // Implicit extension: the suffix is already present.
                    if let Some(pending) = last_new_node {
                        if self.active_node != ROOT {
                            self.nodes[pending].suffix_link = self.active_node;
                        }
                    }
                    self.active_length += 1;
                    break;
                }

                // Mismatch inside the edge: split it at the active length.
                let split = self.nodes.len();
                self.nodes
                    .push(Node::new(self.nodes[next].start, EdgeEnd::Closed(probe)));
                let leaf = self.nodes.len();
                self.nodes.push(Node::new(pos, EdgeEnd::Open));

                self.nodes[next].start = probe;
                self.nodes[split].set_child(self.padded[pos], leaf);
                self.nodes[split].set_child(self.padded[probe], next);
                self.nodes[self.active_node].set_child(edge_label, split);

                if let Some(pending) = last_new_node {
                    self.nodes[pending].suffix_link = split;
                }
                last_new_node = Some(split);
            } else {
                // No edge starts with this symbol: new leaf from the
                // active node.
                let leaf = self.nodes.len();
                self.nodes.push(Node::new(pos, EdgeEnd::Open));
                self.nodes[self.active_node].set_child(edge_label, leaf);

                if let Some(pending) = last_new_node {
                    self.nodes[pending].suffix_link = self.active_node;
                    last_new_node = None;
                }
            }

            self.remainder -= 1;
            if self.active_node == ROOT && self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge = pos - self.remainder + 1;
            } else if self.active_node != ROOT {
                self.active_node = self.nodes[self.active_node].suffix_link;
            }
        }
    }

    fn edge_length(&self, node: usize) -> usize {
        self.edge_end(node) - self.nodes[node].start
    }

    fn edge_end(&self, node: usize) -> usize {
        match self.nodes[node].end {
            EdgeEnd::Closed(end) => end,
            EdgeEnd::Open => self.leaf_end,
        }
    }

    /// Per-node count of distinct suffix end positions in the subtree.
    ///
    /// One iterative post-order pass with an explicit `(node, child)`
    /// stack: a leaf child contributes 1, an internal child its computed
    /// count. For an internal node this is exactly the number of
    /// occurrences of the substring spelled root-to-node. Scratch data in
    /// arena order; the tree is never mutated, so repeated calls agree.
    pub fn leaf_counts(&self) -> Vec<u64> {
        let mut counts = vec![0u64; self.nodes.len()];
        let mut stack: Vec<(usize, usize)> = vec![(ROOT, 0)];

        while let Some((node, child_idx)) = stack.pop() {
            if child_idx < self.nodes[node].children.len() {
                let (_, child) = self.nodes[node].children[child_idx];
                stack.push((node, child_idx + 1));
                if !self.is_leaf(child) {
                    stack.push((child, 0));
                }
            } else {
                counts[node] = self.nodes[node]
                    .children
                    .iter()
                    .map(|&(_, child)| {
                        if self.is_leaf(child) {
                            1
                        } else {
                            counts[child]
                        }
                    })
                    .sum();
            }
        }
        counts
    }

    /// Spell every root-to-leaf path (sentinel included).
    ///
    /// Each returned sequence is one suffix of the padded text; the
    /// path-spelling property says these are exactly the padded suffixes,
    /// one leaf each.
    pub fn suffixes(&self) -> Vec<Vec<u8>> {
        let mut result = Vec::new();
        let mut path: Vec<(usize, usize)> = Vec::new();
        let mut stack: Vec<(usize, usize)> = vec![(ROOT, 0)];

        while let Some((node, child_idx)) = stack.pop() {
            if child_idx == 0 && node != ROOT {
                path.push((self.nodes[node].start, self.edge_end(node)));
                if self.is_leaf(node) {
                    let mut suffix = Vec::new();
                    for &(start, end) in &path {
                        suffix.extend_from_slice(&self.padded[start..end]);
                    }
                    result.push(suffix);
                }
            }
            if child_idx < self.nodes[node].children.len() {
                let (_, child) = self.nodes[node].children[child_idx];
                stack.push((node, child_idx + 1));
                stack.push((child, 0));
            } else if node != ROOT {
                path.pop();
            }
        }
        result
    }

    /// Number of nodes in the arena (root included).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_leaf(&self, node: usize) -> bool {
        self.nodes[node].end == EdgeEnd::Open
    }

    pub(crate) fn children_of(&self, node: usize) -> &[(u8, usize)] {
        &self.nodes[node].children
    }

    /// Half-open edge label range of `node`, with open ends resolved.
    pub(crate) fn range(&self, node: usize) -> (usize, usize) {
        (self.nodes[node].start, self.edge_end(node))
    }

    pub(crate) fn padded_symbols(&self) -> &[u8] {
        &self.padded
    }

    pub(crate) fn padded_len(&self) -> usize {
        self.padded.len()
    }

    pub(crate) const fn root() -> usize {
        ROOT
    }
}
