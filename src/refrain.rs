//! Repeated-substring maximizers: find a substring with the largest
//! `occurrences × length` product.
//!
//! # Overview
//!
//! Three independent realizations of the same query, one per index
//! structure. All three return the identical maximal value for the same
//! text; the reported substring may differ between structures when several
//! substrings tie, but each is a true substring attaining the value.
//!
//! - [`via_automaton`]: every automaton state is a candidate, scoring its
//!   occurrence count times its longest length, reconstructed through the
//!   first-occurrence end position.
//! - [`via_suffix_array`]: ascending sweep over LCP entries with a sorted
//!   boundary set; each entry bounds a contiguous rank range over which it
//!   is a common-prefix lower bound.
//! - [`via_suffix_tree`]: depth-first walk accumulating path length;
//!   every internal node's subtree leaf count is the occurrence count of
//!   its path substring.
//!
//! Every maximizer starts from the whole-string candidate (value `n`, one
//! occurrence), so improvement comparisons are strict and ties keep the
//! earlier candidate in that structure's own iteration order.
//!
//! # Examples
//!
//! ```rust
//! use suffix_index::refrain;
//! use suffix_index::text::Text;
//!
//! let text = Text::new(vec![1, 2, 1, 2, 1], 2).unwrap();
//! let best = refrain::via_automaton(&text);
//!
//! // "1 2 1" occurs twice: 2 × 3 = 6 beats the whole string's 5.
//! assert_eq!(best.value, 6);
//! assert_eq!(best.symbols, vec![1, 2, 1]);
//! ```

use std::collections::BTreeSet;

use crate::array::SuffixArray;
use crate::automaton::SuffixAutomaton;
use crate::text::{Text, SENTINEL};
use crate::tree::SuffixTree;

/// One maximizing substring and its `occurrences × length` value.
///
/// The value is 64-bit: both factors can reach the text length, so the
/// product overflows 32 bits long before memory runs out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repeat {
    /// The maximal `occurrences × length` product; 0 for empty text.
    pub value: u64,
    /// One substring attaining the value, as internal symbol codes.
    pub symbols: Vec<u8>,
}

impl Repeat {
    /// Length of the reported substring.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the reported substring is empty (only for empty text).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The substring in driver symbols (`1..=m`).
    ///
    /// Internal codes already equal the external symbols, so this is the
    /// identity mapping made explicit for output shims.
    pub fn external_symbols(&self) -> Vec<u8> {
        self.symbols.clone()
    }
}

/// Maximize `occurrences × length` through the suffix automaton.
pub fn via_automaton(text: &Text) -> Repeat {
    let automaton = SuffixAutomaton::build(text);
    let counts = automaton.occurrence_counts();

    let mut best_value = text.len() as u64;
    let mut best_start = 0usize;
    let mut best_len = text.len();

    for (idx, state) in automaton.states().iter().enumerate() {
        let candidate = counts[idx] * state.max_len as u64;
        if candidate > best_value {
            best_value = candidate;
            best_start = state.first_end + 1 - state.max_len;
            best_len = state.max_len;
        }
    }

    Repeat {
        value: best_value,
        symbols: text.symbols()[best_start..best_start + best_len].to_vec(),
    }
}

/// Maximize `occurrences × length` through the suffix array and LCP.
///
/// LCP entries are processed in ascending order. The boundary set holds
/// the indices already processed (bracketed by the −1 and `len`
/// sentinels); for the current entry, the nearest boundaries on each side
/// delimit the rank range over which its LCP value is a lower bound, and
/// the range width is the occurrence count.
pub fn via_suffix_array(text: &Text) -> Repeat {
    let array = SuffixArray::build(text);
    let positions = array.positions();
    let lcp = array.lcp();

    let mut best_value = text.len() as u64;
    let mut best_start = 0usize;
    let mut best_len = text.len();

    let mut entries: Vec<(usize, usize)> = lcp.iter().copied().zip(0..).collect();
    entries.sort_unstable();

    let mut boundaries: BTreeSet<i64> = BTreeSet::new();
    boundaries.insert(-1);
    boundaries.insert(lcp.len() as i64);

    for (lcp_len, idx) in entries {
        let i = idx as i64;
        let right = *boundaries.range(i..).next().unwrap();
        let left = *boundaries.range(..i).next_back().unwrap();

        let candidate = lcp_len as u64 * (right - left) as u64;
        if candidate > best_value {
            best_value = candidate;
            best_start = positions[(left + 1) as usize];
            best_len = lcp_len;
        }
        boundaries.insert(i);
    }

    Repeat {
        value: best_value,
        symbols: text.symbols()[best_start..best_start + best_len].to_vec(),
    }
}

/// Maximize `occurrences × length` through the suffix tree.
///
/// Walks the tree once with an explicit stack, accumulating the cumulative
/// path length with the sentinel excluded (an open leaf edge contributes
/// one less than its padded length, and sentinel-labeled children are
/// skipped outright). The best path's edge ranges reconstruct the literal
/// substring.
pub fn via_suffix_tree(text: &Text) -> Repeat {
    let tree = SuffixTree::build(text);
    let counts = tree.leaf_counts();
    let root = SuffixTree::root();

    let mut best_value = text.len() as u64;
    let mut best_path: Vec<(usize, usize)> = vec![(0, text.len())];

    let mut path: Vec<(usize, usize)> = Vec::new();
    let mut cum_len = 0u64;
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

    while let Some((node, child_idx)) = stack.pop() {
        if child_idx == 0 && node != root {
            let (start, mut end) = tree.range(node);
            if end == tree.padded_len() {
                // Open leaf edge: its last symbol is the sentinel.
                end -= 1;
            }
            path.push((start, end));
            cum_len += (end - start) as u64;

            let candidate = cum_len * counts[node];
            if candidate > best_value {
                best_value = candidate;
                best_path = path.clone();
            }
        }

        let children = tree.children_of(node);
        if child_idx < children.len() {
            let (label, child) = children[child_idx];
            stack.push((node, child_idx + 1));
            if label != SENTINEL {
                stack.push((child, 0));
            }
        } else if node != root {
            let (start, end) = path.pop().unwrap();
            cum_len -= (end - start) as u64;
        }
    }

    let mut symbols = Vec::new();
    for &(start, end) in &best_path {
        symbols.extend_from_slice(&tree.padded_symbols()[start..end]);
    }
    Repeat {
        value: best_value,
        symbols,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(symbols: &[u8]) -> Text {
        Text::new(symbols.to_vec(), 26).unwrap()
    }

    fn all_three(symbols: &[u8]) -> [Repeat; 3] {
        let text = text(symbols);
        [
            via_automaton(&text),
            via_suffix_array(&text),
            via_suffix_tree(&text),
        ]
    }

    /// Count (possibly overlapping) occurrences of `pattern` by scanning.
    fn naive_occurrences(symbols: &[u8], pattern: &[u8]) -> u64 {
        if pattern.is_empty() || pattern.len() > symbols.len() {
            return 0;
        }
        symbols
            .windows(pattern.len())
            .filter(|window| *window == pattern)
            .count() as u64
    }

    #[test]
    fn empty_text_reports_zero() {
        for repeat in all_three(&[]) {
            assert_eq!(repeat.value, 0);
            assert!(repeat.is_empty());
        }
    }

    #[test]
    fn single_symbol_reports_itself() {
        for repeat in all_three(&[4]) {
            assert_eq!(repeat.value, 1);
            assert_eq!(repeat.symbols, vec![4]);
        }
    }

    #[test]
    fn whole_string_wins_on_distinct_symbols() {
        for repeat in all_three(&[1, 2, 3, 4]) {
            assert_eq!(repeat.value, 4);
            assert_eq!(repeat.len(), 4);
        }
    }

    #[test]
    fn repeated_symbol_run_optimum() {
        // 1^5: "1 1 1" occurs 3 times, and 3 × 3 = 9 beats both the whole
        // string (5 × 1) and the single symbol (1 × 5).
        for repeat in all_three(&[1, 1, 1, 1, 1]) {
            assert_eq!(repeat.value, 9);
            assert_eq!(
                naive_occurrences(&[1, 1, 1, 1, 1], &repeat.symbols)
                    * repeat.len() as u64,
                9
            );
        }
    }

    #[test]
    fn overlapping_pair_beats_whole_string() {
        // 1 2 1 2 1: "1 2 1" twice gives 6.
        for repeat in all_three(&[1, 2, 1, 2, 1]) {
            assert_eq!(repeat.value, 6);
            assert_eq!(
                naive_occurrences(&[1, 2, 1, 2, 1], &repeat.symbols)
                    * repeat.len() as u64,
                6
            );
        }
    }

    #[test]
    fn refrain_scenario_11212() {
        // The whole string occurs once with length 5, beating the 2 × 2 of
        // "1 2"; every structure seeds with that candidate and reports 5.
        for repeat in all_three(&[1, 1, 2, 1, 2]) {
            assert_eq!(repeat.value, 5);
            assert_eq!(
                naive_occurrences(&[1, 1, 2, 1, 2], &repeat.symbols)
                    * repeat.len() as u64,
                5
            );
        }
    }

    #[test]
    fn structures_agree_on_value() {
        for symbols in [
            &[1u8, 1, 2, 1, 1, 2, 1][..],
            &[2, 2, 2, 1, 2, 2, 2],
            &[1, 2, 2, 1, 2, 2, 1, 2],
            &[3, 1, 4, 1, 5, 1, 3, 1],
        ] {
            let [a, b, c] = all_three(symbols);
            assert_eq!(a.value, b.value, "{symbols:?}");
            assert_eq!(b.value, c.value, "{symbols:?}");
            for repeat in [a, b, c] {
                assert_eq!(
                    naive_occurrences(symbols, &repeat.symbols) * repeat.len() as u64,
                    repeat.value,
                    "{symbols:?}"
                );
            }
        }
    }

    #[test]
    fn external_symbols_round_trip() {
        let repeat = via_automaton(&text(&[2, 1, 2, 1]));
        assert_eq!(repeat.external_symbols(), repeat.symbols);
    }
}
